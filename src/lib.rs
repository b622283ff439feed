// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam carving for Rust
//!
//! Content-aware width reduction: find the connected, top-to-bottom
//! path of pixels whose removal disturbs the image least, cut it out,
//! and repeat.  Two ways of pricing pixels are provided, the classic
//! gradient energy and Avidan & Shamir's forward energy; both feed the
//! same seam graph.
//!
//! ```no_run
//! use seamcarve::{codec, ForwardEnergy, SeamCarver};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), failure::Error> {
//! let image = codec::decode(Path::new("tower.png"))?;
//! let narrower = SeamCarver::new(ForwardEnergy).carve(image, 50)?;
//! codec::encode(&narrower, Path::new("tower-50.png"))?;
//! # Ok(())
//! # }
//! ```

// A ternary expression.  Rust's `if` is already an expression, but
// rustfmt spreads it across five lines, and the table of border cases
// in the cost models is far easier to read one condition per line.
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

pub mod codec;
pub mod costmodel;
pub mod diagnostics;
pub mod energy;
pub mod error;
pub mod forward;
pub mod pixelbuffer;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamgraph;

pub use costmodel::{CostField, CostModel, CostModelKind, StepCosts};
pub use diagnostics::{CarveObserver, NoDiagnostics};
pub use energy::GradientEnergy;
pub use error::{RetargetFailure, SeamError};
pub use forward::ForwardEnergy;
pub use pixelbuffer::PixelBuffer;
pub use seamcarver::{remove_vertical_seam, CarveState, SeamCarver};
pub use seamfinder::{minimal_seam, SeamFinder, SeamPath};
pub use seamgraph::{SeamGraph, SeamLink};
