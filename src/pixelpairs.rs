// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the squared distance
//! between the colors that make them up:
//!
//! ```text
//!     D(p, q) = (Δr)² + (Δg)² + (Δb)²
//! ```
//!
//! Every cost in the carver, gradient or forward, is a sum of these.

use itertools::zip;
use num_traits::pow;

/// The largest value `energy_of_pair` can return: three channels, each
/// a full 255 apart.
pub const MAX_PAIR_ENERGY: u32 = 3 * 255 * 255;

/// (Pixel, Pixel) -> Energy
#[inline]
pub fn energy_of_pair(p1: &[u8], p2: &[u8]) -> u32 {
    zip(p1, p2)
        .map(|(c1, c2)| pow((i32::from(*c1) - i32::from(*c2)).unsigned_abs(), 2))
        .sum()
}
