// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient energy of an image
//!
//! The most straightforward of the energy maps: a pixel's energy is the
//! contrast between its left and right neighbors plus the contrast
//! between its upper and lower neighbors.
//!
//! ```text
//!        |Δx|² = D[(x−1,y),(x+1,y)]
//!        |Δy|² = D[(x,y−1),(x,y+1)]
//!       e(x,y) = |Δx|²+|Δy|²
//! ```
//!
//! A neighbor that would fall off the image is replaced by the pixel
//! itself, so pixels along the border see a one-sided gradient.

use crate::costmodel::{fill_cost_field, CostField, CostModel, StepCosts};
use crate::error::SeamError;
use crate::pixelbuffer::PixelBuffer;
use crate::pixelpairs::energy_of_pair;

/// Local contrast.  The cost of a seam passing through a pixel does not
/// depend on where the seam came from.
#[derive(Debug, Default, Copy, Clone)]
pub struct GradientEnergy;

fn energy_row(image: &PixelBuffer, y: u32, row: &mut [StepCosts]) {
    let (width, height) = image.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    for (x, cell) in (0..width).zip(row.iter_mut()) {
        let current_pixel = image.pixel(x, y);
        let (leftpixel, rightpixel, uppixel, downpixel) = (
            cq!(x == 0, current_pixel, image.pixel(x - 1, y)),
            cq!(x >= mw, current_pixel, image.pixel(x + 1, y)),
            cq!(y == 0, current_pixel, image.pixel(x, y - 1)),
            cq!(y >= mh, current_pixel, image.pixel(x, y + 1)),
        );
        *cell = StepCosts::uniform(
            energy_of_pair(leftpixel, rightpixel) + energy_of_pair(uppixel, downpixel),
        );
    }
}

impl CostModel for GradientEnergy {
    fn name(&self) -> &'static str {
        "gradient"
    }

    fn cost_field(&self, image: &PixelBuffer) -> Result<CostField, SeamError> {
        image.check_carvable()?;
        fill_cost_field(image, |y, row| energy_row(image, y, row))
    }
}
