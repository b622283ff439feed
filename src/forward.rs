// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the cost of an image using the Avidan & Shamir "Forward
//! Energy" algorithm.
//!
//! Rather than asking how much contrast a pixel has, forward energy
//! asks how much *new* contrast appears when the pixel is removed and
//! its neighbors are pushed together.  That depends on which way the
//! seam arrived, so there are three costs per pixel:
//!
//! ```text
//!  CL(x,y) = D[(x−1,y),(x+1,y)]+D[(x,y−1),(x−1,y)]
//!  CU(x,y) = D[(x−1,y),(x+1,y)]
//!  CR(x,y) = D[(x−1,y),(x+1,y)]+D[(x,y−1),(x+1,y)]
//! ```
//!
//! Pixels on the top row have nothing above them:
//!
//! ```text
//!  CL(x,0) = 0
//!  CU(x,0) = D[(x−1,0),(x+1,0)]
//!  CR(x,0) = 0
//! ```
//!
//! At the left and right edges the missing neighbor is the pixel
//! itself, exactly as with the gradient energy.  The seam graph then
//! computes:
//!
//! ```text
//!            ⎧ M(x−1,y−1)+CL(x,y)
//!  M(x,y)=min⎨ M(x,y−1)+CU(x,y)
//!            ⎩ M(x+1,y−1)+CR(x,y)
//! ```

use crate::costmodel::{fill_cost_field, CostField, CostModel, StepCosts};
use crate::error::SeamError;
use crate::pixelbuffer::PixelBuffer;
use crate::pixelpairs::energy_of_pair;

/// The cost of the seam the removal of each pixel would leave behind.
#[derive(Debug, Default, Copy, Clone)]
pub struct ForwardEnergy;

fn forward_row(image: &PixelBuffer, y: u32, row: &mut [StepCosts]) {
    let mw = image.width() - 1;

    for (x, cell) in (0..image.width()).zip(row.iter_mut()) {
        let current_pixel = image.pixel(x, y);
        let leftpixel = cq!(x == 0, current_pixel, image.pixel(x - 1, y));
        let rightpixel = cq!(x >= mw, current_pixel, image.pixel(x + 1, y));
        let across = energy_of_pair(leftpixel, rightpixel);

        *cell = if y == 0 {
            StepCosts {
                left: 0,
                up: across,
                right: 0,
            }
        } else {
            let uppixel = image.pixel(x, y - 1);
            StepCosts {
                left: across + energy_of_pair(uppixel, leftpixel),
                up: across,
                right: across + energy_of_pair(uppixel, rightpixel),
            }
        };
    }
}

impl CostModel for ForwardEnergy {
    fn name(&self) -> &'static str {
        "forward"
    }

    fn cost_field(&self, image: &PixelBuffer) -> Result<CostField, SeamError> {
        image.check_carvable()?;
        fill_cost_field(image, |y, row| forward_row(image, y, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sc(left: u32, up: u32, right: u32) -> StepCosts {
        StepCosts { left, up, right }
    }

    fn row_of(field: &CostField, y: u32) -> Vec<StepCosts> {
        (0..field.width()).map(|x| field.costs(x, y)).collect()
    }

    //   10  20  40
    //    5   0  15
    //   30  60  90
    fn red_fixture() -> PixelBuffer {
        const RED: [u8; 9] = [10, 20, 40, 5, 0, 15, 30, 60, 90];
        PixelBuffer::from_fn(3, 3, |x, y| [RED[(y * 3 + x) as usize], 0, 0])
    }

    #[test]
    fn top_row_only_charges_straight_down() {
        let field = ForwardEnergy.cost_field(&red_fixture()).unwrap();
        assert_eq!(row_of(&field, 0), vec![sc(0, 100, 0), sc(0, 900, 0), sc(0, 400, 0)]);
    }

    #[test]
    fn diagonal_arrivals_pay_for_the_new_vertical_edge() {
        let field = ForwardEnergy.cost_field(&red_fixture()).unwrap();
        assert_eq!(
            row_of(&field, 1),
            vec![sc(50, 25, 125), sc(325, 100, 125), sc(1825, 225, 850)]
        );
        assert_eq!(
            row_of(&field, 2),
            vec![sc(1525, 900, 3925), sc(4500, 3600, 11700), sc(2925, 900, 6525)]
        );
    }

    #[test]
    fn flat_images_cost_nothing() {
        let image = PixelBuffer::from_fn(4, 3, |_, _| [80, 120, 40]);
        let field = ForwardEnergy.cost_field(&image).unwrap();
        for y in 0..3 {
            assert!(row_of(&field, y).iter().all(|c| *c == StepCosts::default()));
        }
    }

    #[test]
    fn forward_energy_is_pure() {
        let image = PixelBuffer::from_fn(6, 4, |x, y| [(x * 40) as u8, (y * 60) as u8, 7]);
        assert_eq!(
            ForwardEnergy.cost_field(&image).unwrap(),
            ForwardEnergy.cost_field(&image).unwrap()
        );
    }
}
