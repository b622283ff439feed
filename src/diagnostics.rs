// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Looking inside the carver
//!
//! The carver can report what it is doing as it goes: the cost field it
//! computed for the original image, and every seam it is about to
//! remove.  Nothing reported here feeds back into the carve.  This
//! module also renders those reports into images a person can look at.

use crate::costmodel::CostField;
use crate::pixelbuffer::PixelBuffer;
use crate::seamfinder::SeamPath;
use image::{GrayImage, ImageBuffer, Luma};

/// The color seams are painted in.
pub const SEAM_MARKER: [u8; 3] = [255, 0, 0];

/// Receives the carver's intermediate products.  Both methods default
/// to doing nothing.
pub trait CarveObserver {
    /// The cost field of the image as it was handed in, before any seam
    /// was removed.
    fn cost_field(&mut self, _field: &CostField) {}

    /// The seam about to be removed from `image` on this iteration.
    fn seam(&mut self, _iteration: u32, _image: &PixelBuffer, _seam: &SeamPath) {}
}

/// An observer that ignores everything.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoDiagnostics;

impl CarveObserver for NoDiagnostics {}

/// Render a cost field as an 8-bit heatmap: each pixel's straight cost
/// divided by the field's largest, scaled to 0..=255.
pub fn energy_to_image(field: &CostField) -> GrayImage {
    let (width, height) = (field.width(), field.height());
    let mut factor: u64 = 1;
    for y in 0..height {
        for x in 0..width {
            factor = factor.max(u64::from(field.straight(x, y)));
        }
    }
    ImageBuffer::from_fn(width, height, |x, y| {
        Luma([(u64::from(field.straight(x, y)) * 255 / factor) as u8])
    })
}

/// A copy of `image` with the pixels of `seam` painted `SEAM_MARKER`.
pub fn draw_seam(image: &PixelBuffer, seam: &SeamPath) -> PixelBuffer {
    let mut painted = image.clone();
    for (y, x) in (0..image.height()).zip(seam.top_down()) {
        painted.pixel_mut(x, y).copy_from_slice(&SEAM_MARKER);
    }
    painted
}
