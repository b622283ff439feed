// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Carving errors
//!
//! Every stage of the carver returns one of these rather than
//! panicking.  None of them are worth retrying: the same input will
//! fail the same way every time.

use crate::pixelbuffer::PixelBuffer;
use failure::Fail;

#[derive(Debug, Fail)]
pub enum SeamError {
    #[fail(display = "unable to allocate {} cells for the {}", cells, purpose)]
    AllocationFailure { purpose: &'static str, cells: usize },

    #[fail(
        display = "cannot carve a {}x{} image: width must be at least 2 and height at least 1",
        width, height
    )]
    InvalidDimensions { width: u32, height: u32 },

    #[fail(
        display = "a {}x{} RGB image needs {} bytes, but {} were supplied",
        width, height, expected, len
    )]
    BufferLength {
        width: u32,
        height: u32,
        expected: usize,
        len: usize,
    },

    #[fail(display = "seam does not fit a {}x{} image", width, height)]
    InvalidSeam { width: u32, height: u32 },

    #[fail(display = "{}: {}", path, message)]
    Codec { path: String, message: String },

    #[fail(display = "this carver has already run; build a new one to carve again")]
    Spent,

    #[fail(display = "a cost worker thread panicked")]
    WorkerPanic,
}

impl SeamError {
    /// Shorthand for the allocation failure of a `width` x `height` grid.
    pub(crate) fn no_room(purpose: &'static str, width: u32, height: u32) -> Self {
        SeamError::AllocationFailure {
            purpose,
            cells: (width as usize).saturating_mul(height as usize),
        }
    }
}

/// What a retargeting run hands back when it stops early: the iteration
/// that failed, why, and the narrowest image produced before it.
#[derive(Debug, Fail)]
#[fail(display = "carving stopped at iteration {}: {}", iteration, error)]
pub struct RetargetFailure {
    pub iteration: u32,
    #[fail(cause)]
    pub error: SeamError,
    pub last_image: PixelBuffer,
}
