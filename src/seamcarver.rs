// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! Removing one seam, and the driver that keeps removing them: price
//! the image, build the seam graph, trace the cheapest seam, cut it
//! out, and go around again with the narrower image.

use crate::costmodel::CostModel;
use crate::diagnostics::{CarveObserver, NoDiagnostics};
use crate::error::{RetargetFailure, SeamError};
use crate::pixelbuffer::{PixelBuffer, CHANNELS};
use crate::seamfinder::{minimal_seam, SeamPath};
use crate::seamgraph::SeamGraph;
use log::{debug, info, warn};

/// Cut a vertical seam out of an image.  Every row loses exactly the
/// one pixel the seam passes through; everything to its right moves
/// one column left.
pub fn remove_vertical_seam(image: &PixelBuffer, seam: &SeamPath) -> Result<PixelBuffer, SeamError> {
    image.check_carvable()?;
    let (width, height) = image.dimensions();
    if !seam.fits(width, height) {
        return Err(SeamError::InvalidSeam { width, height });
    }

    let newwidth = width - 1;
    let len = newwidth as usize * height as usize * CHANNELS;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| SeamError::no_room("carved image", newwidth, height))?;

    for y in 0..height {
        let row = image.row(y);
        let cut = seam.column_for_row(y, height) as usize * CHANNELS;
        data.extend_from_slice(&row[..cut]);
        data.extend_from_slice(&row[cut + CHANNELS..]);
    }

    PixelBuffer::new(newwidth, height, data)
}

/// Where a carver is in its run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CarveState {
    Ready,
    Iterating { iteration: u32 },
    Done,
    Failed { iteration: u32 },
}

/// Repeatedly removes the cheapest vertical seam, as priced by `M`.
///
/// A carver runs once.  Each iteration starts from nothing but the
/// previous iteration's image: the cost field and seam graph are built
/// fresh every time.
pub struct SeamCarver<M: CostModel> {
    model: M,
    state: CarveState,
}

impl<M: CostModel> SeamCarver<M> {
    pub fn new(model: M) -> Self {
        SeamCarver {
            model,
            state: CarveState::Ready,
        }
    }

    pub fn state(&self) -> CarveState {
        self.state
    }

    /// Remove `iterations` seams from `image`, one at a time.
    pub fn carve(&mut self, image: PixelBuffer, iterations: u32) -> Result<PixelBuffer, RetargetFailure> {
        self.carve_with(image, iterations, &mut NoDiagnostics)
    }

    /// As `carve`, reporting the initial cost field and every seam to
    /// `observer` along the way.
    ///
    /// On failure the run stops immediately.  The failure carries the
    /// iteration it happened on and the last image successfully
    /// produced, which is the input itself if the first iteration
    /// failed.
    pub fn carve_with(
        &mut self,
        image: PixelBuffer,
        iterations: u32,
        observer: &mut dyn CarveObserver,
    ) -> Result<PixelBuffer, RetargetFailure> {
        if self.state != CarveState::Ready {
            return Err(RetargetFailure {
                iteration: 0,
                error: SeamError::Spent,
                last_image: image,
            });
        }

        info!(
            "Carving {} seams from a {}x{} image using {} energy",
            iterations,
            image.width(),
            image.height(),
            self.model.name()
        );

        let mut scratch = image;
        for iteration in 0..iterations {
            self.state = CarveState::Iterating { iteration };
            match self.carve_once(&scratch, iteration, observer) {
                Ok(carved) => {
                    scratch = carved;
                    debug!("{}: {}x{}", iteration, scratch.width(), scratch.height());
                }
                Err(error) => {
                    warn!("Carving stopped at iteration {}: {}", iteration, error);
                    self.state = CarveState::Failed { iteration };
                    return Err(RetargetFailure {
                        iteration,
                        error,
                        last_image: scratch,
                    });
                }
            }
        }

        self.state = CarveState::Done;
        info!("Carved down to {}x{}", scratch.width(), scratch.height());
        Ok(scratch)
    }

    fn carve_once(
        &self,
        image: &PixelBuffer,
        iteration: u32,
        observer: &mut dyn CarveObserver,
    ) -> Result<PixelBuffer, SeamError> {
        image.check_carvable()?;
        let seam = {
            let field = self.model.cost_field(image)?;
            if iteration == 0 {
                observer.cost_field(&field);
            }
            minimal_seam(&SeamGraph::build(&field)?)?
        };
        observer.seam(iteration, image, &seam);
        remove_vertical_seam(image, &seam)
    }
}
