// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cost models
//!
//! A cost model turns an image into a `CostField`: for every pixel, what
//! it costs a seam to pass through it.  Because the forward energy
//! model charges differently depending on which pixel above the seam
//! came from, every cell carries three costs, one per direction of
//! arrival.  The plain gradient model simply charges the same for all
//! three.
//!
//! The seam graph only ever sees the `CostField`, so it is the same
//! dynamic program whichever model produced the field.

use crate::energy::GradientEnergy;
use crate::error::SeamError;
use crate::forward::ForwardEnergy;
use crate::pixelbuffer::PixelBuffer;
use crate::seamfinder::SeamPath;
use seam_lattice::Lattice;
use std::fmt;
use std::str::FromStr;

/// What it costs to reach a pixel from each of its three possible
/// parents in the row above.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct StepCosts {
    /// From the parent up and to the left, `(x - 1, y - 1)`.
    pub left: u32,
    /// From the parent straight above, `(x, y - 1)`.
    pub up: u32,
    /// From the parent up and to the right, `(x + 1, y - 1)`.
    pub right: u32,
}

impl StepCosts {
    pub fn uniform(cost: u32) -> Self {
        StepCosts {
            left: cost,
            up: cost,
            right: cost,
        }
    }
}

/// Per-pixel costs for one image, laid out like the image.
#[derive(Debug, Clone, PartialEq)]
pub struct CostField {
    costs: Lattice<StepCosts>,
}

impl CostField {
    pub fn from_lattice(costs: Lattice<StepCosts>) -> Self {
        CostField { costs }
    }

    pub fn width(&self) -> u32 {
        self.costs.width
    }

    pub fn height(&self) -> u32 {
        self.costs.height
    }

    pub fn costs(&self, x: u32, y: u32) -> StepCosts {
        self.costs[(x, y)]
    }

    /// The cost of a seam passing straight through `(x, y)`.  This is
    /// the scalar used for the top row and for visualization.
    pub fn straight(&self, x: u32, y: u32) -> u32 {
        self.costs[(x, y)].up
    }

    /// The cost of stepping into `(x, y)` from `(parent_x, y - 1)`.
    #[inline]
    pub fn step_cost(&self, x: u32, y: u32, parent_x: u32) -> u32 {
        let costs = self.costs[(x, y)];
        if parent_x < x {
            costs.left
        } else if parent_x > x {
            costs.right
        } else {
            costs.up
        }
    }

    /// The total a seam pays on its way from the top row to the bottom.
    /// This is what the seam graph minimizes.  `None` if the seam does
    /// not fit this field.
    pub fn path_cost(&self, seam: &SeamPath) -> Option<u64> {
        if !seam.fits(self.width(), self.height()) {
            return None;
        }
        let mut columns = seam.top_down();
        let mut parent = columns.next()?;
        let mut total = u64::from(self.straight(parent, 0));
        for (y, x) in (1..).zip(columns) {
            total += u64::from(self.step_cost(x, y, parent));
            parent = x;
        }
        Some(total)
    }
}

/// A strategy for pricing pixels.  Implementations must be pure: the
/// same image always yields the same field.
pub trait CostModel {
    fn name(&self) -> &'static str;

    fn cost_field(&self, image: &PixelBuffer) -> Result<CostField, SeamError>;
}

impl<'a, M: CostModel + ?Sized> CostModel for &'a M {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn cost_field(&self, image: &PixelBuffer) -> Result<CostField, SeamError> {
        (**self).cost_field(image)
    }
}

/// Runtime choice between the two models, for when the caller only
/// knows which one it wants after reading its arguments.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CostModelKind {
    Gradient,
    Forward,
}

impl CostModel for CostModelKind {
    fn name(&self) -> &'static str {
        match self {
            CostModelKind::Gradient => GradientEnergy.name(),
            CostModelKind::Forward => ForwardEnergy.name(),
        }
    }

    fn cost_field(&self, image: &PixelBuffer) -> Result<CostField, SeamError> {
        match self {
            CostModelKind::Gradient => GradientEnergy.cost_field(image),
            CostModelKind::Forward => ForwardEnergy.cost_field(image),
        }
    }
}

impl FromStr for CostModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gradient" => Ok(CostModelKind::Gradient),
            "forward" => Ok(CostModelKind::Forward),
            other => Err(format!(
                "unknown cost model '{}': expected 'gradient' or 'forward'",
                other
            )),
        }
    }
}

impl fmt::Display for CostModelKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Every pixel's cost depends only on the image, never on any other
// cost, so the field can be filled a row at a time in any order.  The
// models hand over a function that fills one row and this decides how
// the rows get filled.
pub(crate) fn fill_cost_field<F>(image: &PixelBuffer, fill_row: F) -> Result<CostField, SeamError>
where
    F: Fn(u32, &mut [StepCosts]) + Sync,
{
    let (width, height) = image.dimensions();
    let mut costs = Lattice::try_new(width, height)
        .ok_or_else(|| SeamError::no_room("cost field", width, height))?;
    fill_rows(&mut costs, &fill_row)?;
    Ok(CostField::from_lattice(costs))
}

#[cfg(not(feature = "threaded"))]
fn fill_rows<F>(costs: &mut Lattice<StepCosts>, fill_row: &F) -> Result<(), SeamError>
where
    F: Fn(u32, &mut [StepCosts]) + Sync,
{
    costs
        .rows_mut()
        .enumerate()
        .for_each(|(y, row)| fill_row(y as u32, row));
    Ok(())
}

// Break the field into one horizontal band per CPU and give each band
// its own scoped thread.  The bands are disjoint `chunks_mut`, so
// nothing here needs to be unsafe or locked.
#[cfg(feature = "threaded")]
fn fill_rows<F>(costs: &mut Lattice<StepCosts>, fill_row: &F) -> Result<(), SeamError>
where
    F: Fn(u32, &mut [StepCosts]) + Sync,
{
    let (width, height) = (costs.width as usize, costs.height as usize);
    if width == 0 || height == 0 {
        return Ok(());
    }
    let threads = num_cpus::get().max(1).min(height);
    let band_rows = (height + threads - 1) / threads;

    crossbeam::scope(|scope| {
        for (band, cells) in costs.cells_mut().chunks_mut(band_rows * width).enumerate() {
            scope.spawn(move |_| {
                for (offset, row) in cells.chunks_mut(width).enumerate() {
                    fill_row((band * band_rows + offset) as u32, row);
                }
            });
        }
    })
    .map_err(|_| SeamError::WorkerPanic)
}
