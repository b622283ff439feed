// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Finding the seam
//!
//! Given a finished seam graph, the cheapest seam ends at the cheapest
//! cell of the bottom row.  Following the parent links from there back
//! to the top row produces the seam, bottom row first.

use crate::costmodel::CostModel;
use crate::error::SeamError;
use crate::pixelbuffer::PixelBuffer;
use crate::seamgraph::SeamGraph;

/// One column per row of the image, listed from the bottom row up to
/// the top row.  Consecutive entries never differ by more than one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeamPath(Vec<u32>);

impl SeamPath {
    /// Wrap columns already listed bottom row first.
    pub fn from_bottom_up(columns: Vec<u32>) -> Self {
        SeamPath(columns)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The columns in the order they were traced: bottom row first.
    pub fn columns(&self) -> &[u32] {
        &self.0
    }

    /// The columns from the top row down.
    pub fn top_down(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().rev().cloned()
    }

    /// The seam's column in row `y` of an image `height` rows tall.
    /// Only meaningful once the seam is known to fit.
    #[inline]
    pub(crate) fn column_for_row(&self, y: u32, height: u32) -> u32 {
        self.0[(height - 1 - y) as usize]
    }

    /// Whether this is a seam of an image `width` x `height`: one
    /// in-bounds column per row, each within one of the next.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.0.len() == height as usize
            && self.0.iter().all(|x| *x < width)
            && self
                .0
                .windows(2)
                .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1)
    }
}

/// Trace the cheapest seam out of a finished graph.  Ties along the
/// bottom row go to the leftmost column.
pub fn minimal_seam(graph: &SeamGraph) -> Result<SeamPath, SeamError> {
    let (width, height) = (graph.width(), graph.height());

    let mut seam_col = graph
        .bottom_row()
        .iter()
        .enumerate()
        .fold((0, u64::max_value()), |(best_x, best), (x, link)| {
            cq!(link.cumulative < best, (x as u32, link.cumulative), (best_x, best))
        })
        .0;

    let mut columns = Vec::new();
    columns
        .try_reserve_exact(height as usize)
        .map_err(|_| SeamError::no_room("seam", 1, height))?;

    // Working backwards, collect the x coordinates from the bottom up.
    for y in (0..height).rev() {
        columns.push(seam_col);
        if let Some(parent) = graph.link(seam_col, y).parent {
            seam_col = parent;
        }
    }

    let seam = SeamPath(columns);
    debug_assert!(seam.fits(width, height));
    Ok(seam)
}

/// Anything that can price an image can find its cheapest vertical
/// seam.
pub trait SeamFinder {
    fn find_vertical_seam(&self, image: &PixelBuffer) -> Result<SeamPath, SeamError>;
}

impl<M: CostModel + ?Sized> SeamFinder for M {
    fn find_vertical_seam(&self, image: &PixelBuffer) -> Result<SeamPath, SeamError> {
        let field = self.cost_field(image)?;
        minimal_seam(&SeamGraph::build(&field)?)
    }
}
