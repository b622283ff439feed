// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam digraph
//!
//! Every pixel below the top row can be reached from (at most) three
//! pixels in the row above.  Walking down the image a row at a time,
//! each cell records the cheapest way any seam can arrive there and
//! which column it arrived from.  Once the bottom row is filled in,
//! the cheapest seam in the whole image ends at the cheapest cell of
//! the bottom row and can be traced back up through the parents.

use crate::costmodel::CostField;
use crate::error::SeamError;
use seam_lattice::Lattice;

/// The cheapest seam ending at a pixel: what it cost to get here, and
/// the column in the row above it came from.  The top row has no
/// parent.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SeamLink {
    pub cumulative: u64,
    pub parent: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeamGraph {
    links: Lattice<SeamLink>,
}

impl SeamGraph {
    /// Run the dynamic program over a cost field.
    pub fn build(field: &CostField) -> Result<Self, SeamError> {
        let (width, height) = (field.width(), field.height());
        if width < 2 || height < 1 {
            return Err(SeamError::InvalidDimensions { width, height });
        }
        let mut links: Lattice<SeamLink> = Lattice::try_new(width, height)
            .ok_or_else(|| SeamError::no_room("seam graph", width, height))?;

        // Populate the first row with the native cost of going straight
        // through each pixel.
        for x in 0..width {
            links[(x, 0)] = SeamLink {
                cumulative: u64::from(field.straight(x, 0)),
                parent: None,
            };
        }

        let maxwidth = width - 1;
        // Every later row depends only on the row above it.  Candidates
        // are examined left to right and only a strictly cheaper one
        // displaces the current best, so ties go to the leftmost.
        for y in 1..height {
            for x in 0..width {
                let first = cq!(x == 0, 0, x - 1);
                let last = cq!(x == maxwidth, maxwidth, x + 1);
                let arrive = |parent_x: u32| {
                    links[(parent_x, y - 1)].cumulative
                        + u64::from(field.step_cost(x, y, parent_x))
                };

                let best = ((first + 1)..=last).fold(
                    (first, arrive(first)),
                    |(best_x, best_cost), parent_x| {
                        let cost = arrive(parent_x);
                        cq!(cost < best_cost, (parent_x, cost), (best_x, best_cost))
                    },
                );

                links[(x, y)] = SeamLink {
                    cumulative: best.1,
                    parent: Some(best.0),
                };
            }
        }

        Ok(SeamGraph { links })
    }

    pub fn width(&self) -> u32 {
        self.links.width
    }

    pub fn height(&self) -> u32 {
        self.links.height
    }

    pub fn link(&self, x: u32, y: u32) -> SeamLink {
        self.links[(x, y)]
    }

    /// The cumulative costs along the bottom row, left to right.
    pub fn bottom_row(&self) -> &[SeamLink] {
        self.links.row(self.height() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costmodel::{CostModel, StepCosts};
    use crate::energy::GradientEnergy;
    use crate::forward::ForwardEnergy;
    use crate::pixelbuffer::PixelBuffer;

    fn uniform_field(width: u32, height: u32, costs: &[u32]) -> CostField {
        let cells = costs.iter().map(|c| StepCosts::uniform(*c)).collect();
        CostField::from_lattice(Lattice::from_cells(width, height, cells).unwrap())
    }

    fn cumulative_row(graph: &SeamGraph, y: u32) -> Vec<u64> {
        (0..graph.width()).map(|x| graph.link(x, y).cumulative).collect()
    }

    fn parent_row(graph: &SeamGraph, y: u32) -> Vec<Option<u32>> {
        (0..graph.width()).map(|x| graph.link(x, y).parent).collect()
    }

    // The 5x4 grid the carver has always been checked against.
    const ENERGY_DATA: [u32; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    #[test]
    fn top_row_is_the_native_cost() {
        let graph = SeamGraph::build(&uniform_field(5, 4, &ENERGY_DATA)).unwrap();
        assert_eq!(cumulative_row(&graph, 0), vec![9, 9, 0, 9, 9]);
        assert_eq!(parent_row(&graph, 0), vec![None; 5]);
    }

    #[test]
    fn each_cell_takes_the_cheapest_reachable_parent() {
        let graph = SeamGraph::build(&uniform_field(5, 4, &ENERGY_DATA)).unwrap();
        assert_eq!(cumulative_row(&graph, 1), vec![18, 1, 9, 8, 18]);
        assert_eq!(
            parent_row(&graph, 1),
            vec![Some(0), Some(2), Some(2), Some(2), Some(3)]
        );
        assert_eq!(cumulative_row(&graph, 2), vec![10, 10, 10, 17, 8]);
        assert_eq!(cumulative_row(&graph, 3), vec![19, 19, 19, 8, 17]);
    }

    #[test]
    fn ties_go_to_the_leftmost_parent() {
        // Every parent costs the same, so every cell must point up-left
        // where it can, and straight up on the left edge.
        let graph = SeamGraph::build(&uniform_field(4, 2, &[5; 8])).unwrap();
        assert_eq!(
            parent_row(&graph, 1),
            vec![Some(0), Some(0), Some(1), Some(2)]
        );
    }

    #[test]
    fn forward_costs_depend_on_the_direction_of_arrival() {
        //   10  20  40
        //    5   0  15
        //   30  60  90
        const RED: [u8; 9] = [10, 20, 40, 5, 0, 15, 30, 60, 90];
        let image = PixelBuffer::from_fn(3, 3, |x, y| [RED[(y * 3 + x) as usize], 0, 0]);
        let graph = SeamGraph::build(&ForwardEnergy.cost_field(&image).unwrap()).unwrap();
        assert_eq!(cumulative_row(&graph, 1), vec![125, 425, 625]);
        assert_eq!(parent_row(&graph, 1), vec![Some(0), Some(0), Some(2)]);
        assert_eq!(cumulative_row(&graph, 2), vec![1025, 4025, 1525]);
        assert_eq!(parent_row(&graph, 2), vec![Some(0), Some(1), Some(2)]);

        let graph = SeamGraph::build(&GradientEnergy.cost_field(&image).unwrap()).unwrap();
        assert_eq!(cumulative_row(&graph, 2), vec![2075, 7750, 8350]);
    }

    #[test]
    fn single_column_fields_are_refused() {
        match SeamGraph::build(&uniform_field(1, 3, &[4, 5, 6])) {
            Err(SeamError::InvalidDimensions { width: 1, height: 3 }) => (),
            other => panic!("expected InvalidDimensions, got {:?}", other),
        }
    }

    #[test]
    fn two_column_graphs_keep_to_the_cheaper_side() {
        let graph = SeamGraph::build(&uniform_field(2, 3, &[4, 1, 5, 1, 6, 1])).unwrap();
        assert_eq!(cumulative_row(&graph, 2), vec![8, 3]);
        assert_eq!(parent_row(&graph, 2), vec![Some(1), Some(1)]);
    }

    #[test]
    fn tall_bright_images_do_not_overflow() {
        let height = 20_000;
        let costs = vec![u32::max_value(); 2 * height as usize];
        let graph = SeamGraph::build(&uniform_field(2, height, &costs)).unwrap();
        assert_eq!(
            graph.bottom_row()[0].cumulative,
            u64::from(u32::max_value()) * u64::from(height)
        );
    }
}
