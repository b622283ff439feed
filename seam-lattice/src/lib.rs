// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam Lattice
//!
//! An addressable two-dimensional field shared by every intermediate
//! product of the seam carver: the per-pixel cost field, and the
//! cumulative-cost-plus-parent grid that the seam is traced through.
//! Cells are stored row-major, exactly like the pixels of the image
//! they were derived from, so the same `(x, y)` addresses both.

use std::ops::{Index, IndexMut};
use std::slice::ChunksMut;

/// A `width` x `height` grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

fn cell_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

impl<P: Default + Copy> Lattice<P> {
    /// A lattice with every cell set to the content type's default.
    /// Aborts like any other `Vec` if the allocation cannot be made; use
    /// `try_new` where that has to be reported instead.
    pub fn new(width: u32, height: u32) -> Self {
        Lattice {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// As `new`, but returns `None` when `width * height` overflows or
    /// the memory for it cannot be reserved.
    pub fn try_new(width: u32, height: u32) -> Option<Self> {
        let count = cell_count(width, height)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(count).ok()?;
        cells.resize(count, P::default());
        Some(Lattice {
            width,
            height,
            cells,
        })
    }

    /// Wrap cells that are already laid out row-major.  `None` if there
    /// are not exactly `width * height` of them.
    pub fn from_cells(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cell_count(width, height)? != cells.len() {
            return None;
        }
        Some(Lattice {
            width,
            height,
            cells,
        })
    }

    // Keep the index math in exactly one place.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// One row of cells, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// Mutable rows, top to bottom.  Each chunk is exactly one row.
    pub fn rows_mut(&mut self) -> ChunksMut<'_, P> {
        let width = (self.width as usize).max(1);
        self.cells.chunks_mut(width)
    }

    pub fn cells(&self) -> &[P] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [P] {
        &mut self.cells
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Lattice<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Lattice<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_are_row_major() {
        let mut lattice: Lattice<u32> = Lattice::new(3, 2);
        lattice[(2, 0)] = 7;
        lattice[(0, 1)] = 9;
        assert_eq!(lattice.cells(), &[0, 0, 7, 9, 0, 0]);
        assert_eq!(lattice.row(1), &[9, 0, 0]);
    }

    #[test]
    fn rows_mut_yields_one_chunk_per_row() {
        let mut lattice: Lattice<u8> = Lattice::new(4, 3);
        for (y, row) in lattice.rows_mut().enumerate() {
            assert_eq!(row.len(), 4);
            row.iter_mut().for_each(|c| *c = y as u8);
        }
        assert_eq!(lattice[(3, 2)], 2);
        assert_eq!(lattice.rows_mut().count(), 3);
    }

    #[test]
    fn from_cells_checks_the_length() {
        assert!(Lattice::from_cells(2, 2, vec![1u32, 2, 3]).is_none());
        let lattice = Lattice::from_cells(2, 2, vec![1u32, 2, 3, 4]).unwrap();
        assert_eq!(lattice[(1, 1)], 4);
    }

    #[test]
    fn try_new_matches_new() {
        let lattice: Lattice<u64> = Lattice::try_new(5, 4).unwrap();
        assert_eq!(lattice, Lattice::new(5, 4));
        assert_eq!(lattice.dimensions(), (5, 4));
    }

    #[test]
    fn try_new_refuses_impossible_sizes() {
        let lattice: Option<Lattice<u64>> = Lattice::try_new(u32::MAX, u32::MAX);
        assert!(lattice.is_none());
    }
}
