//! Board module - the persisted grid of locked cells
//!
//! The board only stores what survives between calls: empty cells and cells
//! locked with a piece kind. The falling piece is never written here; it is
//! overlaid by the projector (see [`crate::grid`]).
//!
//! Coordinates: `(x, y)` with `x` in `0..width` (left to right) and `y` in
//! `0..height` (top to bottom). Storage is a flat row-major vector sized
//! once at construction.

use crate::shapes::ShapeMatrix;
use crate::types::PieceKind;

/// Persisted cell: `None` = empty, `Some(kind)` = locked
pub type LockedCell = Option<PieceKind>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cells (y * width + x)
    cells: Vec<LockedCell>,
}

impl Board {
    /// Create an empty board; dimensions are fixed for its lifetime
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<LockedCell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: LockedCell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and locked
    pub fn is_locked(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Lock every cell of row `y`; returns false if out of bounds
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width].fill(Some(kind));
        true
    }

    /// Cells of row `y`
    pub fn row(&self, y: usize) -> Option<&[LockedCell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// A row is full iff every cell is locked
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Validity test for a shape placed with its top-left corner at `(x, y)`
    ///
    /// Fails when an occupied cell falls outside `0..width`, at or below
    /// `height`, or onto a locked cell. Cells above the grid (`y < 0`) are
    /// only checked horizontally so pieces can move and rotate while entering.
    pub fn fits(&self, shape: &ShapeMatrix, x: i32, y: i32) -> bool {
        shape.cells().iter().all(|&(col, row)| {
            let nx = x + col;
            let ny = y + row;
            if nx < 0 || nx as usize >= self.width || ny >= self.height as i32 {
                return false;
            }
            ny < 0 || !self.is_locked(nx, ny)
        })
    }

    /// Commit a shape at `(x, y)` as locked cells of `kind`
    ///
    /// Overwrites unconditionally; cells above the grid are dropped.
    pub fn lock_shape(&mut self, shape: &ShapeMatrix, x: i32, y: i32, kind: PieceKind) {
        for &(col, row) in shape.cells().iter() {
            let py = y + row;
            if py >= 0 {
                self.set(x + col, py, Some(kind));
            }
        }
    }

    /// Remove every full row and shift the rows above down
    ///
    /// Uses a two-pointer compaction from the bottom: surviving rows move
    /// down by the number of full rows below them and the vacated rows at
    /// the top become empty. Returns the cleared row indices, bottom first.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let mut cleared_rows = Vec::new();
        let width = self.width;
        let mut write_y = self.height;

        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[LockedCell] {
        &self.cells
    }
}
