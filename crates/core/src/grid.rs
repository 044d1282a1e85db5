//! Grid projector - render-ready view of the board plus the falling piece
//!
//! The projection is rebuilt from scratch after every mutation: copy the
//! locked cells, then overlay the active piece clipped to the grid. Nothing
//! is patched incrementally, so no stale overlay can survive a move.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::types::Cell;

/// Read-only `height x width` matrix of cell tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Project `board` with `active` overlaid
    pub fn project(board: &Board, active: Option<&ActivePiece>) -> Self {
        let mut grid = Self {
            width: board.width(),
            height: board.height(),
            cells: Vec::with_capacity(board.cells().len()),
        };
        grid.reproject(board, active);
        grid
    }

    /// Full recomputation into the existing buffer
    pub(crate) fn reproject(&mut self, board: &Board, active: Option<&ActivePiece>) {
        self.width = board.width();
        self.height = board.height();
        self.cells.clear();
        self.cells
            .extend(board.cells().iter().map(|&cell| Cell::from(cell)));

        if let Some(piece) = active {
            for (x, y) in piece.cells() {
                if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                    self.cells[y as usize * self.width + x as usize] = Cell::Active;
                }
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(x, y)`; `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Flat row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows as `u8` codes (see [`Cell::code`])
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(Cell::code).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, Rotation};

    #[test]
    fn test_projection_overlays_active_piece() {
        let mut board = Board::new(10, 20);
        board.set(0, 19, Some(PieceKind::Z));
        let piece = ActivePiece::spawn(PieceKind::O, 10);

        let grid = Grid::project(&board, Some(&piece));

        assert_eq!(grid.get(0, 19), Some(Cell::Locked(PieceKind::Z)));
        assert_eq!(grid.get(5, 0), Some(Cell::Active));
        assert_eq!(grid.get(6, 1), Some(Cell::Active));
        assert_eq!(grid.cells().iter().filter(|c| **c == Cell::Active).count(), 4);
    }

    #[test]
    fn test_projection_clips_cells_above_grid() {
        let board = Board::new(10, 20);
        let piece = ActivePiece {
            kind: PieceKind::I,
            rotation: Rotation::East,
            x: 0,
            y: -2,
        };

        let grid = Grid::project(&board, Some(&piece));
        assert_eq!(grid.cells().iter().filter(|c| **c == Cell::Active).count(), 2);
    }

    #[test]
    fn test_reprojection_leaves_no_stale_overlay() {
        let board = Board::new(10, 20);
        let piece = ActivePiece::spawn(PieceKind::T, 10);
        let mut grid = Grid::project(&board, Some(&piece));

        grid.reproject(&board, Some(&piece.moved(0, 5)));
        assert!(grid.row(0).unwrap().iter().all(Cell::is_empty));
        assert_eq!(grid.cells().iter().filter(|c| **c == Cell::Active).count(), 4);

        grid.reproject(&board, None);
        assert!(grid.cells().iter().all(Cell::is_empty));
    }

    #[test]
    fn test_codes_shape() {
        let grid = Grid::project(&Board::new(4, 6), None);
        let codes = grid.to_codes();
        assert_eq!(codes.len(), 6);
        assert!(codes.iter().all(|r| r.len() == 4 && r.iter().all(|&c| c == 0)));
    }
}
