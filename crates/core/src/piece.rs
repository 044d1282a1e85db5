//! Active piece and spawn placement

use crate::board::Board;
use crate::shapes::{shape_at, ShapeMatrix};
use crate::types::{PieceKind, Rotation};

/// The falling piece: `(x, y)` is the top-left of its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Place a freshly drawn piece at rotation 0
    ///
    /// Horizontally the middle of its occupied columns goes to the middle
    /// of the grid: `x = width / 2 - (leftmost + rightmost) / 2`.
    /// Vertically its first occupied row starts at row 0, so `y` is
    /// negative when the matrix has empty rows on top.
    pub fn spawn(kind: PieceKind, width: usize) -> Self {
        let shape = shape_at(kind, Rotation::North);
        let top_row_offset = shape.top_row_offset().unwrap_or(0) as i32;
        let center_col = shape
            .column_extent()
            .map_or(0, |(left, right)| ((left + right) / 2) as i32);

        Self {
            kind,
            rotation: Rotation::North,
            x: (width / 2) as i32 - center_col,
            y: -top_row_offset,
        }
    }

    /// Shape for the current rotation
    pub fn shape(&self) -> ShapeMatrix {
        shape_at(self.kind, self.rotation)
    }

    /// Copy shifted by `(dx, dy)`
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Absolute `(x, y)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x, y) = (self.x, self.y);
        self.shape()
            .cells()
            .into_iter()
            .map(move |(col, row)| (x + col, y + row))
    }

    /// Check the piece against bounds and locked cells
    pub fn is_valid(&self, board: &Board) -> bool {
        board.fits(&self.shape(), self.x, self.y)
    }
}
