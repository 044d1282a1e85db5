//! Shape catalog - occupancy matrices for every piece kind
//!
//! Each kind has exactly four matrices, one per rotation state
//! (`0`, `R`, `2`, `L`). Rotation-symmetric kinds still report four
//! (identical) matrices. Matrices are square with a per-kind side of at
//! most [`MAX_SHAPE_SIZE`]; the rest of the engine reads the side from the
//! matrix rather than assuming one.
//! Reference: https://tetris.wiki/SRS

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation};

/// Largest bounding box side in the catalog
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupied cells of a single matrix, as `(col, row)` offsets
pub type ShapeCells = ArrayVec<(i32, i32), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Immutable occupancy matrix (row-major, 1 = occupied)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    rows: &'static [&'static [u8]],
}

impl ShapeMatrix {
    /// Catalog-only: `cells()` holds at most `MAX_SHAPE_SIZE^2` cells
    pub(crate) const fn new(rows: &'static [&'static [u8]]) -> Self {
        Self { rows }
    }

    /// Side length of the bounding box
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &'static [&'static [u8]] {
        self.rows
    }

    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&v| v != 0)
    }

    /// Occupied cells as `(col, row)` offsets from the top-left corner
    pub fn cells(&self) -> ShapeCells {
        let mut cells = ShapeCells::new();
        for (row, line) in self.rows.iter().enumerate() {
            for (col, &v) in line.iter().enumerate() {
                if v != 0 {
                    cells.push((col as i32, row as i32));
                }
            }
        }
        cells
    }

    /// Index of the first row containing an occupied cell
    pub fn top_row_offset(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.iter().any(|&v| v != 0))
    }

    /// Occupied row span `[top, bottom]`
    pub fn row_extent(&self) -> Option<(usize, usize)> {
        let top = self.top_row_offset()?;
        let bottom = self.rows.iter().rposition(|r| r.iter().any(|&v| v != 0))?;
        Some((top, bottom))
    }

    /// Occupied column span `[leftmost, rightmost]`
    pub fn column_extent(&self) -> Option<(usize, usize)> {
        self.cells().iter().fold(None, |acc, &(col, _)| {
            let col = col as usize;
            Some(match acc {
                None => (col, col),
                Some((l, r)) => (l.min(col), r.max(col)),
            })
        })
    }

    /// Number of rows spanned by occupied cells
    pub fn vertical_extent(&self) -> usize {
        self.row_extent().map_or(0, |(top, bottom)| bottom - top + 1)
    }
}

/// The four rotation matrices of one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub kind: PieceKind,
    pub rotations: [ShapeMatrix; 4],
}

impl ShapeDefinition {
    pub fn at(&self, rotation: Rotation) -> ShapeMatrix {
        self.rotations[rotation.index()]
    }

    /// True when every rotation state has the same occupancy
    pub fn is_rotation_symmetric(&self) -> bool {
        self.rotations.iter().all(|m| *m == self.rotations[0])
    }

    /// Tallest occupied span over all rotations
    pub fn max_vertical_extent(&self) -> usize {
        self.rotations
            .iter()
            .map(ShapeMatrix::vertical_extent)
            .max()
            .unwrap_or(0)
    }
}

/// Look up the shape for a piece kind and rotation
pub fn shape_at(kind: PieceKind, rotation: Rotation) -> ShapeMatrix {
    definition(kind).at(rotation)
}

/// Full definition of a piece kind
pub fn definition(kind: PieceKind) -> &'static ShapeDefinition {
    &CATALOG[kind.index()]
}

/// The whole catalog, in [`PieceKind::ALL`] order
pub fn catalog() -> &'static [ShapeDefinition] {
    &CATALOG
}

/// Most rows a single lock can complete (tallest shape in any rotation)
pub fn max_clear_count() -> usize {
    CATALOG
        .iter()
        .map(ShapeDefinition::max_vertical_extent)
        .max()
        .unwrap_or(0)
}

const O_MATRIX: ShapeMatrix = ShapeMatrix::new(&[
    &[0, 0, 0, 0],
    &[0, 1, 1, 0],
    &[0, 1, 1, 0],
    &[0, 0, 0, 0],
]);

static CATALOG: [ShapeDefinition; PieceKind::COUNT] = [
    ShapeDefinition {
        kind: PieceKind::I,
        rotations: [
            ShapeMatrix::new(&[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
            ShapeMatrix::new(&[&[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0]]),
            ShapeMatrix::new(&[&[0, 0, 0, 0], &[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0]]),
            ShapeMatrix::new(&[&[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0]]),
        ],
    },
    ShapeDefinition {
        kind: PieceKind::J,
        rotations: [
            ShapeMatrix::new(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
            ShapeMatrix::new(&[&[0, 1, 1], &[0, 1, 0], &[0, 1, 0]]),
            ShapeMatrix::new(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]]),
            ShapeMatrix::new(&[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]]),
        ],
    },
    ShapeDefinition {
        kind: PieceKind::L,
        rotations: [
            ShapeMatrix::new(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
            ShapeMatrix::new(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]]),
            ShapeMatrix::new(&[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]]),
            ShapeMatrix::new(&[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]]),
        ],
    },
    ShapeDefinition {
        kind: PieceKind::O,
        rotations: [O_MATRIX, O_MATRIX, O_MATRIX, O_MATRIX],
    },
    ShapeDefinition {
        kind: PieceKind::S,
        rotations: [
            ShapeMatrix::new(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
            ShapeMatrix::new(&[&[0, 1, 0], &[0, 1, 1], &[0, 0, 1]]),
            ShapeMatrix::new(&[&[0, 0, 0], &[0, 1, 1], &[1, 1, 0]]),
            ShapeMatrix::new(&[&[1, 0, 0], &[1, 1, 0], &[0, 1, 0]]),
        ],
    },
    ShapeDefinition {
        kind: PieceKind::T,
        rotations: [
            ShapeMatrix::new(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
            ShapeMatrix::new(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]]),
            ShapeMatrix::new(&[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]]),
            ShapeMatrix::new(&[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]]),
        ],
    },
    ShapeDefinition {
        kind: PieceKind::Z,
        rotations: [
            ShapeMatrix::new(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
            ShapeMatrix::new(&[&[0, 0, 1], &[0, 1, 1], &[0, 1, 0]]),
            ShapeMatrix::new(&[&[0, 0, 0], &[1, 1, 0], &[0, 1, 1]]),
            ShapeMatrix::new(&[&[0, 1, 0], &[1, 1, 0], &[1, 0, 0]]),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_piece_index() {
        for kind in PieceKind::ALL {
            assert_eq!(definition(kind).kind, kind);
        }
    }

    #[test]
    fn test_every_rotation_has_cells_and_family_size() {
        for def in catalog() {
            let size = def.rotations[0].size();
            for rotation in Rotation::ALL {
                let m = def.at(rotation);
                assert_eq!(m.size(), size, "{:?} {:?}", def.kind, rotation);
                assert!(m.size() <= MAX_SHAPE_SIZE);
                assert!(m.rows().iter().all(|r| r.len() == size));
                assert_eq!(m.cells().len(), 4, "{:?} {:?}", def.kind, rotation);
            }
        }
    }

    #[test]
    fn test_only_o_is_rotation_symmetric() {
        for def in catalog() {
            assert_eq!(def.is_rotation_symmetric(), def.kind == PieceKind::O);
        }
    }

    #[test]
    fn test_extents() {
        let i = shape_at(PieceKind::I, Rotation::North);
        assert_eq!(i.top_row_offset(), Some(1));
        assert_eq!(i.column_extent(), Some((0, 3)));
        assert_eq!(i.vertical_extent(), 1);

        let i_east = shape_at(PieceKind::I, Rotation::East);
        assert_eq!(i_east.vertical_extent(), 4);
        assert_eq!(i_east.column_extent(), Some((2, 2)));

        let o = shape_at(PieceKind::O, Rotation::North);
        assert_eq!(o.row_extent(), Some((1, 2)));
        assert_eq!(o.column_extent(), Some((1, 2)));
    }

    #[test]
    fn test_max_clear_count_is_four() {
        assert_eq!(max_clear_count(), 4);
    }

    #[test]
    fn test_is_filled_out_of_range() {
        let t = shape_at(PieceKind::T, Rotation::North);
        assert!(t.is_filled(1, 0));
        assert!(!t.is_filled(0, 0));
        assert!(!t.is_filled(5, 5));
    }
}
