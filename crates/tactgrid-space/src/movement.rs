//! Movement models and structural neighbor tables.

use smallvec::SmallVec;
use tactgrid_core::CellIndex;

/// Hex offsets `(dcolumn, drow)` for cells on even rows, in
/// E, W, NE, NW, SE, SW order.
pub const HEX_EVEN_ROW_OFFSETS: [(i32, i32); 6] = [
    (1, 0),   // E
    (-1, 0),  // W
    (0, -1),  // NE
    (-1, -1), // NW
    (0, 1),   // SE
    (-1, 1),  // SW
];

/// Hex offsets `(dcolumn, drow)` for cells on odd rows, in
/// E, W, NE, NW, SE, SW order.
pub const HEX_ODD_ROW_OFFSETS: [(i32, i32); 6] = [
    (1, 0),  // E
    (-1, 0), // W
    (1, -1), // NE
    (0, -1), // NW
    (1, 1),  // SE
    (0, 1),  // SW
];

/// How units are allowed to move between cells.
///
/// Four- and eight-direction models pair with the square layout,
/// the six-direction model with the hexagonal layout. The pairing is
/// conventional, not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MovementModel {
    /// Orthogonal moves only (von Neumann neighborhood).
    #[default]
    FourDirection,
    /// Hex moves, odd-row offset parity tables.
    SixDirection,
    /// Orthogonal plus diagonal moves (Moore neighborhood).
    EightDirection,
}

impl MovementModel {
    /// In-bounds structural neighbors of `(row, column)` on a
    /// `rows x columns` grid, independent of walkability.
    ///
    /// Order matches the adjacency scan each model uses:
    /// four-direction lists right, left, down, up; six-direction the
    /// parity table in E, W, NE, NW, SE, SW order; eight-direction the
    /// Moore neighborhood row-major.
    pub fn structural_neighbours(
        self,
        rows: u32,
        columns: u32,
        row: u32,
        column: u32,
    ) -> SmallVec<[CellIndex; 8]> {
        let mut result = SmallVec::new();
        let row = row as i32;
        let column = column as i32;
        let mut push = |ncolumn: i32, nrow: i32| {
            if ncolumn >= 0 && ncolumn < columns as i32 && nrow >= 0 && nrow < rows as i32 {
                result.push(CellIndex::from_row_column(
                    nrow as u32,
                    ncolumn as u32,
                    columns,
                ));
            }
        };
        match self {
            MovementModel::FourDirection => {
                push(column + 1, row);
                push(column - 1, row);
                push(column, row + 1);
                push(column, row - 1);
            }
            MovementModel::SixDirection => {
                let offsets = if row % 2 == 0 {
                    &HEX_EVEN_ROW_OFFSETS
                } else {
                    &HEX_ODD_ROW_OFFSETS
                };
                for &(dcolumn, drow) in offsets {
                    push(column + dcolumn, row + drow);
                }
            }
            MovementModel::EightDirection => {
                for drow in -1..=1 {
                    for dcolumn in -1..=1 {
                        if dcolumn == 0 && drow == 0 {
                            continue;
                        }
                        push(column + dcolumn, row + drow);
                    }
                }
            }
        }
        result
    }
}
