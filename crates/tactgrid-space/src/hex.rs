//! Pointy-top hexagonal tessellation with odd-row offset addressing.

use crate::error::LayoutError;
use crate::tessellation::Tessellation;
use tactgrid_core::{CellExtent, WorldPoint};

/// A pointy-top hexagonal tessellation of the XZ plane.
///
/// Cells keep the same row-major addressing as [`SquareLayout`]; odd
/// rows are shifted half a cell to the right (odd-row offset layout).
/// `cell_size.x` is the hex short diagonal `s`; the side length is
/// `a = s / √3`, and the row pitch is `cell_size.y`.
///
/// The depth anchor is corrected by one side length when the row count
/// is even, so the lattice stays visually centered on the anchor point.
///
/// [`SquareLayout`]: crate::SquareLayout
#[derive(Debug, Clone)]
pub struct HexLayout {
    rows: u32,
    columns: u32,
    cell_size: CellExtent,
    center: WorldPoint,
}

impl HexLayout {
    /// Maximum dimension size: `(row, column)` math uses `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a hex layout with `rows * columns` cells, anchored at the
    /// origin.
    ///
    /// Returns `Err(LayoutError::EmptySpace)` if either dimension is 0,
    /// `Err(LayoutError::DimensionTooLarge)` if either exceeds
    /// [`Self::MAX_DIM`], or `Err(LayoutError::TooManyCells)` if the
    /// cell count does not fit a `u32` index.
    pub fn new(rows: u32, columns: u32, cell_size: CellExtent) -> Result<Self, LayoutError> {
        if rows == 0 || columns == 0 {
            return Err(LayoutError::EmptySpace);
        }
        if rows.checked_mul(columns).is_none() {
            return Err(LayoutError::TooManyCells { rows, columns });
        }
        if rows > Self::MAX_DIM {
            return Err(LayoutError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if columns > Self::MAX_DIM {
            return Err(LayoutError::DimensionTooLarge {
                name: "columns",
                value: columns,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            columns,
            cell_size,
            center: WorldPoint::ZERO,
        })
    }

    /// The cell footprint (`x` is the hex short diagonal).
    pub fn cell_size(&self) -> CellExtent {
        self.cell_size
    }

    /// Hex side length `a = s / √3`.
    fn side_length(&self) -> f32 {
        self.cell_size.x / 3.0f32.sqrt()
    }

    /// World position of the top-left cell center (even-row column 0).
    fn top_left(&self) -> WorldPoint {
        let edge_x = (self.columns / 2) as f32 * self.cell_size.x;
        let mut edge_z = (self.rows / 2) as f32 * self.cell_size.y;
        if self.rows % 2 == 0 {
            edge_z -= self.side_length();
        }
        WorldPoint::new(self.center.x - edge_x, self.center.y, self.center.z - edge_z)
    }
}

impl Tessellation for HexLayout {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn columns(&self) -> u32 {
        self.columns
    }

    fn center(&self) -> WorldPoint {
        self.center
    }

    fn recenter(&mut self, center: WorldPoint) {
        self.center = center;
    }

    fn cell_center(&self, row: u32, column: u32) -> WorldPoint {
        let top_left = self.top_left();
        let row_shift = if row % 2 == 0 {
            0.0
        } else {
            self.cell_size.x / 2.0
        };
        WorldPoint::new(
            top_left.x + column as f32 * self.cell_size.x + row_shift,
            self.center.y,
            top_left.z + row as f32 * self.cell_size.y,
        )
    }

    fn contains(&self, point: WorldPoint) -> bool {
        let edge_x = (self.columns / 2) as f32 * self.cell_size.x;
        let mut edge_z = (self.rows / 2) as f32 * self.cell_size.y;
        // The query window grows by one side length on odd row counts;
        // the layout anchor shrinks by one on even. Together they keep
        // the window covering the full lattice for either parity.
        if self.rows % 2 == 1 {
            edge_z += self.side_length();
        }
        let left = self.center.x - edge_x;
        let top = self.center.z - edge_z;

        point.x >= left - self.cell_size.x / 2.0
            && point.x <= left + edge_x * 2.0 + self.cell_size.x
            && point.z >= top
            && point.z <= top + edge_z * 2.0
    }
}
