//! Axis-aligned square tessellation.

use crate::error::LayoutError;
use crate::tessellation::Tessellation;
use tactgrid_core::{CellExtent, WorldPoint};

/// A square-cell tessellation of the XZ plane.
///
/// Cells are addressed row-major with row 0 at the lowest Z and column 0
/// at the lowest X. The top-left cell center sits
/// `(⌊columns/2⌋·sx, ⌊rows/2⌋·sy)` before the anchor, so odd-dimension
/// grids have a cell centered exactly on the anchor point.
///
/// # Examples
///
/// ```
/// use tactgrid_core::{CellExtent, CellIndex, WorldPoint};
/// use tactgrid_space::{SquareLayout, Tessellation};
///
/// let layout = SquareLayout::new(3, 3, CellExtent::default()).unwrap();
/// // Center cell of an odd grid sits on the anchor.
/// assert_eq!(layout.cell_center(1, 1), WorldPoint::ZERO);
/// assert_eq!(layout.nearest_cell(WorldPoint::ZERO), Some(CellIndex(4)));
/// ```
#[derive(Debug, Clone)]
pub struct SquareLayout {
    rows: u32,
    columns: u32,
    cell_size: CellExtent,
    center: WorldPoint,
}

impl SquareLayout {
    /// Maximum dimension size: `(row, column)` math uses `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a square layout with `rows * columns` cells, anchored at
    /// the origin.
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

    /// The cell footprint.
    pub fn cell_size(&self) -> CellExtent {
        self.cell_size
    }

    /// World position of the top-left cell center.
    fn top_left(&self) -> WorldPoint {
        WorldPoint::new(
            self.center.x - (self.columns / 2) as f32 * self.cell_size.x,
            self.center.y,
            self.center.z - (self.rows / 2) as f32 * self.cell_size.y,
        )
    }
}

impl Tessellation for SquareLayout {
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
        WorldPoint::new(
            top_left.x + column as f32 * self.cell_size.x,
            self.center.y,
            top_left.z + row as f32 * self.cell_size.y,
        )
    }

    fn contains(&self, point: WorldPoint) -> bool {
        let edge_x = (self.columns / 2) as f32 * self.cell_size.x + self.cell_size.x / 2.0;
        let edge_z = (self.rows / 2) as f32 * self.cell_size.y + self.cell_size.y / 2.0;

        // Even-row grids have no cell on the anchor, so the window is
        // asymmetric: one full cell is trimmed from the far edge. The
        // row-count parity governs both axes.
        let (trim_x, trim_z) = if self.rows % 2 == 0 {
            (self.cell_size.x, self.cell_size.y)
        } else {
            (0.0, 0.0)
        };

        point.x >= self.center.x - edge_x
            && point.x <= self.center.x + edge_x - trim_x
            && point.z >= self.center.z - edge_z
            && point.z <= self.center.z + edge_z - trim_z
    }
}
