//! The tessellation abstraction shared by the square and hex layouts.

use tactgrid_core::{CellIndex, WorldPoint};

/// Which tessellation a grid uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutKind {
    /// Axis-aligned square cells.
    #[default]
    Square,
    /// Pointy-top hexagonal cells, odd rows offset half a cell right.
    Hexagonal,
}

/// Maps between linear cell indices, `(row, column)` pairs, and world
/// positions on the XZ plane.
///
/// A tessellation is anchored at a world-space center point; all cell
/// centers are derived from it. Re-anchoring is cheap and does not touch
/// any per-cell state.
///
/// Both implementations keep the same addressing convention: cells are
/// row-major, row 0 at the lowest Z (the "top" edge), column 0 at the
/// lowest X.
pub trait Tessellation {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn columns(&self) -> u32;

    /// Total number of cells.
    fn cell_count(&self) -> u32 {
        self.rows() * self.columns()
    }

    /// The anchor point the layout is centered on.
    fn center(&self) -> WorldPoint;

    /// Move the layout's anchor.
    fn recenter(&mut self, center: WorldPoint);

    /// World-space center of the cell at `(row, column)`.
    ///
    /// Callers must pass in-range coordinates; the result for
    /// out-of-range input is a point outside the grid, not an error.
    fn cell_center(&self, row: u32, column: u32) -> WorldPoint;

    /// Whether `point` falls inside the layout's bounding window.
    ///
    /// This is a cheap rectangle test, not an exact cell-shape test;
    /// it exists to reject far-away points before a nearest-cell scan.
    fn contains(&self, point: WorldPoint) -> bool;

    /// The cell whose center is closest to `point`, or `None` when the
    /// point is outside the bounding window.
    fn nearest_cell(&self, point: WorldPoint) -> Option<CellIndex> {
        if !self.contains(point) {
            return None;
        }
        let columns = self.columns();
        let mut closest = None;
        let mut closest_distance = f32::MAX;
        for row in 0..self.rows() {
            for column in 0..columns {
                let distance = point.distance_to(self.cell_center(row, column));
                if distance < closest_distance {
                    closest_distance = distance;
                    closest = Some(CellIndex::from_row_column(row, column, columns));
                }
            }
        }
        closest
    }
}
