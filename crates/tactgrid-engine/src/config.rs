//! Grid configuration.

use tactgrid_core::{CellExtent, GridPalette};
use tactgrid_space::{LayoutKind, MovementModel};

/// Collision mask the obstacle scan uses by default.
pub const DEFAULT_OBSTACLE_MASK: u32 = 1 << 13;
/// Collision mask the floor probe uses by default.
pub const DEFAULT_FLOOR_MASK: u32 = 1 << 14;

/// Construction input for a [`GridState`](crate::GridState).
///
/// Dimension validation happens when the grid is created, not here;
/// a zero-dimension config is representable but will fail `create`.
#[derive(Clone, Debug)]
pub struct GridConfig {
    /// Number of rows. Default: 9.
    pub rows: u32,
    /// Number of columns. Default: 9.
    pub columns: u32,
    /// Cell footprint in world units. Default: 1 x 1.
    pub cell_size: CellExtent,
    /// Square or hexagonal tessellation. Default: square.
    pub layout: LayoutKind,
    /// Movement model for connectivity. Default: four-direction.
    pub movement: MovementModel,
    /// Colors for the visual cell states.
    pub palette: GridPalette,
    /// Collision mask for the obstacle scan; zero skips the scan.
    pub obstacle_mask: u32,
    /// Collision mask for the floor probe; zero skips the pass.
    pub floor_mask: u32,
    /// When set, recolors write the cell's flag bits into the alpha
    /// channel for shader-side state branching. Default: true.
    pub flags_via_alpha: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 9,
            columns: 9,
            cell_size: CellExtent::default(),
            layout: LayoutKind::default(),
            movement: MovementModel::default(),
            palette: GridPalette::default(),
            obstacle_mask: DEFAULT_OBSTACLE_MASK,
            floor_mask: DEFAULT_FLOOR_MASK,
            flags_via_alpha: true,
        }
    }
}

impl GridConfig {
    /// Total number of cells.
    ///
    /// Computed in `u64`: the product of two unvalidated `u32`
    /// dimensions can exceed the `u32` index range, which layout
    /// construction rejects with `LayoutError::TooManyCells`.
    pub fn cell_count(&self) -> u64 {
        self.rows as u64 * self.columns as u64
    }
}
