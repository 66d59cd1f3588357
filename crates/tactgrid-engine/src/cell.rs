//! Per-cell runtime state.

use tactgrid_core::{CellFlags, Rgba, WorldPoint};

/// World placement of a cell: position plus the floor normal the cell
/// is aligned to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellTransform {
    /// Cell center in world space.
    pub position: WorldPoint,
    /// Floor surface normal, unit up until a floor pass aligns it.
    pub normal: WorldPoint,
}

impl Default for CellTransform {
    fn default() -> Self {
        Self {
            position: WorldPoint::ZERO,
            normal: WorldPoint::UP,
        }
    }
}

/// One grid cell. Owned exclusively by the
/// [`CellStore`](crate::CellStore).
#[derive(Clone, Debug)]
pub struct Cell {
    /// World placement.
    pub transform: CellTransform,
    /// Display color. The alpha channel mirrors the flag bits at the
    /// last recolor when flag encoding is on.
    pub color: Rgba,
    /// State flags, including any custom descriptor bits.
    pub flags: CellFlags,
    /// Accumulator of the custom descriptor bits currently applied.
    pub custom_flags: CellFlags,
    /// Override color from a custom descriptor, if one is applied.
    pub custom_color: Option<Rgba>,
}

impl Cell {
    pub(crate) fn new(color: Rgba) -> Self {
        Self {
            transform: CellTransform::default(),
            color,
            flags: CellFlags::empty(),
            custom_flags: CellFlags::empty(),
            custom_color: None,
        }
    }
}
