//! The terrain oracle seam.

use tactgrid_core::{CellExtent, WorldPoint};

/// Result of a successful floor probe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorHit {
    /// Where the probe hit the floor surface.
    pub position: WorldPoint,
    /// Surface normal at the hit point.
    pub normal: WorldPoint,
}

/// Answers the three terrain questions the centering pipeline asks.
///
/// The engine issues exactly one query per cell per pass: a floor probe
/// during alignment, an obstacle overlap during the obstacle scan, and
/// a layer query during the custom-metadata scan. Implementations
/// typically wrap a physics world; tests use scripted stand-ins.
pub trait TerrainOracle {
    /// Probe straight down for a floor surface at `point`.
    ///
    /// `None` means the cell hangs over the void.
    fn floor_hit(&self, point: WorldPoint) -> Option<FloorHit>;

    /// Whether anything matching `mask` overlaps a cell footprint of
    /// `extent` at `point`.
    fn obstacle_overlap(&self, point: WorldPoint, extent: CellExtent, mask: u32) -> bool;

    /// Collision-layer bits present at `point`, for matching against
    /// custom-data descriptors.
    fn custom_layers(&self, point: WorldPoint) -> u32;
}
