//! Tactgrid: an interactive tactical grid engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all tactgrid sub-crates. For most users, adding `tactgrid` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tactgrid::prelude::*;
//!
//! // A terrain oracle backed by a flat floor plane.
//! struct Flat;
//! impl TerrainOracle for Flat {
//!     fn floor_hit(&self, point: WorldPoint) -> Option<FloorHit> {
//!         Some(FloorHit {
//!             position: WorldPoint::new(point.x, 0.0, point.z),
//!             normal: WorldPoint::UP,
//!         })
//!     }
//!     fn obstacle_overlap(&self, _point: WorldPoint, _extent: CellExtent, _mask: u32) -> bool {
//!         false
//!     }
//!     fn custom_layers(&self, _point: WorldPoint) -> u32 {
//!         0
//!     }
//! }
//!
//! // Build a 4×4 square grid anchored at the origin.
//! let mut grid = GridState::new(GridConfig {
//!     rows: 4,
//!     columns: 4,
//!     ..GridConfig::default()
//! });
//! grid.create(&Flat, WorldPoint::ZERO).unwrap();
//!
//! // Route across it with four-direction movement.
//! let path = grid.path(CellIndex(0), CellIndex(15));
//! assert_eq!(path.len(), 7);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tactgrid-core` | Indices, flags, colors, geometry primitives |
//! | [`space`] | `tactgrid-space` | Tessellations and movement models |
//! | [`graph`] | `tactgrid-graph` | Connectivity, pathfinding, reachability |
//! | [`engine`] | `tactgrid-engine` | Grid state machine and terrain oracle |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Indices, flags, colors, and geometry primitives (`tactgrid-core`).
///
/// Contains [`types::CellIndex`], the [`types::CellFlags`] and
/// [`types::GridFlags`] bitsets, the [`types::GridPalette`] highlight
/// colors, and the [`types::WorldPoint`] geometry type.
pub use tactgrid_core as types;

/// Tessellations and movement models (`tactgrid-space`).
///
/// Provides the [`space::Tessellation`] trait with the
/// [`space::SquareLayout`] and [`space::HexLayout`] backends, and the
/// [`space::MovementModel`] neighbor rules.
pub use tactgrid_space as space;

/// Connectivity, pathfinding, and reachability (`tactgrid-graph`).
///
/// Build a [`graph::GridConnectivity`] snapshot with
/// [`graph::build_connectivity`], then query it with
/// [`graph::shortest_path`] and [`graph::unreachable_cells`].
pub use tactgrid_graph as graph;

/// Grid state machine and terrain oracle (`tactgrid-engine`).
///
/// [`engine::GridState`] owns the whole runtime; terrain comes in
/// through the [`engine::TerrainOracle`] trait.
pub use tactgrid_engine as engine;

/// Common imports for typical tactgrid usage.
///
/// ```rust
/// use tactgrid::prelude::*;
/// ```
///
/// This imports the most frequently used types: the grid state machine
/// and its configuration, the terrain oracle trait, cell indices and
/// flags, and the spatial types.
pub mod prelude {
    // Core types
    pub use tactgrid_core::{
        CellExtent, CellFlags, CellIndex, GridFlags, GridInstanceId, GridPalette, Rgba, WorldPoint,
    };

    // Space
    pub use tactgrid_space::{LayoutError, LayoutKind, MovementModel, Tessellation};

    // Graph
    pub use tactgrid_graph::{build_connectivity, shortest_path, unreachable_cells};

    // Engine
    pub use tactgrid_engine::{
        CellStore, CellTransform, CustomCellData, FloorHit, GridConfig, GridState, TerrainOracle,
    };
}
