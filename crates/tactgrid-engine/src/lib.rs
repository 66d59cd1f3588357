//! Grid state and interaction engine for the tactgrid workspace.
//!
//! [`GridState`] owns everything a tactical grid needs at runtime: the
//! tessellation, the per-cell store, the connectivity snapshot, the
//! custom-data descriptor table, and the hover/select/path interaction
//! state. Terrain comes in through the [`TerrainOracle`] trait so the
//! engine stays independent of any physics or scene backend; rendering
//! goes out through plain per-cell transform and color accessors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod custom;
pub mod grid;
pub mod oracle;
pub mod store;

pub use cell::{Cell, CellTransform};
pub use config::GridConfig;
pub use custom::CustomCellData;
pub use grid::GridState;
pub use oracle::{FloorHit, TerrainOracle};
pub use store::CellStore;
