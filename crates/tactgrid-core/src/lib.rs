//! Core types for the tactgrid tactical grid toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the tactgrid workspace:
//! cell indices, flag bitmasks, colors, and world-geometry primitives.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod flags;
pub mod geom;
pub mod id;

pub use color::{GridPalette, Rgba};
pub use flags::{CellFlags, GridFlags};
pub use geom::{CellExtent, WorldPoint};
pub use id::{CellIndex, GridInstanceId};
