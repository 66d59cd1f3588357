//! Scripted terrain oracles for tactgrid tests.
//!
//! [`FlatTerrain`] answers every floor probe with a flat plane and
//! never reports obstacles or metadata. [`ScriptedTerrain`] starts
//! from the same plane and lets a test paint void holes, obstacle
//! blobs and metadata layers at chosen world positions.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod oracles;

pub use oracles::{FlatTerrain, ScriptedTerrain};
