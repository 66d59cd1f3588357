//! Grid tessellation layouts for the tactgrid workspace.
//!
//! A tessellation maps between the three addressing schemes a tactical
//! grid lives in: linear cell indices, `(row, column)` pairs, and world
//! positions on the XZ plane. Two layouts are provided: [`SquareLayout`]
//! and the odd-row-offset [`HexLayout`]. The [`movement`] module holds
//! the structural neighbor tables for the three movement models built
//! on top of these layouts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hex;
pub mod movement;
pub mod square;
pub mod tessellation;

pub use error::LayoutError;
pub use hex::HexLayout;
pub use movement::MovementModel;
pub use square::SquareLayout;
pub use tessellation::{LayoutKind, Tessellation};
