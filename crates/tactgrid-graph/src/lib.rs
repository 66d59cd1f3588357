//! Connectivity graphs and graph queries for the tactgrid workspace.
//!
//! The [`ConnectivityGraph`] is a dense, undirected graph over a grid's
//! cells with a per-point enabled flag. [`builder`] constructs one from
//! a walkability predicate for each movement model, [`path`] runs
//! unit-weight shortest paths over it, and [`reach`] computes which
//! cells are connected to a start cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod graph;
pub mod path;
pub mod reach;

pub use builder::{build_connectivity, GridConnectivity};
pub use graph::ConnectivityGraph;
pub use path::shortest_path;
pub use reach::unreachable_cells;
