//! Error types for layout construction.

use std::fmt;

/// Errors arising from tessellation construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Attempted to construct a layout with zero cells.
    EmptySpace,
    /// A dimension exceeds the maximum addressable size.
    DimensionTooLarge {
        /// Which dimension ("rows" or "columns").
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// The cell count `rows * columns` does not fit a `u32` index.
    TooManyCells {
        /// The requested row count.
        rows: u32,
        /// The requested column count.
        columns: u32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "layout must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::TooManyCells { rows, columns } => {
                write!(
                    f,
                    "{rows} x {columns} = {} cells exceeds the u32 index range",
                    *rows as u64 * *columns as u64
                )
            }
        }
    }
}

impl std::error::Error for LayoutError {}
