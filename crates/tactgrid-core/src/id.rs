//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a cell within a grid by its linear row-major index.
///
/// For a grid with `columns` columns, the cell at `(row, column)` has
/// index `row * columns + column`. Spatial queries that can miss return
/// `Option<CellIndex>` rather than a sentinel value.
///
/// # Examples
///
/// ```
/// use tactgrid_core::CellIndex;
///
/// let idx = CellIndex::from_row_column(2, 1, 9);
/// assert_eq!(idx, CellIndex(19));
/// assert_eq!(idx.row(9), 2);
/// assert_eq!(idx.column(9), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(pub u32);

impl CellIndex {
    /// Build an index from `(row, column)` for a grid with `columns` columns.
    pub const fn from_row_column(row: u32, column: u32, columns: u32) -> Self {
        Self(row * columns + column)
    }

    /// Row of this index for a grid with `columns` columns.
    pub const fn row(self, columns: u32) -> u32 {
        self.0 / columns
    }

    /// Column of this index for a grid with `columns` columns.
    pub const fn column(self, columns: u32) -> u32 {
        self.0 % columns
    }

    /// The raw index as a `usize`, for slice addressing.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CellIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Counter for unique [`GridInstanceId`] allocation.
static GRID_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a grid object.
///
/// Allocated from a monotonic atomic counter via [`GridInstanceId::next`].
/// Two distinct grid instances always have different IDs, even when they
/// share dimensions and layout. Lets consumers that cache per-grid data
/// (render buffers, compiled paths) detect that a different grid instance
/// was passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridInstanceId(u64);

impl GridInstanceId {
    /// Allocate a fresh, unique instance ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(GRID_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GridInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
