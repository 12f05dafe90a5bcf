//! Error types for the decision engine (spec.md §7).

use core::fmt;

/// A table mutation could not be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The table is at its fixed capacity; the row was rejected
    /// (spec.md I3: "on insertion overflow, the row is rejected and
    /// the event falls through as if the process were not
    /// containerized").
    CapacityExceeded,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("table at capacity"),
        }
    }
}

/// The Lineage Tracker found an internal inconsistency while handling
/// `on_new_task` (spec.md §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineageError {
    /// The parent pid is bound to a `container_id` that has no row in
    /// `containers` — an (I1) violation. Non-fatal to the child: the
    /// child is simply left unbound.
    InconsistentState,
    /// Inserting the child's `processes` row failed (table at
    /// capacity); propagated from [`TableError`].
    Table(TableError),
}

impl fmt::Display for LineageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentState => f.write_str("parent process references a missing container"),
            Self::Table(e) => write!(f, "table error: {e}"),
        }
    }
}

impl From<TableError> for LineageError {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}
