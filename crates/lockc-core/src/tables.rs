//! Storage abstractions over the fixed-capacity associative tables
//! from spec.md §3.
//!
//! The decision engine never talks to a concrete map implementation —
//! it talks to these two traits. `lockc-ebpf` implements them over
//! `aya-ebpf` maps; `lockc-core`'s own test suite implements them over
//! a small `std`-backed mock (see `testutil`), so the same decision
//! logic is written once and exercised against both the kernel target
//! and a host fallback.

use crate::error::TableError;

/// Outcome of a compare-and-swap-style insert.
///
/// Design note from spec.md §9: "Inserts must be compare-and-swap on
/// key presence, not blind upsert" — this is what gives the Lineage
/// Tracker's `on_new_task` its idempotency (P3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was absent and the value was stored.
    Inserted,
    /// The key was already present; the table was not modified.
    AlreadyPresent,
}

/// A fixed-capacity key → value table (`runtimes`, `containers`,
/// `processes`).
pub trait KeyedMap<K, V> {
    /// Looks up `key`. Pure — no side effects.
    fn get(&self, key: K) -> Option<V>;

    /// Inserts `value` at `key` only if `key` is not already present.
    ///
    /// Returns `Ok(InsertOutcome::AlreadyPresent)` without mutating
    /// state if the key exists (idempotent insert, P3). Returns
    /// `Err(TableError::CapacityExceeded)` if the table is full and
    /// `key` is new (I3).
    fn insert_if_absent(&mut self, key: K, value: V) -> Result<InsertOutcome, TableError>;

    /// Removes `key`, if present. A no-op otherwise.
    fn remove(&mut self, key: K);
}

/// A fixed-capacity, slot-indexed table of path entries (the six
/// `paths_*` tables).
///
/// Modeled as an array rather than an arbitrary keyed map because the
/// Path Matcher (spec.md §4.4) must iterate every occupied slot in a
/// way the eBPF verifier can bound: a `for slot in 0..CAPACITY` loop
/// over a BPF `Array` map, not an unbounded hash-map iterator.
pub trait PathTable {
    /// Fixed number of slots in this table.
    fn capacity(&self) -> u32;

    /// Reads the entry at `slot`, if populated.
    fn slot(&self, slot: u32) -> Option<lockc_common::PathEntry>;
}
