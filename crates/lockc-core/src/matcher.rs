//! Path Matcher (spec.md §4.4).

use crate::tables::PathTable;

/// Scans every occupied slot of `table` for an entry that is a
/// byte-prefix of `probe`.
///
/// Iteration is bounded by `table.capacity()` — a verifier-friendly
/// `for` loop, not an unbounded iterator (spec.md: "Iteration is
/// bounded by the table's capacity"). Empty entries are skipped so
/// they never match vacuously (P5).
#[must_use]
pub fn path_matches(table: &impl PathTable, probe: &[u8]) -> bool {
    for slot in 0..table.capacity() {
        let Some(entry) = table.slot(slot) else {
            continue;
        };
        if entry.is_empty() {
            continue;
        }
        let prefix = entry.as_slice();
        if probe.len() >= prefix.len() && &probe[..prefix.len()] == prefix {
            return true;
        }
    }
    false
}
