//! Lineage Tracker (spec.md §4.1): maintains the `processes` table as
//! tasks fork.
//!
//! Fed by two independent event sources — a fork-style tracepoint and
//! a task-allocation security hook — that produce overlapping streams
//! for the same child. `on_new_task` is idempotent so replaying either
//! source, or both, is harmless (P3).

use lockc_common::{ContainerInfo, ProcessInfo};

use crate::error::LineageError;
use crate::tables::{InsertOutcome, KeyedMap};

/// Handles a new-task event `(parent_pid, child_pid)`.
///
/// Contract (spec.md §4.1):
/// - If `processes[parent_pid]` is absent, the child is a host
///   process — do nothing, return `Ok(())`.
/// - Otherwise confirm the parent's container still exists; if not,
///   return [`LineageError::InconsistentState`] (non-fatal to the
///   child — it is simply left unbound).
/// - If `processes[child_pid]` already exists, return `Ok(())`
///   (idempotent — handles duplicate delivery from the two sources).
/// - Otherwise insert `processes[child_pid] = { container_id }`,
///   propagating any capacity error.
pub fn on_new_task<P, C>(
    processes: &mut P,
    containers: &C,
    parent_pid: u32,
    child_pid: u32,
) -> Result<(), LineageError>
where
    P: KeyedMap<u32, ProcessInfo>,
    C: KeyedMap<u32, ContainerInfo>,
{
    let Some(parent) = processes.get(parent_pid) else {
        return Ok(());
    };

    if containers.get(parent.container_id).is_none() {
        return Err(LineageError::InconsistentState);
    }

    match processes.insert_if_absent(child_pid, ProcessInfo::new(parent.container_id))? {
        InsertOutcome::Inserted | InsertOutcome::AlreadyPresent => Ok(()),
    }
}
