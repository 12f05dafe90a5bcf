//! `sched_process_fork` tracepoint (spec.md §6: "Fork-style tracepoint
//! yielding `(parent_task, child_task)`").
//!
//! One of the two Lineage Tracker event sources; see
//! [`super::task_alloc`] for the other. `lockc_core::lineage::on_new_task`
//! is idempotent, so firing from both sources for the same child is
//! harmless (P3).

use aya_ebpf::macros::tracepoint;
use aya_ebpf::programs::TracePointContext;
use aya_log_ebpf::{error, trace};
use lockc_core::lineage::on_new_task;

use crate::adapters::MapHandle;
use crate::maps::{CONTAINERS, PROCESSES};

/// Raw layout of `sched_process_fork`'s trace format, per
/// `/sys/kernel/debug/tracing/events/sched/sched_process_fork/format`.
#[repr(C)]
struct SchedProcessForkArgs {
    _common: [u8; 8],
    _parent_comm: [u8; 16],
    parent_pid: i32,
    _child_comm: [u8; 16],
    child_pid: i32,
}

#[tracepoint]
pub fn sched_process_fork(ctx: TracePointContext) -> u32 {
    match try_sched_process_fork(&ctx) {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn try_sched_process_fork(ctx: &TracePointContext) -> Result<(), i64> {
    let args: *const SchedProcessForkArgs = ctx.as_ptr().cast();
    let parent_pid = unsafe { (*args).parent_pid } as u32;
    let child_pid = unsafe { (*args).child_pid } as u32;

    let mut processes = MapHandle(&PROCESSES);
    let containers = MapHandle(&CONTAINERS);

    match on_new_task(&mut processes, &containers, parent_pid, child_pid) {
        Ok(()) => {
            trace!(ctx, "fork: bound pid {} under parent {}", child_pid, parent_pid);
            Ok(())
        }
        Err(_) => {
            error!(ctx, "fork: lineage inconsistency for parent {}", parent_pid);
            // Non-fatal (spec.md §7): the child is left unbound, not the
            // tracepoint's job to deny anything.
            Ok(())
        }
    }
}
