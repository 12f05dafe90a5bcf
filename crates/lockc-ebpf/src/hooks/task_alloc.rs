//! `task_alloc` LSM hook (spec.md §6: "Task-allocation security hook
//! yielding `(new_task, clone_flags, prev_verdict)`").
//!
//! The second of the two Lineage Tracker event sources; see
//! [`super::fork`] for the other. Runs in the parent's context, so
//! `bpf_get_current_pid_tgid` yields the parent pid; the new child's
//! pid is read from the `task_struct` pointer the hook receives.

use aya_ebpf::helpers::bpf_probe_read_kernel;
use aya_ebpf::macros::lsm;
use aya_ebpf::programs::LsmContext;
use aya_log_ebpf::trace;
use lockc_core::lineage::on_new_task;

use crate::adapters::MapHandle;
use crate::bindings::TaskStruct;
use crate::maps::{CONTAINERS, PROCESSES};
use crate::util::current_pid;

#[lsm(hook = "task_alloc")]
pub fn task_alloc(ctx: LsmContext) -> i32 {
    match try_task_alloc(&ctx) {
        Ok(verdict) => verdict,
        Err(ret) => ret as i32,
    }
}

fn try_task_alloc(ctx: &LsmContext) -> Result<i32, i64> {
    let prev: i32 = unsafe { ctx.ret() };
    if prev != 0 {
        // A prior LSM already denied this allocation (P4: prior wins).
        return Ok(prev);
    }

    let new_task: *const TaskStruct = unsafe { ctx.arg(0) };
    let Some(child_pid) = (unsafe { bpf_probe_read_kernel(core::ptr::addr_of!((*new_task).pid)) }.ok())
    else {
        return Ok(0);
    };
    let parent_pid = current_pid();

    let mut processes = MapHandle(&PROCESSES);
    let containers = MapHandle(&CONTAINERS);

    if on_new_task(&mut processes, &containers, parent_pid, child_pid as u32).is_ok() {
        trace!(ctx, "task_alloc: bound pid {} under parent {}", child_pid, parent_pid);
    }
    // Non-fatal either way (spec.md §7): task_alloc never denies on its
    // own account, only relays a stronger prior verdict.
    Ok(0)
}
