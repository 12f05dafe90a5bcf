//! `task_fix_setuid` LSM hook (spec.md §6, §4.3.3).

use aya_ebpf::macros::lsm;
use aya_ebpf::programs::LsmContext;
use aya_log_ebpf::trace;
use lockc_core::handlers::setuid::decide;
use lockc_core::verdict::Verdict;

use crate::adapters::MapHandle;
use crate::bindings::Cred;
use crate::maps::{CONTAINERS, PROCESSES};
use crate::util::{current_pid, read_uid};

#[lsm(hook = "task_fix_setuid")]
pub fn task_fix_setuid(ctx: LsmContext) -> i32 {
    let prev = Verdict(unsafe { ctx.ret() });

    let new_cred: *const Cred = unsafe { ctx.arg(0) };
    let old_cred: *const Cred = unsafe { ctx.arg(1) };

    let Some(new_uid) = (unsafe { read_uid(new_cred) }) else {
        return prev.0;
    };
    let Some(old_uid) = (unsafe { read_uid(old_cred) }) else {
        return prev.0;
    };

    let processes = MapHandle(&PROCESSES);
    let containers = MapHandle(&CONTAINERS);

    let verdict = decide(&processes, &containers, current_pid(), old_uid, new_uid, prev);
    trace!(ctx, "setuid: verdict {}", verdict.0);
    verdict.0
}
