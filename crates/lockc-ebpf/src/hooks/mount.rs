//! `sb_mount` LSM hook (spec.md §6, §4.3.2).

use aya_ebpf::macros::lsm;
use aya_ebpf::programs::LsmContext;
use aya_log_ebpf::trace;
use lockc_core::handlers::mount::decide;
use lockc_core::verdict::Verdict;

use crate::adapters::{ArrayPathTable, MapHandle};
use crate::maps::{
    ALLOWED_PATHS_MOUNT_BASELINE, ALLOWED_PATHS_MOUNT_RESTRICTED, CONTAINERS, PROCESSES,
};
use crate::util::{current_pid, read_bounded_str};

#[lsm(hook = "sb_mount")]
pub fn sb_mount(ctx: LsmContext) -> i32 {
    let prev = Verdict(unsafe { ctx.ret() });

    let dev_name: *const u8 = unsafe { ctx.arg(0) };
    let mount_type: *const u8 = unsafe { ctx.arg(2) };

    let type_buf = read_bounded_str(mount_type);
    let dev_buf = read_bounded_str(dev_name);

    let processes = MapHandle(&PROCESSES);
    let containers = MapHandle(&CONTAINERS);
    let allowed_restricted = ArrayPathTable(&ALLOWED_PATHS_MOUNT_RESTRICTED);
    let allowed_baseline = ArrayPathTable(&ALLOWED_PATHS_MOUNT_BASELINE);

    let verdict = decide(
        &processes,
        &containers,
        current_pid(),
        type_buf.as_ref().map(|b| b.as_slice()),
        dev_buf.as_ref().map(|b| b.as_slice()),
        &allowed_restricted,
        &allowed_baseline,
        prev,
    );
    trace!(ctx, "mount: verdict {}", verdict.0);
    verdict.0
}
