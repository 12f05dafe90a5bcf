//! `syslog` LSM hook (spec.md §6, §4.3.1).

use aya_ebpf::macros::lsm;
use aya_ebpf::programs::LsmContext;
use aya_log_ebpf::trace;
use lockc_core::handlers::syslog::decide;
use lockc_core::verdict::Verdict;

use crate::adapters::MapHandle;
use crate::maps::{CONTAINERS, PROCESSES};
use crate::util::current_pid;

#[lsm(hook = "syslog")]
pub fn syslog(ctx: LsmContext) -> i32 {
    let prev = Verdict(unsafe { ctx.ret() });
    let processes = MapHandle(&PROCESSES);
    let containers = MapHandle(&CONTAINERS);

    let verdict = decide(&processes, &containers, current_pid(), prev);
    trace!(ctx, "syslog: verdict {}", verdict.0);
    verdict.0
}
