//! `file_open` LSM hook (spec.md §6, §4.3.4).

use aya_ebpf::helpers::gen::bpf_d_path;
use aya_ebpf::macros::lsm;
use aya_ebpf::programs::LsmContext;
use aya_log_ebpf::trace;
use lockc_common::PATH_LEN;
use lockc_core::handlers::open::decide;
use lockc_core::verdict::Verdict;

use crate::adapters::{ArrayPathTable, MapHandle};
use crate::bindings::File;
use crate::maps::{
    ALLOWED_PATHS_ACCESS_BASELINE, ALLOWED_PATHS_ACCESS_RESTRICTED, CONTAINERS,
    DENIED_PATHS_ACCESS_BASELINE, DENIED_PATHS_ACCESS_RESTRICTED, PROCESSES,
};
use crate::util::current_pid;

#[lsm(hook = "file_open")]
pub fn file_open(ctx: LsmContext) -> i32 {
    let prev = Verdict(unsafe { ctx.ret() });

    let file: *const File = unsafe { ctx.arg(0) };
    let mut buf = [0u8; PATH_LEN];
    let path_ptr = unsafe { core::ptr::addr_of!((*file).f_path) }.cast_mut().cast();
    // Step 2 (spec.md §4.3.4): resolution failure allows, to avoid
    // over-blocking on unusual filesystems.
    let resolved_len = unsafe { bpf_d_path(path_ptr, buf.as_mut_ptr().cast(), buf.len() as u32) };
    let path: Option<&[u8]> = if resolved_len > 0 {
        Some(&buf[..(resolved_len as usize).min(PATH_LEN)])
    } else {
        None
    };

    let processes = MapHandle(&PROCESSES);
    let containers = MapHandle(&CONTAINERS);
    let allowed_restricted = ArrayPathTable(&ALLOWED_PATHS_ACCESS_RESTRICTED);
    let denied_restricted = ArrayPathTable(&DENIED_PATHS_ACCESS_RESTRICTED);
    let allowed_baseline = ArrayPathTable(&ALLOWED_PATHS_ACCESS_BASELINE);
    let denied_baseline = ArrayPathTable(&DENIED_PATHS_ACCESS_BASELINE);

    let verdict = decide(
        &processes,
        &containers,
        current_pid(),
        path,
        &allowed_restricted,
        &denied_restricted,
        &allowed_baseline,
        &denied_baseline,
        prev,
    );
    trace!(ctx, "open: verdict {}", verdict.0);
    verdict.0
}
