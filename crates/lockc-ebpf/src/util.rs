//! Small per-hook helpers: reading the current pid and bounded kernel
//! strings into the stack buffers spec.md §5 and §9 require ("every
//! string read from outside the core enters a fixed 64-byte stack
//! buffer").

use aya_ebpf::helpers::{bpf_get_current_pid_tgid, bpf_probe_read_kernel, bpf_probe_read_kernel_str_bytes};
use lockc_common::PATH_LEN;

use crate::bindings::Cred;

/// The pid (tgid) of the task currently executing this hook.
#[inline(always)]
pub fn current_pid() -> u32 {
    (bpf_get_current_pid_tgid() >> 32) as u32
}

/// Reads `cred->uid.val` from a raw `struct cred *`. `None` if the
/// pointer is null or the read faults.
///
/// # Safety
/// `cred` must be a valid `struct cred *` as handed to the hook by the
/// kernel, or null.
pub unsafe fn read_uid(cred: *const Cred) -> Option<u32> {
    if cred.is_null() {
        return None;
    }
    let uid_ptr = unsafe { core::ptr::addr_of!((*cred).uid.val) };
    unsafe { bpf_probe_read_kernel(uid_ptr) }.ok()
}

/// Reads a NUL-terminated kernel string at `ptr` into a fixed,
/// zero-initialized `PATH_LEN`-byte buffer. `None` on a null pointer or
/// a faulting read. The helper only overwrites the string's own bytes
/// plus its terminator, so everything after it in the returned buffer
/// stays zero — the same zero-padded shape `PathEntry` expects.
pub fn read_bounded_str(ptr: *const u8) -> Option<[u8; PATH_LEN]> {
    if ptr.is_null() {
        return None;
    }
    let mut buf = [0u8; PATH_LEN];
    let n = unsafe { bpf_probe_read_kernel_str_bytes(ptr, &mut buf) }.ok()?.len();
    if n == 0 {
        return None;
    }
    Some(buf)
}
