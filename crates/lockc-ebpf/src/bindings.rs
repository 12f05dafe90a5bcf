//! Minimal reproductions of kernel struct layouts this program reads.
//!
//! A full deployment generates these from the running kernel's BTF via
//! `aya-tool generate cred task_struct` into a `vmlinux.rs` and uses
//! that instead of hand-maintained offsets. Reproduced minimally here
//! for the two fields the handlers actually dereference.

/// `struct cred` (partial) — only the field setuid needs.
#[repr(C)]
pub struct Cred {
    _opaque: [u8; 8],
    /// `kuid_t uid`, accessed via its `.val` member below.
    pub uid: KUid,
}

/// `kuid_t`.
#[repr(C)]
pub struct KUid {
    /// Raw uid value.
    pub val: u32,
}

/// `struct task_struct` (partial) — only the `pid` field this program
/// reads. In a real deployment this offset is a BTF/CO-RE relocation
/// generated from the running kernel's `vmlinux`, not a hardcoded
/// constant; approximated here for a representative x86_64 layout.
#[repr(C)]
pub struct TaskStruct {
    _opaque: [u8; 0x398],
    /// `pid_t pid` — the thread id (not the thread-group id).
    pub pid: i32,
}

/// `struct path` — opaque to this program. Only its address is ever
/// taken, to hand to `bpf_d_path`.
#[repr(C)]
pub struct Path {
    _opaque: [u8; 16],
}

/// `struct file` (partial) — only the embedded `f_path` this program
/// resolves. Same CO-RE caveat as [`TaskStruct`].
#[repr(C)]
pub struct File {
    _opaque: [u8; 0x10],
    /// `struct path f_path`.
    pub f_path: Path,
}
