//! Fixed-width records stored as BPF map values.

/// Value of a `containers` map entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct ContainerInfo {
    /// Raw [`crate::PolicyLevel`] byte. Decode with
    /// [`crate::PolicyLevel::from_raw`]; an out-of-range value means
    /// the row is inconsistent and callers must fail closed.
    pub policy_level: u8,
}

impl ContainerInfo {
    /// Creates a new record for the given tier.
    #[must_use]
    pub const fn new(policy_level: crate::PolicyLevel) -> Self {
        Self {
            policy_level: policy_level.as_raw(),
        }
    }
}

/// Value of a `processes` map entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct ProcessInfo {
    /// The container this pid is bound to.
    pub container_id: u32,
}

impl ProcessInfo {
    /// Creates a new record bound to `container_id`.
    #[must_use]
    pub const fn new(container_id: u32) -> Self {
        Self { container_id }
    }
}

// SAFETY: `#[repr(C)]`, all-integer fields, no padding, no interior
// pointers — valid for any bit pattern.
#[cfg(feature = "ebpf")]
unsafe impl aya_ebpf::Pod for ContainerInfo {}

#[cfg(feature = "ebpf")]
unsafe impl aya_ebpf::Pod for ProcessInfo {}
