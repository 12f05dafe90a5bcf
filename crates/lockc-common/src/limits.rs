//! Table capacities, fixed at load time (spec.md §3/§6).
//!
//! These are the capacities the collaborator is expected to size the
//! BPF maps to. They are preserved verbatim from spec.md rather than
//! right-sized for convenience — see `DESIGN.md` for the recorded Open
//! Question about `PID_MAX_LIMIT`.

/// Maximum length of a bounded path buffer read from kernel memory.
pub const PATH_LEN: usize = 64;

/// Capacity of the `runtimes` table (`u32` comm-hash → sentinel).
pub const RUNTIMES_CAP: u32 = 16;

/// Capacity of the `containers` and `processes` tables. Matches the
/// kernel's `PID_MAX_LIMIT`, per spec.md §3/§6.
pub const PID_MAX_LIMIT: u32 = 4_194_304;

/// Capacity of each `paths_*` table (allowed/denied × mount/access ×
/// restricted/baseline).
pub const PATHS_CAP: u32 = 128;
