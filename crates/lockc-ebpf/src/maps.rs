//! The BPF maps backing the shared state tables (spec.md §3, §6).
//!
//! Capacities and value types all come from `lockc-common` so the map
//! declarations and the pure decision logic in `lockc-core` can never
//! disagree about table shape.

use aya_ebpf::macros::map;
use aya_ebpf::maps::{Array, HashMap};
use lockc_common::{ContainerInfo, PathEntry, ProcessInfo, PATHS_CAP, PID_MAX_LIMIT, RUNTIMES_CAP};

/// `u32 hash(comm) -> sentinel`. Populated by the collaborator, read by
/// [`lockc_core::runtimes::lookup_hint`] — currently unconsulted by any
/// handler (spec.md §9).
#[map]
pub static RUNTIMES: HashMap<u32, u32> = HashMap::with_max_entries(RUNTIMES_CAP, 0);

/// `container_id -> ContainerInfo`. Written only by the collaborator.
#[map]
pub static CONTAINERS: HashMap<u32, ContainerInfo> = HashMap::with_max_entries(PID_MAX_LIMIT, 0);

/// `pid -> ProcessInfo`. Inserted by the Lineage Tracker; deleted by the
/// collaborator on process exit.
#[map]
pub static PROCESSES: HashMap<u32, ProcessInfo> = HashMap::with_max_entries(PID_MAX_LIMIT, 0);

/// `slot -> PathEntry` for RESTRICTED-tier allowed bind-mount sources.
#[map]
pub static ALLOWED_PATHS_MOUNT_RESTRICTED: Array<PathEntry> = Array::with_max_entries(PATHS_CAP, 0);

/// `slot -> PathEntry` for BASELINE-tier allowed bind-mount sources.
#[map]
pub static ALLOWED_PATHS_MOUNT_BASELINE: Array<PathEntry> = Array::with_max_entries(PATHS_CAP, 0);

/// `slot -> PathEntry` for RESTRICTED-tier allowed file-open paths.
#[map]
pub static ALLOWED_PATHS_ACCESS_RESTRICTED: Array<PathEntry> = Array::with_max_entries(PATHS_CAP, 0);

/// `slot -> PathEntry` for BASELINE-tier allowed file-open paths.
#[map]
pub static ALLOWED_PATHS_ACCESS_BASELINE: Array<PathEntry> = Array::with_max_entries(PATHS_CAP, 0);

/// `slot -> PathEntry` for RESTRICTED-tier denied file-open paths.
#[map]
pub static DENIED_PATHS_ACCESS_RESTRICTED: Array<PathEntry> = Array::with_max_entries(PATHS_CAP, 0);

/// `slot -> PathEntry` for BASELINE-tier denied file-open paths.
#[map]
pub static DENIED_PATHS_ACCESS_BASELINE: Array<PathEntry> = Array::with_max_entries(PATHS_CAP, 0);
