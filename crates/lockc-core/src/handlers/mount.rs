//! mount handler (spec.md §4.3.2).
//!
//! Only bind mounts are policed; every other mount type is allowed
//! untouched. `mount_type`/`dev_name` are `None` where the kernel hook
//! observed a NULL pointer.

use lockc_common::{ContainerInfo, PathEntry, ProcessInfo};

use super::{tier_gate, EnforcedTier, TierGate};
use crate::matcher::path_matches;
use crate::tables::{KeyedMap, PathTable};
use crate::verdict::Verdict;

/// Bounded buffer length for the mount `type` string: `"bind"` plus
/// one byte, so a longer type (e.g. `"bindfs"`) never false-matches.
const TYPE_BUF_LEN: usize = 5;

fn is_exactly_bind(mount_type: &[u8]) -> bool {
    let mut buf = [0u8; TYPE_BUF_LEN];
    let n = mount_type.len().min(TYPE_BUF_LEN);
    buf[..n].copy_from_slice(&mount_type[..n]);
    buf == *b"bind\0"
}

/// Decides a bind-mount security hook invocation for `pid`.
#[allow(clippy::too_many_arguments)]
pub fn decide<P, C, T>(
    processes: &P,
    containers: &C,
    pid: u32,
    mount_type: Option<&[u8]>,
    dev_name: Option<&[u8]>,
    allowed_restricted: &T,
    allowed_baseline: &T,
    prev: Verdict,
) -> Verdict
where
    P: KeyedMap<u32, ProcessInfo>,
    C: KeyedMap<u32, ContainerInfo>,
    T: PathTable,
{
    let tier = match tier_gate(processes, containers, pid) {
        TierGate::Decided(v) => return Verdict::fold(prev, v),
        TierGate::NeedsDecision(tier) => tier,
    };

    let Some(mount_type) = mount_type else {
        return Verdict::fold(prev, Verdict::ALLOW);
    };

    if !is_exactly_bind(mount_type) {
        return Verdict::fold(prev, Verdict::ALLOW);
    }

    let Some(dev_name) = dev_name else {
        return Verdict::fold(prev, Verdict::deny_efault());
    };

    let allowlist = match tier {
        EnforcedTier::Restricted => allowed_restricted,
        EnforcedTier::Baseline => allowed_baseline,
    };
    let entry = PathEntry::from_path(dev_name);
    let verdict = if path_matches(allowlist, entry.as_slice()) {
        Verdict::ALLOW
    } else {
        Verdict::deny_eperm()
    };
    Verdict::fold(prev, verdict)
}
