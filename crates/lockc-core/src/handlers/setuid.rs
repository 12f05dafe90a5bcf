//! setuid handler (spec.md §4.3.3).
//!
//! Denies a non-root containerized process transitioning to uid 0.
//! Privileged tier (and host processes) always allow, handled by
//! [`super::tier_gate`].

use lockc_common::{ContainerInfo, ProcessInfo};

use super::{tier_gate, EnforcedTier, TierGate};
use crate::tables::KeyedMap;
use crate::verdict::Verdict;

/// Decides a `setuid`-family credential transition for `pid`.
///
/// `new_uid`/`old_uid` are the incoming and outgoing credentials' uid.
pub fn decide<P, C>(
    processes: &P,
    containers: &C,
    pid: u32,
    old_uid: u32,
    new_uid: u32,
    prev: Verdict,
) -> Verdict
where
    P: KeyedMap<u32, ProcessInfo>,
    C: KeyedMap<u32, ContainerInfo>,
{
    let verdict = match tier_gate(processes, containers, pid) {
        TierGate::Decided(v) => v,
        TierGate::NeedsDecision(EnforcedTier::Restricted | EnforcedTier::Baseline) => {
            if new_uid == 0 && old_uid >= 1000 {
                Verdict::deny_eperm()
            } else {
                Verdict::ALLOW
            }
        }
    };
    Verdict::fold(prev, verdict)
}
