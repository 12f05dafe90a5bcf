//! syslog handler (spec.md §4.3.1).
//!
//! RESTRICTED and BASELINE both deny; PRIVILEGED allows. The log
//! access type itself is unused by policy — container workloads must
//! not read the host kernel ring buffer at all, regardless of which
//! syslog action was requested.

use lockc_common::{ContainerInfo, ProcessInfo};

use super::{tier_gate, EnforcedTier, TierGate};
use crate::tables::KeyedMap;
use crate::verdict::Verdict;

/// Decides a `syslog(2)` security hook invocation for `pid`.
pub fn decide<P, C>(processes: &P, containers: &C, pid: u32, prev: Verdict) -> Verdict
where
    P: KeyedMap<u32, ProcessInfo>,
    C: KeyedMap<u32, ContainerInfo>,
{
    let verdict = match tier_gate(processes, containers, pid) {
        TierGate::Decided(v) => v,
        TierGate::NeedsDecision(EnforcedTier::Restricted | EnforcedTier::Baseline) => {
            Verdict::deny_eperm()
        }
    };
    Verdict::fold(prev, verdict)
}
