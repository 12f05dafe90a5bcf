//! Per-hook Decision Handlers (spec.md §4.3): syslog, mount, setuid,
//! open.
//!
//! Every handler follows the same skeleton (spec.md §4.3, reproduced
//! here once via [`tier_gate`] so each hook-specific module only
//! writes the RESTRICTED/BASELINE branch):
//!
//! ```text
//! tier := resolve(current_pid)
//! match tier:
//!   LOOKUP_ERR  → verdict = DENY
//!   NOT_FOUND   → verdict = ALLOW (host process)
//!   PRIVILEGED  → verdict = ALLOW
//!   RESTRICTED | BASELINE → hook-specific decision
//! return fold(prev_verdict, verdict)
//! ```

pub mod mount;
pub mod open;
pub mod setuid;
pub mod syslog;

use lockc_common::{ContainerInfo, ProcessInfo};

use crate::resolver::{resolve_policy, PolicyDecision};
use crate::tables::KeyedMap;
use crate::verdict::Verdict;

/// Either the final verdict (tier already decided the outcome), or
/// the still-open tier (RESTRICTED/BASELINE) a hook must decide on.
pub(crate) enum TierGate {
    /// The tier alone determined the verdict.
    Decided(Verdict),
    /// Hook-specific logic must run; carries which of the two
    /// enforced tiers is active.
    NeedsDecision(EnforcedTier),
}

/// The two tiers every handler's hook-specific branch must implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EnforcedTier {
    /// Strictest tier.
    Restricted,
    /// Intermediate tier.
    Baseline,
}

/// Resolves `pid`'s tier and applies the common dispatch rule shared
/// by every hook (spec.md §4.3 skeleton, steps 1-3).
pub(crate) fn tier_gate<P, C>(processes: &P, containers: &C, pid: u32) -> TierGate
where
    P: KeyedMap<u32, ProcessInfo>,
    C: KeyedMap<u32, ContainerInfo>,
{
    match resolve_policy(processes, containers, pid) {
        PolicyDecision::LookupErr => TierGate::Decided(Verdict::deny_eperm()),
        PolicyDecision::NotFound | PolicyDecision::Privileged => TierGate::Decided(Verdict::ALLOW),
        PolicyDecision::Restricted => TierGate::NeedsDecision(EnforcedTier::Restricted),
        PolicyDecision::Baseline => TierGate::NeedsDecision(EnforcedTier::Baseline),
    }
}
