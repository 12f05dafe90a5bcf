//! Policy Resolver (spec.md §4.2): `pid → process → container → tier`.

use lockc_common::{ContainerInfo, PolicyLevel, ProcessInfo};

use crate::tables::KeyedMap;

/// Result of resolving a pid's policy tier.
///
/// Design note from spec.md §9: the error sentinels are lifted into
/// this return type rather than encoded as negative integers, so a
/// caller cannot forget to handle them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    /// Strictest enforcement tier.
    Restricted,
    /// Intermediate enforcement tier.
    Baseline,
    /// Pass-through tier.
    Privileged,
    /// `pid` has no `processes` row — a host process, untouched.
    NotFound,
    /// `pid` has a `processes` row referencing a container with no
    /// `containers` row — an (I1) violation. Callers must fail closed.
    LookupErr,
}

/// Resolves `pid`'s policy tier.
///
/// Pure: two table lookups, no mutation (P2 — repeated calls without
/// intervening writes return the same value).
pub fn resolve_policy<P, C>(processes: &P, containers: &C, pid: u32) -> PolicyDecision
where
    P: KeyedMap<u32, ProcessInfo>,
    C: KeyedMap<u32, ContainerInfo>,
{
    let Some(process) = processes.get(pid) else {
        return PolicyDecision::NotFound;
    };

    let Some(container) = containers.get(process.container_id) else {
        return PolicyDecision::LookupErr;
    };

    match PolicyLevel::from_raw(container.policy_level) {
        Some(PolicyLevel::Restricted) => PolicyDecision::Restricted,
        Some(PolicyLevel::Baseline) => PolicyDecision::Baseline,
        Some(PolicyLevel::Privileged) => PolicyDecision::Privileged,
        // An undecodable tier byte is itself an inconsistency.
        None => PolicyDecision::LookupErr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockKeyedMap;

    #[test]
    fn not_found_for_unregistered_pid() {
        let processes: MockKeyedMap<u32, ProcessInfo> = MockKeyedMap::new();
        let containers: MockKeyedMap<u32, ContainerInfo> = MockKeyedMap::new();
        assert_eq!(resolve_policy(&processes, &containers, 999), PolicyDecision::NotFound);
    }

    #[test]
    fn lookup_err_when_container_missing() {
        let mut processes: MockKeyedMap<u32, ProcessInfo> = MockKeyedMap::new();
        let containers: MockKeyedMap<u32, ContainerInfo> = MockKeyedMap::new();
        processes.force_insert(100, ProcessInfo::new(7));
        assert_eq!(resolve_policy(&processes, &containers, 100), PolicyDecision::LookupErr);
    }

    #[test]
    fn lookup_err_for_undecodable_tier_byte() {
        let mut processes: MockKeyedMap<u32, ProcessInfo> = MockKeyedMap::new();
        let mut containers: MockKeyedMap<u32, ContainerInfo> = MockKeyedMap::new();
        processes.force_insert(100, ProcessInfo::new(7));
        containers.force_insert(7, ContainerInfo { policy_level: 255 });
        assert_eq!(resolve_policy(&processes, &containers, 100), PolicyDecision::LookupErr);
    }

    #[test]
    fn resolves_each_tier() {
        let mut processes: MockKeyedMap<u32, ProcessInfo> = MockKeyedMap::new();
        let mut containers: MockKeyedMap<u32, ContainerInfo> = MockKeyedMap::new();
        for (pid, cid, level, expect) in [
            (1u32, 1u32, PolicyLevel::Restricted, PolicyDecision::Restricted),
            (2, 2, PolicyLevel::Baseline, PolicyDecision::Baseline),
            (3, 3, PolicyLevel::Privileged, PolicyDecision::Privileged),
        ] {
            processes.force_insert(pid, ProcessInfo::new(cid));
            containers.force_insert(cid, ContainerInfo::new(level));
            assert_eq!(resolve_policy(&processes, &containers, pid), expect);
        }
    }

    #[test]
    fn purity_repeated_calls_agree() {
        let mut processes: MockKeyedMap<u32, ProcessInfo> = MockKeyedMap::new();
        let mut containers: MockKeyedMap<u32, ContainerInfo> = MockKeyedMap::new();
        processes.force_insert(500, ProcessInfo::new(5));
        containers.force_insert(5, ContainerInfo::new(PolicyLevel::Baseline));
        let first = resolve_policy(&processes, &containers, 500);
        let second = resolve_policy(&processes, &containers, 500);
        assert_eq!(first, second);
    }
}
