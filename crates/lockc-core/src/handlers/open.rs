//! open handler (spec.md §4.3.4).
//!
//! Resolved open-handler shape per the Open Question in spec.md §9:
//! "deny-then-allow-then-default-deny", consulting the tier's deny
//! table before its allow table. The alternative shape described
//! there (checking the allow table twice) is not implemented.

use lockc_common::{ContainerInfo, PathEntry, ProcessInfo};

use super::{tier_gate, EnforcedTier, TierGate};
use crate::matcher::path_matches;
use crate::tables::{KeyedMap, PathTable};
use crate::verdict::Verdict;

/// Decides a file-open security hook invocation for `pid`.
///
/// `path` is the already-resolved absolute path, or `None` if the
/// kernel's path-resolution helper failed (step 2 of §4.3.4 — allow,
/// to avoid over-blocking on unusual filesystems).
#[allow(clippy::too_many_arguments)]
pub fn decide<P, C, T>(
    processes: &P,
    containers: &C,
    pid: u32,
    path: Option<&[u8]>,
    allowed_restricted: &T,
    denied_restricted: &T,
    allowed_baseline: &T,
    denied_baseline: &T,
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

    let Some(path) = path else {
        return Verdict::fold(prev, Verdict::ALLOW);
    };

    if path == b"/" {
        return Verdict::fold(prev, Verdict::ALLOW);
    }

    let (allowed, denied) = match tier {
        EnforcedTier::Restricted => (allowed_restricted, denied_restricted),
        EnforcedTier::Baseline => (allowed_baseline, denied_baseline),
    };

    let entry = PathEntry::from_path(path);
    let probe = entry.as_slice();
    let verdict = if path_matches(denied, probe) {
        Verdict::deny_eperm()
    } else if path_matches(allowed, probe) {
        Verdict::ALLOW
    } else {
        Verdict::deny_eperm()
    };
    Verdict::fold(prev, verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MockKeyedMap, MockPathTable};
    use lockc_common::PolicyLevel;

    fn setup(
        level: PolicyLevel,
    ) -> (
        MockKeyedMap<u32, ProcessInfo>,
        MockKeyedMap<u32, ContainerInfo>,
    ) {
        let mut processes = MockKeyedMap::new();
        let mut containers = MockKeyedMap::new();
        containers.force_insert(6, ContainerInfo::new(level));
        processes.force_insert(600, ProcessInfo::new(6));
        (processes, containers)
    }

    #[test]
    fn open_of_root_always_allows() {
        // spec.md §8 scenario 6.
        let (processes, containers) = setup(PolicyLevel::Restricted);
        let (allowed_r, denied_r, allowed_b, denied_b) = (
            MockPathTable::new(),
            MockPathTable::new(),
            MockPathTable::new(),
            MockPathTable::new(),
        );
        assert_eq!(
            decide(
                &processes,
                &containers,
                600,
                Some(b"/"),
                &allowed_r,
                &denied_r,
                &allowed_b,
                &denied_b,
                Verdict::ALLOW,
            ),
            Verdict::ALLOW
        );
    }

    #[test]
    fn empty_restricted_allowlist_denies_everything_else() {
        // spec.md §8 scenario 6.
        let (processes, containers) = setup(PolicyLevel::Restricted);
        let (allowed_r, denied_r, allowed_b, denied_b) = (
            MockPathTable::new(),
            MockPathTable::new(),
            MockPathTable::new(),
            MockPathTable::new(),
        );
        assert_eq!(
            decide(
                &processes,
                &containers,
                600,
                Some(b"/tmp/x"),
                &allowed_r,
                &denied_r,
                &allowed_b,
                &denied_b,
                Verdict::ALLOW,
            ),
            Verdict::deny_eperm()
        );
    }

    #[test]
    fn deny_table_wins_over_allow_table() {
        let (processes, containers) = setup(PolicyLevel::Restricted);
        let mut allowed_r = MockPathTable::new();
        allowed_r.set(0, PathEntry::from_path(b"/var"));
        let mut denied_r = MockPathTable::new();
        denied_r.set(0, PathEntry::from_path(b"/var/secret"));
        let allowed_b = MockPathTable::new();
        let denied_b = MockPathTable::new();
        assert_eq!(
            decide(
                &processes,
                &containers,
                600,
                Some(b"/var/secret/key"),
                &allowed_r,
                &denied_r,
                &allowed_b,
                &denied_b,
                Verdict::ALLOW,
            ),
            Verdict::deny_eperm()
        );
    }

    #[test]
    fn allowlisted_path_not_in_deny_table_allows() {
        let (processes, containers) = setup(PolicyLevel::Restricted);
        let mut allowed_r = MockPathTable::new();
        allowed_r.set(0, PathEntry::from_path(b"/var/lib"));
        let denied_r = MockPathTable::new();
        let allowed_b = MockPathTable::new();
        let denied_b = MockPathTable::new();
        assert_eq!(
            decide(
                &processes,
                &containers,
                600,
                Some(b"/var/lib/data"),
                &allowed_r,
                &denied_r,
                &allowed_b,
                &denied_b,
                Verdict::ALLOW,
            ),
            Verdict::ALLOW
        );
    }

    #[test]
    fn baseline_uses_its_own_tables() {
        let (processes, containers) = setup(PolicyLevel::Baseline);
        let allowed_r = MockPathTable::new();
        let denied_r = MockPathTable::new();
        let mut allowed_b = MockPathTable::new();
        allowed_b.set(0, PathEntry::from_path(b"/srv"));
        let denied_b = MockPathTable::new();
        assert_eq!(
            decide(
                &processes,
                &containers,
                600,
                Some(b"/srv/app"),
                &allowed_r,
                &denied_r,
                &allowed_b,
                &denied_b,
                Verdict::ALLOW,
            ),
            Verdict::ALLOW
        );
    }

    #[test]
    fn unresolved_path_allows() {
        let (processes, containers) = setup(PolicyLevel::Restricted);
        let (allowed_r, denied_r, allowed_b, denied_b) = (
            MockPathTable::new(),
            MockPathTable::new(),
            MockPathTable::new(),
            MockPathTable::new(),
        );
        assert_eq!(
            decide(
                &processes,
                &containers,
                600,
                None,
                &allowed_r,
                &denied_r,
                &allowed_b,
                &denied_b,
                Verdict::ALLOW,
            ),
            Verdict::ALLOW
        );
    }

    #[test]
    fn privileged_tier_allows_regardless_of_tables() {
        // P6.
        let (processes, containers) = setup(PolicyLevel::Privileged);
        let mut denied_r = MockPathTable::new();
        denied_r.set(0, PathEntry::from_path(b"/"));
        let (allowed_r, allowed_b, denied_b) = (
            MockPathTable::new(),
            MockPathTable::new(),
            MockPathTable::new(),
        );
        assert_eq!(
            decide(
                &processes,
                &containers,
                600,
                Some(b"/etc/shadow"),
                &allowed_r,
                &denied_r,
                &allowed_b,
                &denied_b,
                Verdict::ALLOW,
            ),
            Verdict::ALLOW
        );
    }

    #[test]
    fn host_process_allows_regardless_of_tables() {
        // P7.
        let processes: MockKeyedMap<u32, ProcessInfo> = MockKeyedMap::new();
        let containers: MockKeyedMap<u32, ContainerInfo> = MockKeyedMap::new();
        let mut denied_r = MockPathTable::new();
        denied_r.set(0, PathEntry::from_path(b"/etc"));
        let (allowed_r, allowed_b, denied_b) = (
            MockPathTable::new(),
            MockPathTable::new(),
            MockPathTable::new(),
        );
        assert_eq!(
            decide(
                &processes,
                &containers,
                999,
                Some(b"/etc/shadow"),
                &allowed_r,
                &denied_r,
                &allowed_b,
                &denied_b,
                Verdict::ALLOW,
            ),
            Verdict::ALLOW
        );
    }

    #[test]
    fn prior_denial_always_wins() {
        let (processes, containers) = setup(PolicyLevel::Privileged);
        let (allowed_r, denied_r, allowed_b, denied_b) = (
            MockPathTable::new(),
            MockPathTable::new(),
            MockPathTable::new(),
            MockPathTable::new(),
        );
        let prior = Verdict(-13);
        assert_eq!(
            decide(
                &processes,
                &containers,
                600,
                Some(b"/anything"),
                &allowed_r,
                &denied_r,
                &allowed_b,
                &denied_b,
                prior,
            ),
            prior
        );
    }
}
