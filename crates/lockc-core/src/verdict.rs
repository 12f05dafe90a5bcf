//! The hook verdict and the stacking combinator (spec.md §4.3, §6,
//! P4).

/// `EPERM` — Operation not permitted, from the host kernel's
/// `errno.h`. Used for policy denials and `LOOKUP_ERR`.
pub const EPERM: i32 = 1;

/// `EFAULT` — Bad address, from the host kernel's `errno.h`. Used when
/// a required kernel string cannot be read.
pub const EFAULT: i32 = 14;

/// The integer verdict a hook returns: `0` = allow, negative = deny
/// with that error code (spec.md §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict(pub i32);

impl Verdict {
    /// Allow. The identity element of [`Verdict::fold`].
    pub const ALLOW: Self = Self(0);

    /// Deny with `-EPERM` (policy deny / `LOOKUP_ERR`).
    #[must_use]
    pub const fn deny_eperm() -> Self {
        Self(-EPERM)
    }

    /// Deny with `-EFAULT` (a required buffer could not be read).
    #[must_use]
    pub const fn deny_efault() -> Self {
        Self(-EFAULT)
    }

    /// `true` if this verdict allows the operation.
    #[must_use]
    pub const fn is_allow(self) -> bool {
        self.0 == 0
    }

    /// Folds this handler's computed verdict `cur` with the verdict a
    /// prior security module already produced for the same hook
    /// invocation, `prev`.
    ///
    /// Stacking law (P4): if `prev` is non-zero (a stronger verdict
    /// from an earlier LSM), it wins unconditionally; otherwise `cur`
    /// is returned. This makes the core stackable behind other
    /// security modules and makes `Verdict::ALLOW` the identity
    /// element for any number of composed modules.
    #[must_use]
    pub const fn fold(prev: Self, cur: Self) -> Self {
        if prev.0 != 0 { prev } else { cur }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_is_zero() {
        assert_eq!(Verdict::ALLOW.0, 0);
        assert!(Verdict::ALLOW.is_allow());
    }

    #[test]
    fn deny_constructors_use_real_errno_values() {
        assert_eq!(Verdict::deny_eperm().0, -1);
        assert_eq!(Verdict::deny_efault().0, -14);
        assert!(!Verdict::deny_eperm().is_allow());
    }

    #[test]
    fn fold_prefers_nonzero_prev() {
        let prev = Verdict(-13); // e.g. -EACCES from an earlier LSM
        assert_eq!(Verdict::fold(prev, Verdict::ALLOW), prev);
        assert_eq!(Verdict::fold(prev, Verdict::deny_eperm()), prev);
    }

    #[test]
    fn fold_uses_cur_when_prev_allows() {
        assert_eq!(Verdict::fold(Verdict::ALLOW, Verdict::deny_eperm()), Verdict::deny_eperm());
        assert_eq!(Verdict::fold(Verdict::ALLOW, Verdict::ALLOW), Verdict::ALLOW);
    }

    #[test]
    fn allow_is_identity_for_fold() {
        for v in [Verdict::ALLOW, Verdict::deny_eperm(), Verdict::deny_efault()] {
            assert_eq!(Verdict::fold(Verdict::ALLOW, v), v);
        }
    }
}
