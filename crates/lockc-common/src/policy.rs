//! The tagged policy tier (spec.md §3, "PolicyLevel").

/// A container's enforcement tier.
///
/// Stored as the single byte payload of the `containers` map's value.
/// Never mutated from within the kernel-side core (spec.md §3) — only
/// the external collaborator assigns or changes a container's tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PolicyLevel {
    /// Strictest tier: syslog denied, bind mounts and file opens
    /// checked against allow/deny path tables, uid-0 transitions
    /// denied for non-root processes.
    Restricted = 0,
    /// Same enforcement shape as `Restricted` but against a separate,
    /// typically more permissive, set of path tables.
    Baseline = 1,
    /// Effectively pass-through: every hook allows unconditionally.
    Privileged = 2,
}

impl PolicyLevel {
    /// Decodes a raw tier byte as stored in a container's map value.
    ///
    /// Returns `None` for any value other than 0/1/2 — callers treat
    /// an undecodable tier as `LOOKUP_ERR` (spec.md §3: "inconsistent
    /// state ⇒ fail closed"), never as a silent default.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Restricted),
            1 => Some(Self::Baseline),
            2 => Some(Self::Privileged),
            _ => None,
        }
    }

    /// Encodes the tier back to its wire byte.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }
}
