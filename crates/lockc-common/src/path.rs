//! Fixed-width path entries used by the six `paths_*` tables
//! (spec.md §3 "AllowedPath / DeniedPath", §4.4 "Path Matcher").

use crate::limits::PATH_LEN;

/// A NUL-terminated or zero-padded byte string of at most
/// [`PATH_LEN`] bytes, stored as a `paths_*` table value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct PathEntry {
    bytes: [u8; PATH_LEN],
}

impl PathEntry {
    /// An empty entry. Empty entries never match any probe path
    /// (spec.md §4.3.2, §4.4: "empty entries never match").
    pub const EMPTY: Self = Self {
        bytes: [0u8; PATH_LEN],
    };

    /// Builds an entry from a path, truncating (never panicking) at
    /// [`PATH_LEN`] bytes and zero-padding the remainder.
    #[must_use]
    pub fn from_path(path: &[u8]) -> Self {
        let mut bytes = [0u8; PATH_LEN];
        let n = path.len().min(PATH_LEN);
        bytes[..n].copy_from_slice(&path[..n]);
        Self { bytes }
    }

    /// The raw fixed-width buffer.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PATH_LEN] {
        &self.bytes
    }

    /// Effective length: the offset of the first NUL byte, or
    /// [`PATH_LEN`] if the entry fills the whole buffer (spec.md §4.4:
    /// "trailing NULs in E mark its end").
    #[must_use]
    pub fn effective_len(&self) -> usize {
        self.bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(PATH_LEN)
    }

    /// The effective (non-padding) slice of this entry.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.effective_len()]
    }

    /// `true` for an entry with zero effective length — never a valid
    /// match target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effective_len() == 0
    }
}

impl Default for PathEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}

// SAFETY: `#[repr(C)]` single `[u8; PATH_LEN]` field — valid for any bit
// pattern.
#[cfg(feature = "ebpf")]
unsafe impl aya_ebpf::Pod for PathEntry {}
