//! Key derivation for the `runtimes` table (spec.md §3/§9).
//!
//! The `runtimes` table is populated and readable but consulted by no
//! handler today — it is a documented extension point for future
//! "unwrapped runtime" detection (spec.md §9). Its key is a hash of a
//! process's `comm` (the short task name, e.g. `"runc"`, `"containerd-shim"`).

/// Naive additive hash of a `comm` string, truncated at the first NUL
/// (or at `comm.len()` if there is none).
///
/// Adequate for the 16-entry `runtimes` table and nothing more —
/// deliberately not collision-resistant. Preserved as specified
/// (spec.md §9: "note and preserve, do not silently upgrade").
#[must_use]
pub fn hash_comm(comm: &[u8]) -> u32 {
    let len = comm.iter().position(|&b| b == 0).unwrap_or(comm.len());
    let mut acc: u32 = 0;
    for &b in &comm[..len] {
        acc = acc.wrapping_add(u32::from(b));
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_hashes_to_zero() {
        assert_eq!(hash_comm(b""), 0);
    }

    #[test]
    fn stops_at_first_nul() {
        let with_nul: [u8; 6] = [b'r', b'u', b'n', b'c', 0, b'X'];
        assert_eq!(hash_comm(&with_nul), hash_comm(b"runc"));
    }

    #[test]
    fn is_order_sensitive_sum() {
        // Naive additive sum: anagram collisions are expected, not a bug.
        assert_eq!(hash_comm(b"ab"), hash_comm(b"ba"));
    }

    #[test]
    fn matches_manual_sum() {
        assert_eq!(hash_comm(b"runc"), 'r' as u32 + 'u' as u32 + 'n' as u32 + 'c' as u32);
    }
}
