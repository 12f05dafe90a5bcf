//! Documented extension point for the (currently unused) `runtimes`
//! table (spec.md §6, §9).
//!
//! The table is populated by the external collaborator — `u32
//! hash(comm) → u32` sentinel — and is readable here, but no handler
//! consults it yet. Preserved as a distinct accessor rather than wired
//! into a handler, per spec.md §9: "leave the enforcement branch as a
//! documented extension point."

use crate::tables::KeyedMap;

/// Looks up whether `comm`'s hash is present in the `runtimes` table.
///
/// Returns the stored sentinel if present. Not called from any
/// handler today; exists so a future "unwrapped runtime" check has a
/// single place to hook into without redefining the table shape.
pub fn lookup_hint<R>(runtimes: &R, comm: &[u8]) -> Option<u32>
where
    R: KeyedMap<u32, u32>,
{
    runtimes.get(lockc_common::hash_comm(comm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockKeyedMap;

    #[test]
    fn absent_hash_returns_none() {
        let runtimes: MockKeyedMap<u32, u32> = MockKeyedMap::new();
        assert_eq!(lookup_hint(&runtimes, b"runc"), None);
    }

    #[test]
    fn present_hash_returns_sentinel() {
        let mut runtimes: MockKeyedMap<u32, u32> = MockKeyedMap::new();
        let key = lockc_common::hash_comm(b"runc");
        runtimes.force_insert(key, 1);
        assert_eq!(lookup_hint(&runtimes, b"runc"), Some(1));
    }
}
