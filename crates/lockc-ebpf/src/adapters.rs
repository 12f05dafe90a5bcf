//! Wraps the `aya-ebpf` map statics in the `lockc-core` table traits.
//!
//! `lockc-core` never sees an `aya_ebpf::maps` type directly — only
//! these thin adapters, so the exact same decision logic in
//! `lockc-core` also runs against the `std`-backed mock used by its own
//! test suite.

use aya_ebpf::maps::{Array, HashMap};
use lockc_common::{PathEntry, PATHS_CAP};
use lockc_core::error::TableError;
use lockc_core::tables::{InsertOutcome, KeyedMap, PathTable};

/// Kernel errno for "key already exists", as returned (negated) by
/// `aya_ebpf`'s `HashMap::insert` when the `BPF_NOEXIST` flag collides
/// with an existing key.
const EEXIST: i64 = 17;

/// `BPF_NOEXIST`: insert only if the key is absent. Using this flag
/// makes `insert_if_absent` a genuine compare-and-swap at the kernel
/// map level, not a read-then-write race (spec.md §9: "Inserts must be
/// compare-and-swap on key presence, not blind upsert").
const BPF_NOEXIST: u64 = 1;

/// Adapter from an `aya_ebpf::maps::HashMap` to [`KeyedMap`].
pub struct MapHandle<'a, K, V: 'static>(pub &'a HashMap<K, V>);

impl<K, V> KeyedMap<K, V> for MapHandle<'_, K, V>
where
    K: Copy,
    V: Copy + aya_ebpf::Pod,
{
    fn get(&self, key: K) -> Option<V> {
        unsafe { self.0.get(&key).copied() }
    }

    fn insert_if_absent(&mut self, key: K, value: V) -> Result<InsertOutcome, TableError> {
        match unsafe { self.0.insert(&key, &value, BPF_NOEXIST) } {
            Ok(()) => Ok(InsertOutcome::Inserted),
            Err(errno) if errno == -EEXIST => Ok(InsertOutcome::AlreadyPresent),
            Err(_) => Err(TableError::CapacityExceeded),
        }
    }

    fn remove(&mut self, key: K) {
        let _ = unsafe { self.0.remove(&key) };
    }
}

/// Adapter from an `aya_ebpf::maps::Array<PathEntry>` to [`PathTable`].
pub struct ArrayPathTable<'a>(pub &'a Array<PathEntry>);

impl PathTable for ArrayPathTable<'_> {
    fn capacity(&self) -> u32 {
        PATHS_CAP
    }

    fn slot(&self, slot: u32) -> Option<PathEntry> {
        unsafe { self.0.get(slot).copied() }
    }
}
