//! Host-only mock table implementations used by this crate's own test
//! suite. Not exported — downstream crates bring their own backend
//! (`lockc-ebpf` wraps real `aya-ebpf` maps).

use std::collections::HashMap;
use std::hash::Hash;

use lockc_common::{PathEntry, PATHS_CAP};

use crate::error::TableError;
use crate::tables::{InsertOutcome, KeyedMap, PathTable};

/// An unbounded `std::collections::HashMap`-backed [`KeyedMap`] with an
/// optional capacity, for exercising I3 (capacity overflow) paths.
pub(crate) struct MockKeyedMap<K, V> {
    inner: HashMap<K, V>,
    capacity: Option<usize>,
}

impl<K: Eq + Hash, V> MockKeyedMap<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            inner: HashMap::new(),
            capacity: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashMap::new(),
            capacity: Some(capacity),
        }
    }

    /// Inserts unconditionally, bypassing CAS semantics — used only to
    /// set up test fixtures, not exercised by the code under test.
    pub(crate) fn force_insert(&mut self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K: Eq + Hash + Copy, V: Copy> KeyedMap<K, V> for MockKeyedMap<K, V> {
    fn get(&self, key: K) -> Option<V> {
        self.inner.get(&key).copied()
    }

    fn insert_if_absent(&mut self, key: K, value: V) -> Result<InsertOutcome, TableError> {
        if self.inner.contains_key(&key) {
            return Ok(InsertOutcome::AlreadyPresent);
        }
        if let Some(cap) = self.capacity {
            if self.inner.len() >= cap {
                return Err(TableError::CapacityExceeded);
            }
        }
        self.inner.insert(key, value);
        Ok(InsertOutcome::Inserted)
    }

    fn remove(&mut self, key: K) {
        self.inner.remove(&key);
    }
}

/// A `Vec`-backed [`PathTable`] mock with the real `PATHS_CAP` by
/// default.
pub(crate) struct MockPathTable {
    slots: Vec<PathEntry>,
}

impl MockPathTable {
    pub(crate) fn new() -> Self {
        Self {
            slots: vec![PathEntry::EMPTY; PATHS_CAP as usize],
        }
    }

    pub(crate) fn set(&mut self, slot: u32, entry: PathEntry) {
        self.slots[slot as usize] = entry;
    }
}

impl PathTable for MockPathTable {
    fn capacity(&self) -> u32 {
        self.slots.len() as u32
    }

    fn slot(&self, slot: u32) -> Option<PathEntry> {
        self.slots.get(slot as usize).copied()
    }
}
