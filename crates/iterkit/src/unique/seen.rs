//! The classifier's memory: a hashed store plus a linear-scan store.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash, Hasher};

/// Marker returned when a value refuses to be hashed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unhashable;

/// Equality plus a hash attempt that may fail at runtime.
///
/// A failing attempt may have written partial state into `state`; callers
/// must discard that hasher.
pub trait TryHash: PartialEq {
    fn try_hash<H: Hasher>(&self, state: &mut H) -> Result<(), Unhashable>;
}

impl<T: Hash + Eq> TryHash for T {
    #[inline]
    fn try_hash<H: Hasher>(&self, state: &mut H) -> Result<(), Unhashable> {
        self.hash(state);
        Ok(())
    }
}

/// Sizing knobs for [`Seen`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SeenCfg {
    /// Expected number of distinct hashable keys.
    pub capacity: usize,
}

/// Which store a key belongs to, decided per key.
enum Route {
    Hashed(u64),
    Scanned,
}

/// Set of previously observed keys.
///
/// Hashable keys live in buckets keyed by their hash (equality resolves
/// collisions). Keys whose hash attempt fails are kept in insertion order and
/// compared one by one. Memory grows with every distinct key and is never
/// released while the `Seen` lives.
#[derive(Debug)]
pub struct Seen<K> {
    hasher: RandomState,
    hashed: HashMap<u64, Vec<K>>,
    hashed_len: usize,
    scanned: Vec<K>,
}

impl<K: TryHash> Default for Seen<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: TryHash> Seen<K> {
    pub fn new() -> Self {
        Self::with_cfg(SeenCfg::default())
    }

    pub fn with_cfg(cfg: SeenCfg) -> Self {
        Self {
            hasher: RandomState::new(),
            hashed: HashMap::with_capacity(cfg.capacity),
            hashed_len: 0,
            scanned: Vec::new(),
        }
    }

    fn route(&self, key: &K) -> Route {
        let mut state = self.hasher.build_hasher();
        match key.try_hash(&mut state) {
            Ok(()) => Route::Hashed(state.finish()),
            Err(Unhashable) => Route::Scanned,
        }
    }

    fn in_hashed(&self, hash: u64, key: &K) -> bool {
        self.hashed.get(&hash).is_some_and(|bucket| bucket.contains(key))
    }

    fn in_any_bucket(&self, key: &K) -> bool {
        self.hashed.values().flatten().any(|k| k == key)
    }

    /// True if an equal key was recorded before, in either store.
    pub fn contains(&self, key: &K) -> bool {
        match self.route(key) {
            Route::Hashed(h) => self.in_hashed(h, key) || self.scanned.contains(key),
            Route::Scanned => self.scanned.contains(key) || self.in_any_bucket(key),
        }
    }

    /// Record `key`; returns true if it is the first occurrence.
    ///
    /// The store a new key goes into depends only on whether this key hashes.
    pub fn insert(&mut self, key: K) -> bool {
        match self.route(&key) {
            Route::Hashed(h) => {
                if self.in_hashed(h, &key) || self.scanned.contains(&key) {
                    return false;
                }
                self.hashed.entry(h).or_default().push(key);
                self.hashed_len += 1;
                true
            }
            Route::Scanned => {
                tracing::trace!(scanned = self.scanned.len(), "unhashable key, linear scan");
                if self.scanned.contains(&key) || self.in_any_bucket(&key) {
                    return false;
                }
                self.scanned.push(key);
                true
            }
        }
    }
}

impl<K> Seen<K> {
    /// Distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.hashed_len + self.scanned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hashed_len(&self) -> usize {
        self.hashed_len
    }

    pub fn scanned_len(&self) -> usize {
        self.scanned.len()
    }
}
