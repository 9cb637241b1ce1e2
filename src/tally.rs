//! Enumeration-indexed counters.
//!
//! Every associative piece of machine state (inventory, treasury,
//! inserted coins, both trays) is a [`Tally`]: a fixed-size array of
//! counts indexed by a closed enum.  Reads of a key that was never
//! written return zero, so there is no "missing key" path anywhere.

use core::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Largest key set a [`Tally`] can index.
pub const MAX_SLOTS: usize = 4;

/// A closed enum usable as a [`Tally`] key.
pub trait Slot: Copy + Eq + fmt::Debug + 'static {
    /// Every variant, in enumeration order.
    const ALL: &'static [Self];

    /// Dense index of this variant (`0..ALL.len()`).
    fn index(self) -> usize;

    /// Lower-case name used as the serialised map key.
    fn name(self) -> &'static str;
}

/// Count per key, defaulting to zero.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tally<K: Slot> {
    counts: [u32; MAX_SLOTS],
    _key: core::marker::PhantomData<K>,
}

impl<K: Slot> Tally<K> {
    /// An all-zero tally.
    pub fn new() -> Self {
        debug_assert!(K::ALL.len() <= MAX_SLOTS, "key set too large for Tally");
        Self {
            counts: [0; MAX_SLOTS],
            _key: core::marker::PhantomData,
        }
    }

    /// Build from `(key, count)` pairs; later pairs for the same key add up.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (K, u32)>) -> Self {
        let mut tally = Self::new();
        for (key, count) in pairs {
            tally.add(key, count);
        }
        tally
    }

    pub fn get(&self, key: K) -> u32 {
        self.counts[key.index()]
    }

    pub fn set(&mut self, key: K, count: u32) {
        self.counts[key.index()] = count;
    }

    pub fn add(&mut self, key: K, count: u32) {
        let slot = &mut self.counts[key.index()];
        *slot = slot.saturating_add(count);
    }

    /// Subtract `count` from `key`.
    ///
    /// Callers check availability first; underflow is a logic error and
    /// clamps to zero in release builds.
    pub fn remove(&mut self, key: K, count: u32) {
        let slot = &mut self.counts[key.index()];
        debug_assert!(*slot >= count, "{key:?}: removing {count} from {slot}");
        *slot = slot.saturating_sub(count);
    }

    /// Add every count of `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        for (key, count) in other.iter() {
            self.add(key, count);
        }
    }

    /// Subtract every count of `other` from `self`.
    pub fn withdraw(&mut self, other: &Self) {
        for (key, count) in other.iter() {
            self.remove(key, count);
        }
    }

    /// Take the contents, leaving an empty tally behind.
    pub fn drain(&mut self) -> Self {
        core::mem::take(self)
    }

    pub fn clear(&mut self) {
        self.counts = [0; MAX_SLOTS];
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Every key with its count (zeros included), in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (K, u32)> + '_ {
        K::ALL.iter().map(move |&k| (k, self.get(k)))
    }

    /// Only the keys with a non-zero count.
    pub fn non_zero(&self) -> impl Iterator<Item = (K, u32)> + '_ {
        self.iter().filter(|&(_, c)| c > 0)
    }
}

impl<K: Slot> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Slot> fmt::Debug for Tally<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Slot> fmt::Display for Tally<K> {
    /// `nickel=2 dime=1`, or `empty`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, count) in self.non_zero() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}={count}", key.name())?;
            first = false;
        }
        if first {
            write!(f, "empty")?;
        }
        Ok(())
    }
}

impl<K: Slot> Serialize for Tally<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(K::ALL.len()))?;
        for (key, count) in self.iter() {
            map.serialize_entry(key.name(), &count)?;
        }
        map.end()
    }
}
