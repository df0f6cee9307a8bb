//! A dense bit set over node indices.
//!
//! Every traversal in the graph engine needs a visited set keyed by node index. Node
//! indices are small, dense integers bounded by the graph's slot count, so a packed bit
//! vector is both smaller and faster than a hash set for this purpose.
//!
//! # Example
//!
//! ```rust
//! use ontograph::utils::BitSet;
//!
//! let mut visited = BitSet::new(100);
//! assert!(visited.insert(7));
//! assert!(!visited.insert(7)); // already present
//!
//! assert!(visited.contains(7));
//! assert!(!visited.contains(500)); // out of range is simply absent
//! ```

/// A fixed-capacity bit set for node indices.
///
/// Unlike a plain `Vec<bool>` this stores 64 indices per word. Queries past the capacity
/// report "absent" instead of panicking, which lets traversals accept stale or foreign
/// node identifiers without extra bounds checks.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitSet {
    words: Vec<u64>,
    capacity: usize,
}

impl BitSet {
    /// Creates an empty bit set able to hold indices `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            capacity,
        }
    }

    /// Returns the number of indices this set can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Inserts `index`, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.capacity()`.
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < self.capacity, "index {index} out of bounds");
        let (word, mask) = Self::locate(index);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    /// Returns `true` if `index` is set. Indices past the capacity are never set.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (word, mask) = Self::locate(index);
        self.words[word] & mask != 0
    }

    /// Returns the number of set indices.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline]
    fn locate(index: usize) -> (usize, u64) {
        (index / 64, 1u64 << (index % 64))
    }
}

impl std::fmt::Debug for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries((0..self.capacity).filter(|&i| self.contains(i)))
            .finish()
    }
}
