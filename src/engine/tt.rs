//! Transposition Table
//!
//! A hash table that stores previously searched positions to avoid
//! redundant work. An entry answers a probe only when it was searched
//! at least as deep as the probe asks for.

use crate::core::moves::Move;

/// A single entry in the transposition table
#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    /// Zobrist hash key (for verification)
    pub key: u64,
    /// Depth the position was searched to
    pub depth: u8,
    /// Score from the root side's point of view
    pub score: i32,
    /// Best move found, if the node produced one
    pub best: Option<Move>,
}

const DEFAULT_CAPACITY: usize = 1 << 20;

/// Transposition table
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    size: usize,
}

impl TranspositionTable {
    /// Create a table with at least `capacity` slots, rounded up to a
    /// power of two for mask indexing.
    pub fn new(capacity: usize) -> Self {
        let size = capacity.next_power_of_two().max(2);
        TranspositionTable {
            entries: vec![None; size],
            size,
        }
    }

    /// Get the index for a hash key
    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & (self.size - 1)
    }

    /// Probe the table. Hits require the full key to match and the
    /// stored depth to be at least `depth`; a shallower entry is not
    /// good enough to answer for a deeper search.
    pub fn probe(&self, key: u64, depth: u8) -> Option<&TTEntry> {
        self.entries[self.index(key)]
            .as_ref()
            .filter(|entry| entry.key == key && entry.depth >= depth)
    }

    /// Store an entry, unconditionally replacing whatever occupied
    /// the slot.
    pub fn store(&mut self, key: u64, depth: u8, score: i32, best: Option<Move>) {
        let idx = self.index(key);
        self.entries[idx] = Some(TTEntry {
            key,
            depth,
            score,
            best,
        });
    }

    /// Clear the table
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
