//! Bounded least-recently-used cache of solver results.

use std::collections::HashMap;

use crate::board::Board;
use crate::search::{SearchResult, Strategy};

pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Percentage of lookups that hit; 0 before any lookup.
    pub hit_rate: f64,
    pub len: usize,
}

#[derive(Debug)]
pub struct SolverCache {
    capacity: usize,
    entries: HashMap<(Board, Strategy), Entry>,
    tick: u64,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
struct Entry {
    result: SearchResult,
    last_used: u64,
}

impl Default for SolverCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SolverCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::with_capacity(capacity),
            tick: 0,
            hits: 0,
            misses: 0,
        }
    }

    pub fn get(&mut self, board: &Board, strategy: Strategy) -> Option<&SearchResult> {
        self.tick += 1;
        match self.entries.get_mut(&(board.clone(), strategy)) {
            Some(entry) => {
                self.hits += 1;
                entry.last_used = self.tick;
                Some(&entry.result)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, board: Board, strategy: Strategy, result: SearchResult) {
        self.tick += 1;
        let key = (board, strategy);
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.entries.insert(
            key,
            Entry {
                result,
                last_used: self.tick,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.tick = 0;
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        let total = self.hits + self.misses;
        let hit_rate = if total > 0 {
            self.hits as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            hit_rate,
            len: self.entries.len(),
        }
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}
