//! Ordered pattern storage
//!
//! Holds patterns in insertion order together with a lazily built
//! automaton. Any mutation drops the cached automaton; the next query that
//! needs it rebuilds it once.

use std::sync::OnceLock;

use crate::automaton::{scan_first, AutomatonIndex};
use crate::config::FilterConfig;
use crate::error::FilterError;
use crate::types::Pattern;

/// Patterns in insertion order plus the derived automaton.
#[derive(Debug, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
    /// `Some(None)` records a failed build so it is not retried per query.
    index: OnceLock<Option<AutomatonIndex>>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
        self.invalidate();
    }

    pub fn extend<I>(&mut self, patterns: I) -> usize
    where
        I: IntoIterator<Item = Pattern>,
    {
        let before = self.patterns.len();
        self.patterns.extend(patterns);
        let added = self.patterns.len() - before;
        if added > 0 {
            self.invalidate();
        }
        added
    }

    /// Remove every slot equal to `bytes`, keeping the order of the rest.
    pub fn remove_all(&mut self, bytes: &[u8]) -> usize {
        let before = self.patterns.len();
        self.patterns.retain(|pattern| pattern.as_bytes() != bytes);
        let removed = before - self.patterns.len();
        if removed > 0 {
            self.invalidate();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.patterns.clear();
        self.invalidate();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    pub fn as_slice(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn contains(&self, bytes: &[u8]) -> bool {
        self.patterns.iter().any(|pattern| pattern.as_bytes() == bytes)
    }

    /// Whether an automaton is currently cached.
    pub fn has_index(&self) -> bool {
        matches!(self.index.get(), Some(Some(_)))
    }

    /// Insertion index of the earliest pattern contained in `url`.
    pub fn find_first(&self, url: &[u8], config: &FilterConfig) -> Option<usize> {
        if self.patterns.is_empty() {
            return None;
        }

        if config.uses_automaton(self.patterns.len()) {
            if let Some(index) = self.index() {
                return index.find_first(url);
            }
        }

        scan_first(&self.patterns, url)
    }

    fn index(&self) -> Option<&AutomatonIndex> {
        self.index
            .get_or_init(|| usable_index(AutomatonIndex::build(&self.patterns)))
            .as_ref()
    }

    fn invalidate(&mut self) {
        self.index.take();
    }
}

/// A failed build is cached as `None` so queries use the linear scan.
fn usable_index(built: Result<AutomatonIndex, FilterError>) -> Option<AutomatonIndex> {
    match built {
        Ok(index) => Some(index),
        Err(e) => {
            log::warn!("Falling back to linear scan: {}", e);
            None
        }
    }
}
