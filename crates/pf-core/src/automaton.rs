//! Multi-pattern index
//!
//! Wraps an Aho-Corasick automaton so that a single pass over the URL finds
//! the lowest insertion index among all contained patterns.

use std::collections::HashSet;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::FilterError;
use crate::types::Pattern;

/// Automaton over the distinct non-empty patterns of a set.
///
/// Duplicate patterns collapse onto their earliest slot, and the empty
/// pattern is tracked separately since it matches at every position.
#[derive(Debug)]
pub struct AutomatonIndex {
    ac: Option<AhoCorasick>,
    /// Automaton pattern id -> insertion index
    slots: Vec<usize>,
    empty_slot: Option<usize>,
}

impl AutomatonIndex {
    /// Build an index over `patterns`, indexed by their position in the slice.
    pub fn build(patterns: &[Pattern]) -> Result<Self, FilterError> {
        let mut seen: HashSet<&[u8]> = HashSet::with_capacity(patterns.len());
        let mut unique: Vec<&[u8]> = Vec::with_capacity(patterns.len());
        let mut slots = Vec::with_capacity(patterns.len());
        let mut empty_slot = None;

        for (idx, pattern) in patterns.iter().enumerate() {
            let bytes = pattern.as_bytes();
            if bytes.is_empty() {
                empty_slot.get_or_insert(idx);
                continue;
            }
            if seen.insert(bytes) {
                unique.push(bytes);
                slots.push(idx);
            }
        }

        let ac = if unique.is_empty() {
            None
        } else {
            // Standard semantics are required for overlapping iteration.
            Some(
                AhoCorasick::builder()
                    .match_kind(MatchKind::Standard)
                    .build(&unique)?,
            )
        };

        log::debug!(
            "built automaton: {} slots, {} distinct patterns, empty pattern: {}",
            patterns.len(),
            unique.len(),
            empty_slot.is_some()
        );

        Ok(Self { ac, slots, empty_slot })
    }

    /// Lowest insertion index of a pattern contained in `haystack`.
    pub fn find_first(&self, haystack: &[u8]) -> Option<usize> {
        let mut best = self.empty_slot;
        if best == Some(0) {
            return best;
        }

        let Some(ac) = &self.ac else {
            return best;
        };

        for m in ac.find_overlapping_iter(haystack) {
            let slot = self.slots[m.pattern().as_usize()];
            if best.map_or(true, |b| slot < b) {
                best = Some(slot);
                if slot == 0 {
                    break;
                }
            }
        }

        best
    }

    /// Number of distinct non-empty patterns in the automaton.
    pub fn distinct_patterns(&self) -> usize {
        self.slots.len()
    }
}

/// Linear scan in insertion order, stopping at the first contained pattern.
pub fn scan_first(patterns: &[Pattern], haystack: &[u8]) -> Option<usize> {
    patterns
        .iter()
        .position(|pattern| pattern.is_contained_in(haystack))
}
