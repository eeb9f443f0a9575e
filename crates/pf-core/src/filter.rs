//! Thread-safe URL filter
//!
//! This is the hot path: every URL a caller wants classified goes through
//! `check_url`. Queries share a read lock and run in parallel; mutations take
//! the write lock and are therefore totally ordered and never observed
//! half-applied.

use parking_lot::RwLock;

use crate::config::{FilterConfig, MatchStrategy};
use crate::error::FilterError;
use crate::pattern_set::PatternSet;
use crate::types::{MatchResult, Pattern};

// =============================================================================
// PatternFilter
// =============================================================================

/// A mutable set of block patterns and a substring membership test.
///
/// Every instance is independent; there is no process-wide state.
#[derive(Debug, Default)]
pub struct PatternFilter {
    config: FilterConfig,
    set: RwLock<PatternSet>,
}

impl PatternFilter {
    /// Create an empty filter with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty filter with a validated configuration.
    pub fn with_config(config: FilterConfig) -> Result<Self, FilterError> {
        config.validate()?;
        Ok(Self {
            config,
            set: RwLock::new(PatternSet::new()),
        })
    }

    /// Create an empty filter that always uses `strategy`.
    pub fn with_strategy(strategy: MatchStrategy) -> Self {
        Self {
            config: FilterConfig::default().with_strategy(strategy),
            set: RwLock::new(PatternSet::new()),
        }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.config.strategy
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Append a pattern. Queries issued after this returns will see it.
    ///
    /// Any byte sequence is accepted. The empty pattern blocks every URL.
    pub fn add_pattern(&self, pattern: impl Into<Pattern>) {
        let pattern = pattern.into();
        if pattern.is_empty() {
            log::warn!("Empty pattern registered; every URL will be blocked");
        }
        let mut set = self.set.write();
        set.push(pattern);
        log::trace!("pattern added, {} total", set.len());
    }

    /// Append several patterns in iterator order as a single mutation.
    pub fn add_patterns<I, P>(&self, patterns: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        let patterns: Vec<Pattern> = patterns.into_iter().map(Into::into).collect();
        if patterns.iter().any(Pattern::is_empty) {
            log::warn!("Empty pattern registered; every URL will be blocked");
        }
        let mut set = self.set.write();
        let added = set.extend(patterns);
        log::debug!("{} patterns added, {} total", added, set.len());
    }

    /// Remove every slot equal to `pattern`. Returns how many were removed.
    pub fn remove_pattern(&self, pattern: impl AsRef<[u8]>) -> usize {
        let mut set = self.set.write();
        let removed = set.remove_all(pattern.as_ref());
        log::debug!("{} patterns removed, {} remaining", removed, set.len());
        removed
    }

    /// Remove all patterns.
    pub fn clear(&self) {
        let mut set = self.set.write();
        let cleared = set.len();
        set.clear();
        log::debug!("cleared {} patterns", cleared);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Classify a URL.
    ///
    /// Blocked iff some registered pattern occurs in `url` as a contiguous,
    /// case-sensitive substring. When several match, the one registered
    /// first is reported. `url` is not parsed or normalized.
    pub fn check_url(&self, url: impl AsRef<[u8]>) -> MatchResult {
        let set = self.set.read();
        set.find_first(url.as_ref(), &self.config)
            .and_then(|index| {
                set.get(index)
                    .map(|pattern| MatchResult::blocked_by(index, pattern.clone()))
            })
            .unwrap_or_default()
    }

    #[inline]
    pub fn is_blocked(&self, url: impl AsRef<[u8]>) -> bool {
        self.check_url(url).blocked
    }

    pub fn len(&self) -> usize {
        self.set.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.read().is_empty()
    }

    /// Copy of the current patterns in insertion order.
    pub fn patterns(&self) -> Vec<Pattern> {
        self.set.read().as_slice().to_vec()
    }

    pub fn contains_pattern(&self, pattern: impl AsRef<[u8]>) -> bool {
        self.set.read().contains(pattern.as_ref())
    }
}
