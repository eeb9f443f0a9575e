//! Engine configuration.

use crate::error::FilterError;

/// Pattern count at which `MatchStrategy::Auto` switches to the automaton.
pub const DEFAULT_AUTOMATON_THRESHOLD: usize = 16;

/// How a query walks the pattern set.
///
/// Every strategy reports the same pattern for the same input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchStrategy {
    /// Linear scan below the threshold, automaton at or above it
    #[default]
    Auto,
    /// Linear scan in insertion order
    Naive,
    /// Aho-Corasick automaton regardless of set size
    Automaton,
}

impl MatchStrategy {
    /// Parse from a strategy name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto" => Some(Self::Auto),
            "naive" | "scan" => Some(Self::Naive),
            "automaton" | "aho-corasick" => Some(Self::Automaton),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Naive => "naive",
            Self::Automaton => "automaton",
        }
    }
}

/// Configuration for a `PatternFilter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    pub strategy: MatchStrategy,
    /// Only consulted by `MatchStrategy::Auto`
    pub automaton_threshold: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::Auto,
            automaton_threshold: DEFAULT_AUTOMATON_THRESHOLD,
        }
    }
}

impl FilterConfig {
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_automaton_threshold(mut self, threshold: usize) -> Self {
        self.automaton_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.automaton_threshold == 0 {
            return Err(FilterError::InvalidConfig(
                "automaton_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a set of `pattern_count` patterns should be matched with the automaton.
    #[inline]
    pub fn uses_automaton(&self, pattern_count: usize) -> bool {
        match self.strategy {
            MatchStrategy::Naive => false,
            MatchStrategy::Automaton => true,
            MatchStrategy::Auto => pattern_count >= self.automaton_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.strategy, MatchStrategy::Auto);
        assert_eq!(config.automaton_threshold, DEFAULT_AUTOMATON_THRESHOLD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = FilterConfig::default().with_automaton_threshold(0);
        assert!(matches!(config.validate(), Err(FilterError::InvalidConfig(_))));
    }

    #[test]
    fn test_uses_automaton() {
        let auto = FilterConfig::default().with_automaton_threshold(4);
        assert!(!auto.uses_automaton(3));
        assert!(auto.uses_automaton(4));

        let naive = auto.with_strategy(MatchStrategy::Naive);
        assert!(!naive.uses_automaton(10_000));

        let automaton = auto.with_strategy(MatchStrategy::Automaton);
        assert!(automaton.uses_automaton(0));
    }

    #[test]
    fn test_strategy_names() {
        for strategy in [MatchStrategy::Auto, MatchStrategy::Naive, MatchStrategy::Automaton] {
            assert_eq!(MatchStrategy::from_name(strategy.name()), Some(strategy));
        }
        assert_eq!(MatchStrategy::from_name("regex"), None);
    }
}
