//! Every strategy must report the same pattern for the same input.

use pf_core::{FilterConfig, MatchStrategy, PatternFilter};

/// xorshift32, deterministic across runs.
struct Rng(u32);

impl Rng {
    fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    fn below(&mut self, n: u32) -> u32 {
        self.next() % n
    }

    /// Short string over a small alphabet so that overlaps are frequent.
    fn word(&mut self, max_len: u32) -> String {
        const ALPHABET: &[u8] = b"ab./c";
        let len = self.below(max_len + 1);
        (0..len)
            .map(|_| ALPHABET[self.below(ALPHABET.len() as u32) as usize] as char)
            .collect()
    }
}

fn filters() -> Vec<PatternFilter> {
    vec![
        PatternFilter::with_strategy(MatchStrategy::Naive),
        PatternFilter::with_strategy(MatchStrategy::Automaton),
        PatternFilter::with_config(FilterConfig::default().with_automaton_threshold(5)).unwrap(),
    ]
}

#[test]
fn test_strategies_agree_on_random_sets() {
    let mut rng = Rng(0x9E37_79B9);

    for _ in 0..50 {
        let filters = filters();
        let pattern_count = rng.below(12);
        for _ in 0..pattern_count {
            // Mostly non-empty; the empty pattern shows up occasionally.
            let pattern = rng.word(4);
            for filter in &filters {
                filter.add_pattern(pattern.as_str());
            }
        }

        for _ in 0..40 {
            let url = rng.word(16);
            let expected = filters[0].check_url(&url);
            for filter in &filters[1..] {
                assert_eq!(filter.check_url(&url), expected, "url {url:?}");
            }
        }
    }
}

#[test]
fn test_blocked_iff_some_pattern_contained() {
    let mut rng = Rng(0xDEAD_BEEF);
    let filter = PatternFilter::with_strategy(MatchStrategy::Automaton);
    let mut patterns = Vec::new();
    for _ in 0..20 {
        let pattern = rng.word(3);
        if pattern.is_empty() {
            continue;
        }
        filter.add_pattern(pattern.as_str());
        patterns.push(pattern);
    }

    for _ in 0..200 {
        let url = rng.word(12);
        let expected_index = patterns.iter().position(|p| url.contains(p.as_str()));
        let result = filter.check_url(&url);
        assert_eq!(result.blocked, expected_index.is_some(), "url {url:?}");
        assert_eq!(result.pattern_index, expected_index, "url {url:?}");
    }
}

#[test]
fn test_scenarios() {
    for filter in filters() {
        assert!(!filter.check_url("http://example.com").blocked);

        filter.add_pattern("track");
        filter.add_pattern("ads.");
        let result = filter.check_url("http://ads.tracker.com");
        assert!(result.blocked);
        assert_eq!(result.matched_pattern.unwrap(), "track");

        filter.clear();
        filter.add_pattern("x");
        filter.clear();
        assert!(!filter.check_url("xyz").blocked);

        filter.add_pattern("");
        let result = filter.check_url("anything");
        assert!(result.blocked);
        assert_eq!(result.matched_pattern.unwrap(), "");
    }
}
