use std::sync::Barrier;
use std::thread;

use pf_core::{MatchStrategy, Pattern, PatternFilter};

const WRITERS: usize = 8;
const PATTERNS_PER_WRITER: usize = 50;
const READERS: usize = 8;

fn pattern_for(writer: usize, n: usize) -> String {
    format!("/w{writer}-p{n}/")
}

fn concurrent_adds_then_reads(strategy: MatchStrategy) {
    let filter = PatternFilter::with_strategy(strategy);
    let barrier = Barrier::new(WRITERS);

    thread::scope(|s| {
        for writer in 0..WRITERS {
            let filter = &filter;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                for n in 0..PATTERNS_PER_WRITER {
                    filter.add_pattern(pattern_for(writer, n));
                }
            });
        }
    });

    assert_eq!(filter.len(), WRITERS * PATTERNS_PER_WRITER);

    let mut stored = filter.patterns();
    stored.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
    stored.dedup();
    assert_eq!(stored.len(), WRITERS * PATTERNS_PER_WRITER);

    thread::scope(|s| {
        for _ in 0..READERS {
            let filter = &filter;
            s.spawn(move || {
                for writer in 0..WRITERS {
                    for n in 0..PATTERNS_PER_WRITER {
                        let expected = pattern_for(writer, n);
                        let url = format!("https://host.example{expected}index.html");
                        let result = filter.check_url(&url);
                        assert!(result.blocked, "{url} not blocked");
                        assert_eq!(result.matched_pattern, Some(Pattern::from(expected)));
                    }
                }
                assert!(!filter.is_blocked("https://host.example/clean"));
            });
        }
    });
}

#[test]
fn test_concurrent_adds_naive() {
    concurrent_adds_then_reads(MatchStrategy::Naive);
}

#[test]
fn test_concurrent_adds_automaton() {
    concurrent_adds_then_reads(MatchStrategy::Automaton);
}

#[test]
fn test_concurrent_adds_auto() {
    concurrent_adds_then_reads(MatchStrategy::Auto);
}

#[test]
fn test_reads_interleaved_with_mutations() {
    let filter = PatternFilter::with_strategy(MatchStrategy::Automaton);
    filter.add_pattern("stable");

    thread::scope(|s| {
        let writer = &filter;
        s.spawn(move || {
            for round in 0..200 {
                writer.add_pattern(format!("transient-{round}"));
                if round % 10 == 9 {
                    writer.remove_pattern(format!("transient-{}", round - 1));
                }
            }
        });

        for _ in 0..4 {
            let reader = &filter;
            s.spawn(move || {
                for _ in 0..500 {
                    // "stable" is never removed and always has the lowest index.
                    let result = reader.check_url("http://stable.transient-5.com");
                    assert_eq!(result.matched_pattern, Some(Pattern::from("stable")));
                    assert_eq!(result.pattern_index, Some(0));
                }
            });
        }
    });

    assert!(filter.contains_pattern("transient-199"));
    assert!(!filter.contains_pattern("transient-8"));
}

#[test]
fn test_instances_are_independent() {
    let a = PatternFilter::new();
    let b = PatternFilter::new();
    a.add_pattern("ads.");
    assert!(a.is_blocked("http://ads.example.com"));
    assert!(!b.is_blocked("http://ads.example.com"));
    b.clear();
    assert_eq!(a.len(), 1);
}
