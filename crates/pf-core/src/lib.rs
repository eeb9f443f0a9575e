//! PatternFilter Core Library
//!
//! This crate provides a substring matching engine for URL filtering. Callers
//! register literal block patterns and classify URLs as blocked or allowed.
//!
//! # Architecture
//!
//! Patterns are kept in insertion order behind a reader/writer lock. Small
//! sets are scanned linearly; larger sets are matched with an Aho-Corasick
//! automaton that is built on the first query after a mutation and cached
//! until the next one. Both paths report the same pattern: the earliest
//! registered one contained in the URL.
//!
//! No normalization is performed. Matching is case-sensitive and byte-exact.
//!
//! # Modules
//!
//! - `types`: `Pattern` and `MatchResult`
//! - `config`: Matching strategy and engine configuration
//! - `error`: Error type shared with boundary layers
//! - `automaton`: Multi-pattern index with lowest-index tie-breaking
//! - `pattern_set`: Ordered pattern storage and query dispatch
//! - `filter`: The thread-safe `PatternFilter`

pub mod automaton;
pub mod config;
pub mod error;
pub mod filter;
pub mod pattern_set;
pub mod types;

// Re-export commonly used types
pub use config::{FilterConfig, MatchStrategy, DEFAULT_AUTOMATON_THRESHOLD};
pub use error::FilterError;
pub use filter::PatternFilter;
pub use types::{MatchResult, Pattern};
