//! Core type definitions for PatternFilter
//!
//! Patterns are opaque byte strings. They are usually UTF-8 text, but the
//! engine never relies on that.

use std::fmt;
use std::sync::Arc;

use memchr::memmem;

use crate::error::FilterError;

// =============================================================================
// Pattern
// =============================================================================

/// A literal substring registered as a block trigger.
///
/// Stored verbatim and shared, so cloning is cheap.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Arc<[u8]>);

impl Pattern {
    /// Create a pattern from raw bytes.
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self(Arc::from(bytes.as_ref()))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// View the pattern as UTF-8 text.
    pub fn to_str(&self) -> Result<&str, FilterError> {
        std::str::from_utf8(&self.0).map_err(|_| FilterError::NonUtf8Pattern)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The empty pattern is contained in every URL.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `haystack` contains this pattern as a contiguous substring.
    pub fn is_contained_in(&self, haystack: &[u8]) -> bool {
        let needle = self.as_bytes();
        if needle.is_empty() {
            return true;
        }
        memmem::find(haystack, needle).is_some()
    }
}

impl AsRef<[u8]> for Pattern {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Self(Arc::from(value.into_bytes()))
    }
}

impl From<&String> for Pattern {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}

impl From<&[u8]> for Pattern {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for Pattern {
    fn from(value: Vec<u8>) -> Self {
        Self(Arc::from(value))
    }
}

impl PartialEq<str> for Pattern {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for Pattern {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({:?})", String::from_utf8_lossy(&self.0))
    }
}

// =============================================================================
// Match Result
// =============================================================================

/// Result of classifying a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Whether the URL contains a registered pattern
    pub blocked: bool,
    /// The earliest registered pattern found in the URL, set iff `blocked`
    pub matched_pattern: Option<Pattern>,
    /// Insertion index of `matched_pattern` at query time
    pub pattern_index: Option<usize>,
}

impl MatchResult {
    /// A result for a URL that matched nothing.
    pub fn allowed() -> Self {
        Self::default()
    }

    pub(crate) fn blocked_by(index: usize, pattern: Pattern) -> Self {
        Self {
            blocked: true,
            matched_pattern: Some(pattern),
            pattern_index: Some(index),
        }
    }

    /// Human-readable explanation for a block.
    pub fn reason(&self) -> Option<String> {
        self.matched_pattern
            .as_ref()
            .map(|pattern| format!("Matched block pattern \"{}\"", pattern))
    }
}
