//! Error type for the PatternFilter engine.
//!
//! Queries never fail. These variants cover boundary validation, pattern
//! decoding, configuration and automaton construction.

/// Error type for the filter engine and its adapters.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// A boundary layer received a value of the wrong type.
    #[error("{0}")]
    InvalidArgument(&'static str),
    #[error("Pattern is not valid UTF-8")]
    NonUtf8Pattern,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to build automaton: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
}
