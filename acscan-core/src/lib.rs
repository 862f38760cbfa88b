// acscan core - Aho-Corasick multi-pattern automaton
//!
// This crate reports which dictionary patterns occur as substrings of a
// text in a single left-to-right scan, independent of dictionary size.
//
// ## Overview
//
// Patterns are inserted into a shared prefix tree, failure links are then
// resolved breadth-first, and the resulting automaton is immutable. Any
// number of threads may match against one compiled automaton.
//
// ## Architecture
//
// ```text
// ┌─────────────────────────────────────────────────┐
// │           Trie Builder                          │
// │  (ids, per-node multiplicity, arena of states)  │
// └──────────────┬──────────────────────────────────┘
//                │
//                v
// ┌─────────────────────────────────────────────────┐
// │         Automaton Compiler                      │
// │  (BFS failure links, consumes the builder)      │
// └──────────────┬──────────────────────────────────┘
//                │
//                v
// ┌─────────────────────────────────────────────────┐
// │         Matcher                                 │
// │  - matches(text) -> Vec<PatternId>             │
// │  - matches_bytes(bytes) -> Vec<PatternId>      │
// │  - match_count(text) -> usize                  │
// │  - is_match(text) -> bool                      │
// └─────────────────────────────────────────────────┘
// ```

mod alphabet;
mod automaton;
mod compiler;
mod dump;
mod matcher;
mod trie;

#[cfg(test)]
mod perf;

pub use alphabet::Alphabet;
pub use automaton::{Automaton, AutomatonStats};
pub use dump::AutomatonDump;
pub use trie::TrieBuilder;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier handed out to each accepted pattern insertion, starting at 0
pub type PatternId = u32;

/// Index of a state in the automaton arena. The root is state 0.
pub(crate) type StateId = u32;

pub(crate) const ROOT: StateId = 0;

/// Errors that can occur while building or matching
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcError {
    #[error("Symbol {symbol:#x} at offset {offset} is outside the {alphabet} alphabet")]
    AlphabetOverflow {
        symbol: u32,
        offset: usize,
        alphabet: Alphabet,
    },

    #[error("Invalid UTF-8 at byte offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("Empty pattern rejected (pattern #{index})")]
    EmptyPattern { index: usize },

    #[error("Pattern too long: {length} symbols (max: {max})")]
    PatternTooLong { length: usize, max: usize },

    #[error("Too many patterns: {count} (max: {max})")]
    TooManyPatterns { count: usize, max: usize },

    #[error("State limit exceeded (max: {max})")]
    StateLimitExceeded { max: usize },
}

/// Result type for automaton operations
pub type AcResult<T> = Result<T, AcError>;

/// What the matcher does with a text symbol outside the alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextPolicy {
    /// Fail the whole call with `AcError::AlphabetOverflow`
    #[default]
    Reject,

    /// Treat the symbol as having no transition and restart from the root
    Skip,
}

/// Configuration for building and matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcConfig {
    /// Symbol domain; decides dense or sparse transition storage
    pub alphabet: Alphabet,

    /// Handling of out-of-alphabet text symbols
    pub text_policy: TextPolicy,

    /// Reject empty patterns at insertion. When disabled, an empty pattern
    /// takes an identifier but can never be reported.
    pub reject_empty_patterns: bool,

    /// Maximum number of patterns (0 = unlimited)
    pub max_patterns: usize,

    /// Maximum pattern length in symbols (0 = unlimited)
    pub max_pattern_length: usize,
}

impl Default for AcConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Byte,
            text_policy: TextPolicy::Reject,
            reject_empty_patterns: true,
            max_patterns: 0,
            max_pattern_length: 0,
        }
    }
}

impl AcConfig {
    /// Default configuration over the given alphabet
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            ..Default::default()
        }
    }
}
