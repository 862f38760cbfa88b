// Compiled automaton
//
// Owns the state arena after failure links are resolved. Nothing here
// mutates a state, so one automaton can be shared across threads.

use crate::trie::Node;
use crate::{AcConfig, AcResult, Alphabet, PatternId, StateId, TrieBuilder};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// An immutable Aho-Corasick automaton
#[derive(Clone)]
pub struct Automaton {
    nodes: Box<[Node]>,
    pattern_count: PatternId,
    config: AcConfig,
}

/// Size summary of a compiled automaton
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomatonStats {
    /// Number of states, including the root
    pub state_count: usize,

    /// Number of goto edges
    pub transition_count: usize,

    /// Number of accepted insertions
    pub pattern_count: usize,

    /// Number of states at which some pattern ends
    pub output_states: usize,

    /// Length of the longest pattern
    pub max_depth: usize,

    /// Alphabet the automaton was built over
    pub alphabet: Alphabet,

    /// Approximate memory usage in bytes
    pub memory_usage: usize,
}

impl Automaton {
    /// Build an automaton from patterns with default configuration
    ///
    /// Identifiers follow the iteration order of `patterns`, starting at 0.
    /// Patterns may be `&str`, `String` or raw bytes.
    pub fn build<I, S>(patterns: I) -> AcResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self::build_with_config(patterns, AcConfig::default())
    }

    /// Build an automaton from patterns with custom configuration
    pub fn build_with_config<I, S>(patterns: I, config: AcConfig) -> AcResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        debug!(alphabet = %config.alphabet, "Building automaton");

        let mut builder = TrieBuilder::with_config(config);
        for pattern in patterns {
            builder.insert_bytes(pattern.as_ref())?;
        }

        Ok(builder.compile())
    }

    /// Create a builder for inserting patterns one at a time
    pub fn builder() -> TrieBuilder {
        TrieBuilder::default()
    }

    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        pattern_count: PatternId,
        config: AcConfig,
    ) -> Self {
        Self {
            nodes: nodes.into_boxed_slice(),
            pattern_count,
            config,
        }
    }

    pub(crate) fn node(&self, id: StateId) -> &Node {
        &self.nodes[id as usize]
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of accepted insertions, duplicates included
    pub fn pattern_count(&self) -> usize {
        self.pattern_count as usize
    }

    /// Number of states, including the root
    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn alphabet(&self) -> Alphabet {
        self.config.alphabet
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AcConfig {
        &self.config
    }

    pub fn stats(&self) -> AutomatonStats {
        let memory_usage = std::mem::size_of_val(&*self.nodes)
            + self
                .nodes
                .iter()
                .map(|node| node.transitions.heap_size())
                .sum::<usize>();

        AutomatonStats {
            state_count: self.nodes.len(),
            transition_count: self
                .nodes
                .iter()
                .map(|node| node.transitions.len())
                .sum(),
            pattern_count: self.pattern_count(),
            output_states: self
                .nodes
                .iter()
                .skip(1)
                .filter(|node| node.is_output())
                .count(),
            max_depth: self
                .nodes
                .iter()
                .map(|node| node.depth as usize)
                .max()
                .unwrap_or(0),
            alphabet: self.config.alphabet,
            memory_usage,
        }
    }
}

impl fmt::Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("states", &self.nodes.len())
            .field("patterns", &self.pattern_count)
            .field("alphabet", &self.config.alphabet)
            .finish()
    }
}
