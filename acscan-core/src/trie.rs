// Trie Builder
//
// Inserts patterns into an arena-backed prefix tree. Every accepted
// insertion takes the next identifier; duplicates share a terminal node and
// raise its multiplicity.

use crate::alphabet::{Symbols, Transitions};
use crate::{AcConfig, AcError, AcResult, Automaton, PatternId, StateId, ROOT};
use tracing::trace;

/// One trie vertex
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Child edges, owned by this node
    pub(crate) transitions: Transitions,

    /// Longest proper suffix state; only meaningful after compilation
    pub(crate) failure: StateId,

    /// Number of accepted insertions ending here
    pub(crate) multiplicity: u32,

    /// Identifier of the latest insertion ending here
    pub(crate) identifier: PatternId,

    /// Distance from the root
    pub(crate) depth: u32,
}

impl Node {
    fn new(transitions: Transitions, depth: u32) -> Self {
        Self {
            transitions,
            failure: ROOT,
            multiplicity: 0,
            identifier: 0,
            depth,
        }
    }

    /// Whether some pattern terminates at this node
    pub(crate) fn is_output(&self) -> bool {
        self.multiplicity > 0
    }
}

/// Mutable build phase of an automaton
///
/// Call [`TrieBuilder::compile`] to resolve failure links; the builder is
/// consumed, so no pattern can be added afterwards.
#[derive(Debug, Clone)]
pub struct TrieBuilder {
    config: AcConfig,
    pub(crate) nodes: Vec<Node>,
    next_id: PatternId,
}

impl TrieBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::with_config(AcConfig::default())
    }

    /// Create a new builder with custom configuration
    pub fn with_config(config: AcConfig) -> Self {
        let root = Node::new(config.alphabet.new_transitions(), 0);
        Self {
            config,
            nodes: vec![root],
            next_id: 0,
        }
    }

    /// Insert one pattern and return its identifier
    ///
    /// On error the trie is left unchanged.
    pub fn insert(&mut self, pattern: &str) -> AcResult<PatternId> {
        let symbols = self.config.alphabet.symbols(pattern);
        self.insert_symbols(symbols, pattern.is_empty())
    }

    /// Insert a raw byte pattern and return its identifier
    ///
    /// The byte and ASCII alphabets take any bytes. The Unicode alphabet
    /// fails with [`AcError::InvalidUtf8`] on malformed input.
    pub fn insert_bytes(&mut self, pattern: &[u8]) -> AcResult<PatternId> {
        let symbols = self.config.alphabet.decode(pattern)?;
        self.insert_symbols(symbols, pattern.is_empty())
    }

    fn insert_symbols(&mut self, symbols: Symbols<'_>, empty: bool) -> AcResult<PatternId> {
        let index = self.next_id as usize;
        self.check(symbols.clone(), empty, index)?;
        let new_states = self.count_new_states(symbols.clone());
        if self.nodes.len() + new_states > StateId::MAX as usize {
            return Err(AcError::StateLimitExceeded {
                max: StateId::MAX as usize,
            });
        }
        Ok(self.insert_unchecked(symbols))
    }

    /// Validate a pattern that would be inserted as pattern number `index`
    fn check(&self, symbols: Symbols<'_>, empty: bool, index: usize) -> AcResult<()> {
        if self.config.max_patterns > 0 && index >= self.config.max_patterns {
            return Err(AcError::TooManyPatterns {
                count: index + 1,
                max: self.config.max_patterns,
            });
        }
        if index >= PatternId::MAX as usize {
            return Err(AcError::TooManyPatterns {
                count: index + 1,
                max: PatternId::MAX as usize,
            });
        }

        if empty && self.config.reject_empty_patterns {
            return Err(AcError::EmptyPattern { index });
        }

        let length = self.config.alphabet.validate(symbols)?;
        if self.config.max_pattern_length > 0 && length > self.config.max_pattern_length {
            return Err(AcError::PatternTooLong {
                length,
                max: self.config.max_pattern_length,
            });
        }

        Ok(())
    }

    /// Number of states inserting `symbols` would create
    fn count_new_states(&self, mut symbols: Symbols<'_>) -> usize {
        let mut current = ROOT;
        while let Some((_, symbol)) = symbols.next() {
            match self.nodes[current as usize].transitions.get(symbol) {
                Some(next) => current = next,
                None => return 1 + symbols.count(),
            }
        }
        0
    }

    /// Walk or extend the trie for an already validated pattern
    fn insert_unchecked(&mut self, symbols: Symbols<'_>) -> PatternId {
        let alphabet = self.config.alphabet;
        let mut current = ROOT;

        for (_, symbol) in symbols {
            current = match self.nodes[current as usize].transitions.get(symbol) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len() as StateId;
                    let depth = self.nodes[current as usize].depth + 1;
                    self.nodes.push(Node::new(alphabet.new_transitions(), depth));
                    self.nodes[current as usize].transitions.insert(symbol, next);
                    next
                }
            };
        }

        let id = self.next_id;
        let terminal = &mut self.nodes[current as usize];
        terminal.multiplicity += 1;
        terminal.identifier = id;
        self.next_id += 1;

        trace!(
            pattern_id = id,
            state = current,
            multiplicity = terminal.multiplicity,
            "Inserted pattern"
        );

        id
    }

    /// Number of accepted insertions so far
    pub fn pattern_count(&self) -> usize {
        self.next_id as usize
    }

    /// Number of states, including the root
    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AcConfig {
        &self.config
    }

    /// Resolve failure links and freeze the trie
    pub fn compile(self) -> Automaton {
        crate::compiler::compile(self.nodes, self.next_id, self.config)
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}
