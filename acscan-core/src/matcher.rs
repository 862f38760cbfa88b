// Matcher - single-pass multi-pattern scan
//
// Walks the text through the compiled automaton and, after every symbol,
// collects outputs along the whole failure chain of the current state.
// Each call owns its scan state, so calls never observe one another.

use crate::alphabet::Symbols;
use crate::compiler::goto;
use crate::trie::Node;
use crate::{AcResult, Automaton, PatternId, TextPolicy, ROOT};
use std::ops::ControlFlow;
use tracing::trace;

impl Automaton {
    /// Report the identifiers of all patterns occurring in `text`
    ///
    /// Each distinct terminal state is reported once per call, in the order
    /// it is first confirmed, with its identifier repeated once per
    /// insertion that ended there. States confirmed at the same position
    /// are reported deepest first.
    pub fn matches(&self, text: &str) -> AcResult<Vec<PatternId>> {
        self.collect_matches(text.as_bytes(), self.alphabet().symbols(text))
    }

    /// [`Automaton::matches`] over raw bytes
    ///
    /// Under the Unicode alphabet, malformed UTF-8 fails the call with
    /// [`crate::AcError::InvalidUtf8`] whatever the text policy.
    pub fn matches_bytes(&self, text: &[u8]) -> AcResult<Vec<PatternId>> {
        self.collect_matches(text, self.alphabet().decode(text)?)
    }

    /// Length of [`Automaton::matches`] without building the vector
    pub fn match_count(&self, text: &str) -> AcResult<usize> {
        self.count_matches(text.as_bytes(), self.alphabet().symbols(text))
    }

    pub fn match_count_bytes(&self, text: &[u8]) -> AcResult<usize> {
        self.count_matches(text, self.alphabet().decode(text)?)
    }

    /// Whether any pattern occurs in `text`; stops at the first one found
    pub fn is_match(&self, text: &str) -> AcResult<bool> {
        self.find_any(text.as_bytes(), self.alphabet().symbols(text))
    }

    pub fn is_match_bytes(&self, text: &[u8]) -> AcResult<bool> {
        self.find_any(text, self.alphabet().decode(text)?)
    }

    fn collect_matches(&self, text: &[u8], symbols: Symbols<'_>) -> AcResult<Vec<PatternId>> {
        let mut found = Vec::new();
        self.scan(text, symbols, |node| {
            found.extend(std::iter::repeat(node.identifier).take(node.multiplicity as usize));
            ControlFlow::Continue(())
        })?;
        Ok(found)
    }

    fn count_matches(&self, text: &[u8], symbols: Symbols<'_>) -> AcResult<usize> {
        let mut count = 0usize;
        self.scan(text, symbols, |node| {
            count += node.multiplicity as usize;
            ControlFlow::Continue(())
        })?;
        Ok(count)
    }

    fn find_any(&self, text: &[u8], symbols: Symbols<'_>) -> AcResult<bool> {
        let mut found = false;
        self.scan(text, symbols, |_| {
            found = true;
            ControlFlow::Break(())
        })?;
        Ok(found)
    }

    /// Drive one scan over the `symbols` of `text`, handing every newly
    /// confirmed terminal state to `on_output`
    fn scan<F>(&self, text: &[u8], symbols: Symbols<'_>, mut on_output: F) -> AcResult<()>
    where
        F: FnMut(&Node) -> ControlFlow<()>,
    {
        let config = self.config();
        let alphabet = config.alphabet;
        if config.text_policy == TextPolicy::Reject {
            alphabet.check_text(text)?;
        }

        let mut reported = vec![false; self.pattern_count()];
        let mut current = ROOT;

        for (offset, symbol) in symbols {
            if !alphabet.contains(symbol) {
                trace!(offset, symbol, "Skipping symbol outside alphabet");
                current = ROOT;
                continue;
            }

            current = goto(self.nodes(), current, symbol);

            // Walk the entire chain: an already reported state can still
            // have unreported states further down its failure chain.
            let mut state = current;
            while state != ROOT {
                let node = self.node(state);
                if node.is_output() {
                    let seen = &mut reported[node.identifier as usize];
                    if !*seen {
                        *seen = true;
                        if on_output(node).is_break() {
                            return Ok(());
                        }
                    }
                }
                state = node.failure;
            }
        }

        Ok(())
    }
}
