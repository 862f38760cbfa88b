// Diagnostic dump of a compiled automaton
//
// Lists states depth-first with an explicit stack, so deep tries cannot
// exhaust the call stack.

use crate::{Automaton, StateId, ROOT};
use std::fmt;

/// Printable view of an automaton's states
///
/// One line per state, indented by depth:
///
/// ```text
/// state 0 (root)
///   'h' -> state 1, fail 0
///     'e' -> state 2, fail 0, out #1 x1
/// ```
pub struct AutomatonDump<'a> {
    automaton: &'a Automaton,
}

impl Automaton {
    pub fn dump(&self) -> AutomatonDump<'_> {
        AutomatonDump { automaton: self }
    }
}

impl fmt::Display for AutomatonDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let automaton = self.automaton;
        let alphabet = automaton.alphabet();

        writeln!(f, "state {} (root)", ROOT)?;

        // (symbol, state) pairs still to print
        let mut stack: Vec<(u32, StateId)> = Vec::new();
        let mut edges = Vec::new();

        automaton.node(ROOT).transitions.collect_into(&mut edges);
        stack.extend(edges.drain(..).rev());

        while let Some((symbol, state)) = stack.pop() {
            let node = automaton.node(state);
            write!(
                f,
                "{:indent$}{} -> state {}, fail {}",
                "",
                alphabet.display_symbol(symbol),
                state,
                node.failure,
                indent = node.depth as usize * 2
            )?;
            if node.is_output() {
                write!(f, ", out #{} x{}", node.identifier, node.multiplicity)?;
            }
            writeln!(f)?;

            node.transitions.collect_into(&mut edges);
            stack.extend(edges.drain(..).rev());
        }

        Ok(())
    }
}
