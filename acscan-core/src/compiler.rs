// Automaton Compiler
//
// Resolves failure links level by level. A node's failure target is always
// shallower than the node, so breadth-first order guarantees the target's
// own link is final before it is read.

use crate::trie::Node;
use crate::{AcConfig, Automaton, PatternId, StateId, ROOT};
use std::collections::VecDeque;
use tracing::debug;

/// Freeze a built trie into an automaton
pub(crate) fn compile(
    mut nodes: Vec<Node>,
    pattern_count: PatternId,
    config: AcConfig,
) -> Automaton {
    resolve_failure_links(&mut nodes);

    debug!(
        states = nodes.len(),
        patterns = pattern_count,
        alphabet = %config.alphabet,
        "Compiled automaton"
    );

    Automaton::from_parts(nodes, pattern_count, config)
}

fn resolve_failure_links(nodes: &mut [Node]) {
    let mut queue = VecDeque::new();
    let mut edges = Vec::new();

    nodes[ROOT as usize].failure = ROOT;
    nodes[ROOT as usize].transitions.collect_into(&mut edges);

    // Depth-one states have no proper suffix but the empty one
    for &(_, child) in &edges {
        nodes[child as usize].failure = ROOT;
        queue.push_back(child);
    }

    while let Some(state) = queue.pop_front() {
        edges.clear();
        nodes[state as usize].transitions.collect_into(&mut edges);

        for &(symbol, child) in &edges {
            let target = goto(nodes, nodes[state as usize].failure, symbol);
            nodes[child as usize].failure = target;
            queue.push_back(child);
        }
    }
}

/// Goto function: follow failure links from `from` until some state has an
/// edge on `symbol`, then take it. Lands on the root when none does.
pub(crate) fn goto(nodes: &[Node], from: StateId, symbol: u32) -> StateId {
    let mut state = from;
    loop {
        if let Some(next) = nodes[state as usize].transitions.get(symbol) {
            return next;
        }
        if state == ROOT {
            return ROOT;
        }
        state = nodes[state as usize].failure;
    }
}
