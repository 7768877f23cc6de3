/*!
A record of how each clause of a refutation was obtained.

The record is a graph with a node for each clause, and a distinguished node for the input formula:
- Each clause of the input has a single edge from the input node.
- Each resolvent has an edge from each of the two clauses it was resolved from, weighted by the round in which the resolvent was found.

Following edges backwards from some clause leads to the input clauses the clause depends on.
In particular, for the two clauses of a conflict, these input clauses form an unsatisfiable subset of the input (though not always a minimal subset).
*/

use std::collections::{BTreeSet, VecDeque};

use petgraph::{graph::Graph, prelude::NodeIndex, visit::EdgeRef};

use crate::{
    misc::log::targets::{self},
    structures::clause_set::ClauseKey,
};

#[derive(Clone, Copy, Debug)]
enum Node {
    Clause(ClauseKey),
    Input,
}

/// The graph of clauses, with edges from parents to resolvents.
#[derive(Debug)]
pub struct Derivation {
    graph: Graph<Node, usize>,
    the_input: NodeIndex,

    /// Node indices, indexed by clause key.
    nodes: Vec<NodeIndex>,
}

impl Default for Derivation {
    fn default() -> Self {
        let mut the_graph = Graph::<Node, usize>::new();
        let the_input = the_graph.add_node(Node::Input);
        Derivation {
            graph: the_graph,
            the_input,
            nodes: Vec::default(),
        }
    }
}

impl Derivation {
    /// Notes a clause read from the input.
    pub fn add_input(&mut self, key: ClauseKey) {
        let the_node = self.add_node(key);
        self.graph.add_edge(self.the_input, the_node, 0);
    }

    /// Notes a clause resolved from `parents` during `round`.
    ///
    /// Parents must already have been noted.
    pub fn add_resolvent(&mut self, key: ClauseKey, parents: [ClauseKey; 2], round: usize) {
        let the_node = self.add_node(key);
        for parent in parents {
            if let Some(parent_node) = self.nodes.get(parent).copied() {
                self.graph.add_edge(parent_node, the_node, round);
            } else {
                log::error!(target: targets::DERIVATION, "Resolvent {key} noted before parent {parent}");
            }
        }
    }

    fn add_node(&mut self, key: ClauseKey) -> NodeIndex {
        if key != self.nodes.len() {
            log::warn!(target: targets::DERIVATION, "Clause {key} noted out of order");
        }
        let the_node = self.graph.add_node(Node::Clause(key));
        if let Some(slot) = self.nodes.get_mut(key) {
            *slot = the_node;
        } else {
            self.nodes.resize(key, self.the_input);
            self.nodes.push(the_node);
        }
        the_node
    }

    /// Whether the clause was read from the input.
    pub fn is_input(&self, key: ClauseKey) -> bool {
        self.nodes.get(key).is_some_and(|node| {
            self.graph
                .edges_directed(*node, petgraph::Direction::Incoming)
                .any(|edge| edge.source() == self.the_input)
        })
    }

    /// The parents of a clause, if the clause is a resolvent.
    pub fn parents(&self, key: ClauseKey) -> Option<[ClauseKey; 2]> {
        let node = *self.nodes.get(key)?;
        let parents = self
            .graph
            .edges_directed(node, petgraph::Direction::Incoming)
            .filter_map(|edge| match self.graph.node_weight(edge.source()) {
                Some(Node::Clause(parent)) => Some(*parent),
                _ => None,
            })
            .collect::<Vec<_>>();

        match parents.as_slice() {
            [first, second] => Some([*first, *second]),
            _ => None,
        }
    }

    /// The keys of the input clauses which some clauses depend on, sorted.
    pub fn origins(&self, keys: impl IntoIterator<Item = ClauseKey>) -> Vec<ClauseKey> {
        let mut origin_keys = BTreeSet::new();
        let mut seen = BTreeSet::new();

        let mut q: VecDeque<NodeIndex> = keys
            .into_iter()
            .filter_map(|key| self.nodes.get(key).copied())
            .collect();

        while let Some(node) = q.pop_front() {
            if !seen.insert(node) {
                continue;
            }

            for edge in self
                .graph
                .edges_directed(node, petgraph::Direction::Incoming)
            {
                match self.graph.node_weight(edge.source()) {
                    Some(Node::Input) => {
                        if let Some(Node::Clause(key)) = self.graph.node_weight(node) {
                            origin_keys.insert(*key);
                        }
                    }

                    Some(Node::Clause(_)) => q.push_back(edge.source()),

                    None => log::error!(target: targets::DERIVATION, "Edge from a missing node"),
                }
            }
        }

        origin_keys.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins() {
        let mut derivation = Derivation::default();
        for key in 0..4 {
            derivation.add_input(key);
        }
        derivation.add_resolvent(4, [0, 1], 1);
        derivation.add_resolvent(5, [4, 2], 2);

        assert!(derivation.is_input(2));
        assert!(!derivation.is_input(5));

        let mut parents = derivation.parents(5).unwrap();
        parents.sort();
        assert_eq!(parents, [2, 4]);
        assert_eq!(derivation.parents(0), None);

        assert_eq!(derivation.origins([5]), vec![0, 1, 2]);
        assert_eq!(derivation.origins([5, 3]), vec![0, 1, 2, 3]);
    }

    #[test]
    fn out_of_order() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut derivation = Derivation::default();
        derivation.add_input(0);
        derivation.add_input(2);
        derivation.add_resolvent(3, [0, 7], 1);

        assert!(derivation.is_input(2));
        assert_eq!(derivation.parents(3), None);
        assert_eq!(derivation.origins([3]), vec![0]);
    }
}
