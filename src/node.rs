//! The node type: one stored value plus its ordered outgoing adjacency.

use crate::arena::NodeHandle;

/// Internal node representation.
///
/// Adjacency entries are non-owning handles; the graph's arena is the sole
/// owner of node lifetime. The graph keeps each entry paired with exactly one
/// ledger edge, so `out` is always fully resolvable between mutations.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) out: Vec<NodeHandle>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            out: Vec::new(),
        }
    }

    /// Outgoing edge count, including self-loops and parallel edges.
    pub(crate) fn outdegree(&self) -> usize {
        self.out.len()
    }

    /// Removes the last-inserted adjacency entry pointing at `target`.
    ///
    /// Returns whether an entry was removed. Rightmost removal keeps the
    /// earlier of two parallel edges when only one is disconnected.
    pub(crate) fn unlink_last(&mut self, target: NodeHandle) -> bool {
        match self.out.iter().rposition(|&h| h == target) {
            Some(pos) => {
                self.out.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drops every adjacency entry pointing at `target`.
    pub(crate) fn unlink_all(&mut self, target: NodeHandle) {
        self.out.retain(|&h| h != target);
    }
}
