//! The directed-graph container.
//!
//! [`DirectedGraph`] owns an ordered sequence of value-bearing nodes and an
//! ordered edge ledger, and keeps the two views of connectivity consistent
//! under every mutation: each node's adjacency list and the ledger always
//! describe the same set of directed edges.
//!
//! Positions in the public API are sequence indices (`0..len()`), the way a
//! `Vec` is indexed. Removing a node shifts the positions of every node after
//! it; the container renumbers its own ledger accordingly, but positions held
//! by the caller from before the removal are stale and must be re-derived.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `push` | \(O(1)\) amortized | Arena insert + sequence append |
//! | `connect` | \(O(E)\) | Ordered insert into the sorted ledger |
//! | `disconnect` | \(O(d + E)\) | Rightmost scan of adjacency and ledger |
//! | `isolate` | \(O(V \cdot d + E)\) | Strips every incident edge |
//! | `remove` | \(O(V \cdot d + E)\) | Isolate + sequence shift + renumber |
//! | `indegree` | \(O(V \cdot d)\) | Scans all adjacency lists |
//! | `outdegree` | \(O(1)\) | Adjacency length |
//! | `is_simple` | \(O(V \cdot d^2)\) | Pairwise duplicate check per node |

use std::sync::atomic::{AtomicU64, Ordering};

use crate::arena::{Arena, NodeHandle};
use crate::cursor::Cursor;
use crate::edge::DirectedEdge;
use crate::error::{GraphError, IndexRole, Result};
use crate::node::Node;

/// Identity of one graph instance, carried by cursors so they can be
/// rejected when applied to a graph they were not created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GraphId(u64);

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

impl GraphId {
    fn fresh() -> Self {
        Self(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A generic, mutable directed graph.
///
/// Nodes form an ordered sequence and hold one value each; directed edges are
/// recorded both as per-node adjacency and in a deterministic, sorted edge
/// ledger. Self-loops and parallel edges are permitted (use [`is_simple`] to
/// detect them). Traversal is cursor-based: see [`cursor`].
///
/// # Example
///
/// ```
/// use quiver::DirectedGraph;
///
/// let mut graph = DirectedGraph::from(vec![10, 20, 30]);
/// graph.connect(0, 1)?;
/// graph.connect(1, 2)?;
/// graph.connect(2, 0)?;
///
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.outdegree(0)?, 1);
/// assert_eq!(graph.indegree(0)?, 1);
/// assert!(graph.is_simple());
/// # Ok::<(), quiver::GraphError>(())
/// ```
///
/// [`is_simple`]: DirectedGraph::is_simple
/// [`cursor`]: DirectedGraph::cursor
#[derive(Debug)]
pub struct DirectedGraph<T> {
    nodes: Arena<Node<T>>,
    order: Vec<NodeHandle>,
    ledger: Vec<DirectedEdge>,
    id: GraphId,
}

impl<T> DirectedGraph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            order: Vec::new(),
            ledger: Vec::new(),
            id: GraphId::fresh(),
        }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            ledger: Vec::new(),
            id: GraphId::fresh(),
        }
    }

    /// Creates a graph of `n` default-valued nodes and no edges.
    pub fn from_default(n: usize) -> Self
    where
        T: Default,
    {
        (0..n).map(|_| T::default()).collect()
    }

    /// Creates a graph of `n` copies of `value` and no edges.
    pub fn from_elem(value: T, n: usize) -> Self
    where
        T: Clone,
    {
        std::iter::repeat(value).take(n).collect()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The edge ledger: every directed edge as a `(head, tail)` position
    /// pair, ordered by head, then tail, then insertion order.
    pub fn edges(&self) -> &[DirectedEdge] {
        &self.ledger
    }

    /// Iterates over node values in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().map(|&handle| &self.node(handle).value)
    }

    /// Checked access to the value at position `k`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `k >= len()`.
    pub fn at(&self, k: usize) -> Result<&T> {
        self.check(IndexRole::Node, k)?;
        Ok(&self.node(self.order[k]).value)
    }

    /// Checked mutable access to the value at position `k`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `k >= len()`.
    pub fn at_mut(&mut self, k: usize) -> Result<&mut T> {
        self.check(IndexRole::Node, k)?;
        let handle = self.order[k];
        Ok(&mut self.node_mut(handle).value)
    }

    /// Appends a node holding `value` to the end of the sequence.
    pub fn push(&mut self, value: T) {
        let handle = self.nodes.insert(Node::new(value));
        self.order.push(handle);
    }

    /// Adds a directed edge from position `from` to position `to`.
    ///
    /// Self-loops and parallel edges are allowed; the ledger keeps duplicate
    /// edges in insertion order. Use [`is_simple`](Self::is_simple) to detect
    /// their presence afterwards.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if either position is invalid; the
    /// graph is unchanged.
    pub fn connect(&mut self, from: usize, to: usize) -> Result<()> {
        self.check(IndexRole::From, from)?;
        self.check(IndexRole::To, to)?;

        let target = self.order[to];
        let head = self.order[from];
        self.node_mut(head).out.push(target);

        // Ordered insert after any equal edges, which is what re-sorting with
        // a stable sort would produce.
        let edge = DirectedEdge::new(from, to);
        let pos = self.ledger.partition_point(|e| *e <= edge);
        self.ledger.insert(pos, edge);
        Ok(())
    }

    /// Removes the **last-inserted** edge from `from` to `to`.
    ///
    /// With parallel edges present, only the most recently added instance is
    /// removed. Returns whether an edge was removed.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if either position is invalid; the
    /// graph is unchanged.
    pub fn disconnect(&mut self, from: usize, to: usize) -> Result<bool> {
        self.check(IndexRole::From, from)?;
        self.check(IndexRole::To, to)?;

        let target = self.order[to];
        let head = self.order[from];
        if !self.node_mut(head).unlink_last(target) {
            return Ok(false);
        }
        let edge = DirectedEdge::new(from, to);
        let pos = self
            .ledger
            .iter()
            .rposition(|e| *e == edge)
            .expect("adjacency entry had no matching ledger edge");
        self.ledger.remove(pos);
        Ok(true)
    }

    /// Removes every edge incident to position `k`, in either direction.
    ///
    /// The node itself stays in the sequence with outdegree and indegree
    /// zero.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `k >= len()`; the graph is
    /// unchanged.
    pub fn isolate(&mut self, k: usize) -> Result<()> {
        self.check(IndexRole::Node, k)?;

        let target = self.order[k];
        self.node_mut(target).out.clear();
        for position in 0..self.len() {
            if position == k {
                continue;
            }
            let handle = self.order[position];
            self.node_mut(handle).unlink_all(target);
        }
        self.ledger.retain(|e| !e.touches(k));
        Ok(())
    }

    /// Removes the node at position `k` and returns its value.
    ///
    /// All edges incident to `k` are removed first. Every node after `k`
    /// shifts down one position; the ledger is renumbered to match, but any
    /// positions the caller obtained before the call are stale. Cursors at
    /// the removed node report [`GraphError::StaleCursor`] from then on.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `k >= len()`; the graph is
    /// unchanged.
    pub fn remove(&mut self, k: usize) -> Result<T> {
        self.isolate(k)?;
        let handle = self.order.remove(k);
        let node = self
            .nodes
            .remove(handle)
            .expect("node sequence entry must be live");
        // Monotonic shift, so the ledger stays sorted.
        for edge in &mut self.ledger {
            edge.shift_down_past(k);
        }
        Ok(node.value)
    }

    /// Removes every node and edge, leaving an empty graph.
    ///
    /// Outstanding cursors into this graph become stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.order.clear();
        self.ledger.clear();
    }

    /// Exchanges the full contents of two graphs.
    ///
    /// Graph identities travel with the contents, so cursors keep following
    /// the nodes they were created for.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Number of edges ending at position `k`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `k >= len()`.
    pub fn indegree(&self, k: usize) -> Result<usize> {
        self.check(IndexRole::Node, k)?;
        let target = self.order[k];
        Ok(self
            .order
            .iter()
            .map(|&handle| {
                self.node(handle)
                    .out
                    .iter()
                    .filter(|&&h| h == target)
                    .count()
            })
            .sum())
    }

    /// Number of edges starting at position `k`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `k >= len()`.
    pub fn outdegree(&self, k: usize) -> Result<usize> {
        self.check(IndexRole::Node, k)?;
        Ok(self.node(self.order[k]).outdegree())
    }

    /// True iff the graph has no self-loops and no parallel edges.
    pub fn is_simple(&self) -> bool {
        self.order.iter().all(|&handle| {
            let out = &self.node(handle).out;
            out.iter().enumerate().all(|(i, &h)| {
                h != handle && !out[..i].contains(&h)
            })
        })
    }

    /// Creates a cursor positioned at the first node.
    ///
    /// This is the only way to obtain a cursor; there is no end sentinel, so
    /// callers check [`Cursor::outdegree`] before stepping.
    ///
    /// # Errors
    /// [`GraphError::EmptyGraph`] if the graph has no nodes.
    pub fn cursor(&self) -> Result<Cursor> {
        match self.order.first() {
            Some(&handle) => Ok(Cursor::new(self.id, handle)),
            None => Err(GraphError::EmptyGraph),
        }
    }

    pub(crate) fn id(&self) -> GraphId {
        self.id
    }

    pub(crate) fn resolve(&self, handle: NodeHandle) -> Option<&Node<T>> {
        self.nodes.get(handle)
    }

    pub(crate) fn resolve_mut(&mut self, handle: NodeHandle) -> Option<&mut Node<T>> {
        self.nodes.get_mut(handle)
    }

    fn check(&self, role: IndexRole, k: usize) -> Result<()> {
        if k < self.len() {
            Ok(())
        } else {
            Err(GraphError::out_of_range(role, k, self.len()))
        }
    }

    fn node(&self, handle: NodeHandle) -> &Node<T> {
        self.nodes
            .get(handle)
            .expect("node sequence entry must be live")
    }

    fn node_mut(&mut self, handle: NodeHandle) -> &mut Node<T> {
        self.nodes
            .get_mut(handle)
            .expect("node sequence entry must be live")
    }
}

impl<T> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DirectedGraph<T> {
    /// Deep copy: clones the values in positional order, then rebuilds every
    /// adjacency list strictly from the copied ledger. The copy is a distinct
    /// graph instance; cursors into the original do not work on it.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len());
        for value in self.iter() {
            copy.push(value.clone());
        }
        for edge in &self.ledger {
            let head = copy.order[edge.head()];
            let target = copy.order[edge.tail()];
            copy.node_mut(head).out.push(target);
        }
        copy.ledger = self.ledger.clone();
        copy
    }
}

impl<T: PartialEq> PartialEq for DirectedGraph<T> {
    /// Graphs are equal iff they have the same node count, equal values at
    /// every position, and identical edge ledgers as ordered sequences.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.ledger == other.ledger && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DirectedGraph<T> {}

impl<T> std::ops::Index<usize> for DirectedGraph<T> {
    type Output = T;

    /// Unchecked positional access: panics on an invalid position. Callers
    /// needing a recoverable error use [`DirectedGraph::at`].
    fn index(&self, k: usize) -> &T {
        &self.node(self.order[k]).value
    }
}

impl<T> std::ops::IndexMut<usize> for DirectedGraph<T> {
    fn index_mut(&mut self, k: usize) -> &mut T {
        let handle = self.order[k];
        &mut self.node_mut(handle).value
    }
}

impl<T> FromIterator<T> for DirectedGraph<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut graph = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            graph.push(value);
        }
        graph
    }
}

impl<T> From<Vec<T>> for DirectedGraph<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DirectedGraph<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for DirectedGraph<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> DirectedGraph<i32> {
        let mut graph = DirectedGraph::from(vec![10, 20, 30]);
        graph.connect(0, 1).unwrap();
        graph.connect(1, 2).unwrap();
        graph.connect(2, 0).unwrap();
        graph
    }

    #[test]
    fn push_appends_at_the_back() {
        let mut graph = DirectedGraph::new();
        graph.push(1);
        graph.push(2);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph[graph.len() - 1], 2);
    }

    #[test]
    fn connect_updates_degrees_and_ledger() {
        let mut graph = DirectedGraph::from(vec![0, 1]);
        graph.connect(0, 1).unwrap();
        assert_eq!(graph.outdegree(0).unwrap(), 1);
        assert_eq!(graph.indegree(1).unwrap(), 1);
        assert_eq!(graph.edges(), &[DirectedEdge::new(0, 1)]);
    }

    #[test]
    fn ledger_is_sorted_with_stable_ties() {
        let mut graph = DirectedGraph::from(vec![0, 1, 2]);
        graph.connect(2, 0).unwrap();
        graph.connect(0, 2).unwrap();
        graph.connect(0, 1).unwrap();
        graph.connect(0, 1).unwrap();
        assert_eq!(
            graph.edges(),
            &[
                DirectedEdge::new(0, 1),
                DirectedEdge::new(0, 1),
                DirectedEdge::new(0, 2),
                DirectedEdge::new(2, 0),
            ]
        );
    }

    #[test]
    fn disconnect_removes_rightmost_instance() {
        let mut graph = DirectedGraph::from(vec![0, 1]);
        graph.connect(0, 1).unwrap();
        graph.connect(0, 1).unwrap();
        assert!(graph.disconnect(0, 1).unwrap());
        assert_eq!(graph.outdegree(0).unwrap(), 1);
        assert_eq!(graph.indegree(1).unwrap(), 1);
        assert_eq!(graph.edges(), &[DirectedEdge::new(0, 1)]);

        assert!(graph.disconnect(0, 1).unwrap());
        assert!(!graph.disconnect(0, 1).unwrap());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn isolate_strips_both_directions() {
        let mut graph = triangle();
        graph.isolate(1).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.outdegree(0).unwrap(), 0);
        assert_eq!(graph.indegree(0).unwrap(), 1);
        assert_eq!(graph.outdegree(2).unwrap(), 1);
        assert_eq!(graph.edges(), &[DirectedEdge::new(2, 0)]);
    }

    #[test]
    fn remove_shifts_positions_and_renumbers_the_ledger() {
        let mut graph = triangle();
        assert_eq!(graph.remove(1).unwrap(), 20);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph[0], 10);
        assert_eq!(graph[1], 30);
        // Edge 2 -> 0 survives as 1 -> 0.
        assert_eq!(graph.edges(), &[DirectedEdge::new(1, 0)]);
        assert_eq!(graph.outdegree(1).unwrap(), 1);
        assert_eq!(graph.indegree(0).unwrap(), 1);
    }

    #[test]
    fn removed_graph_equals_independent_construction() {
        let mut graph = triangle();
        graph.remove(1).unwrap();

        let mut expected = DirectedGraph::from(vec![10, 30]);
        expected.connect(1, 0).unwrap();
        assert_eq!(graph, expected);
    }

    #[test]
    fn failed_validation_leaves_the_graph_unchanged() {
        let mut graph = triangle();
        let before = graph.clone();
        assert!(graph.connect(0, 9).is_err());
        assert!(graph.disconnect(9, 0).is_err());
        assert!(graph.isolate(3).is_err());
        assert!(graph.remove(3).is_err());
        assert_eq!(graph, before);
    }

    #[test]
    fn simple_detects_self_loops_and_parallel_edges() {
        let mut graph = DirectedGraph::from(vec![0, 1]);
        assert!(graph.is_simple());
        graph.connect(0, 1).unwrap();
        assert!(graph.is_simple());
        graph.connect(0, 1).unwrap();
        assert!(!graph.is_simple());
        graph.disconnect(0, 1).unwrap();
        assert!(graph.is_simple());
        graph.connect(1, 1).unwrap();
        assert!(!graph.is_simple());
    }

    #[test]
    fn clone_is_equal_but_independent() {
        let graph = triangle();
        let mut copy = graph.clone();
        assert_eq!(graph, copy);

        copy.push(40);
        assert_eq!(graph.len(), 3);
        assert_ne!(graph, copy);
    }

    #[test]
    fn clone_rebuilds_adjacency_from_the_ledger() {
        let graph = triangle();
        let copy = graph.clone();
        for k in 0..3 {
            assert_eq!(copy.outdegree(k).unwrap(), graph.outdegree(k).unwrap());
            assert_eq!(copy.indegree(k).unwrap(), graph.indegree(k).unwrap());
        }
        assert!(copy.is_simple());
    }

    #[test]
    fn clear_empties_everything() {
        let mut graph = triangle();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert!(graph.edges().is_empty());
        assert_eq!(
            graph.indegree(0),
            Err(GraphError::out_of_range(IndexRole::Node, 0, 0))
        );
        assert_eq!(graph.cursor(), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn take_leaves_an_empty_valid_graph() {
        let mut graph = triangle();
        let moved = std::mem::take(&mut graph);
        assert_eq!(moved.len(), 3);
        assert_eq!(moved.edges().len(), 3);
        assert!(graph.is_empty());
        assert!(graph.edges().is_empty());
        graph.push(1);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = triangle();
        let mut b = DirectedGraph::from(vec![1]);
        a.swap(&mut b);
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 3);
        assert_eq!(b.edges().len(), 3);
    }

    #[test]
    fn equality_compares_ledger_history() {
        let mut a = DirectedGraph::from(vec![0, 1]);
        let mut b = DirectedGraph::from(vec![0, 1]);
        a.connect(0, 1).unwrap();
        assert_ne!(a, b);
        b.connect(0, 1).unwrap();
        assert_eq!(a, b);
        // A parallel edge is part of the ledger sequence.
        a.connect(0, 1).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn at_validates_and_index_matches() {
        let mut graph = triangle();
        assert_eq!(*graph.at(2).unwrap(), 30);
        *graph.at_mut(2).unwrap() = 31;
        assert_eq!(graph[2], 31);
        assert_eq!(
            graph.at(5),
            Err(GraphError::out_of_range(IndexRole::Node, 5, 3))
        );
    }

    #[test]
    fn constructors_fill_without_edges() {
        let defaulted: DirectedGraph<u8> = DirectedGraph::from_default(3);
        assert_eq!(defaulted.iter().copied().collect::<Vec<_>>(), [0, 0, 0]);
        assert!(defaulted.edges().is_empty());

        let filled = DirectedGraph::from_elem(7u8, 2);
        assert_eq!(filled.iter().copied().collect::<Vec<_>>(), [7, 7]);

        let from_array = DirectedGraph::from([1, 2, 3]);
        let from_vec = DirectedGraph::from(vec![1, 2, 3]);
        assert_eq!(from_array, from_vec);
    }
}
