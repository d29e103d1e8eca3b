//! Cursor-based traversal along outgoing edges.
//!
//! A [`Cursor`] is a detached handle: it stores which node of which graph it
//! points at, but borrows nothing, so it can be held across arbitrary graph
//! mutation. Every operation takes the graph by reference and re-validates
//! the cursor, so a cursor whose node has been removed reports
//! [`GraphError::StaleCursor`] instead of touching freed state, and a cursor
//! applied to some other graph reports [`GraphError::ForeignCursor`].

use crate::arena::NodeHandle;
use crate::error::{GraphError, IndexRole, Result};
use crate::graph::{DirectedGraph, GraphId};

/// A traversal handle bound to one node of one graph.
///
/// Created only by [`DirectedGraph::cursor`], which positions it at the first
/// node. There is no end sentinel: callers ask for [`outdegree`] and step via
/// [`advance`] while neighbors remain.
///
/// Two cursors compare equal iff they reference the same node identity within
/// the same owning graph.
///
/// # Example
///
/// ```
/// use quiver::DirectedGraph;
///
/// let mut graph = DirectedGraph::from(vec!["a", "b"]);
/// graph.connect(0, 1)?;
///
/// let mut cursor = graph.cursor()?;
/// assert_eq!(*cursor.value(&graph)?, "a");
/// assert_eq!(cursor.outdegree(&graph)?, 1);
///
/// cursor.advance(&graph, 0)?;
/// assert_eq!(*cursor.value(&graph)?, "b");
/// # Ok::<(), quiver::GraphError>(())
/// ```
///
/// [`outdegree`]: Cursor::outdegree
/// [`advance`]: Cursor::advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    graph: GraphId,
    node: NodeHandle,
}

impl Cursor {
    pub(crate) fn new(graph: GraphId, node: NodeHandle) -> Self {
        Self { graph, node }
    }

    /// Read access to the current node's value.
    ///
    /// Member access flows through the returned reference, the pointer-like
    /// access of the cursor.
    ///
    /// # Errors
    /// [`GraphError::ForeignCursor`] if `graph` did not create this cursor;
    /// [`GraphError::StaleCursor`] if the node has been removed.
    pub fn value<'g, T>(&self, graph: &'g DirectedGraph<T>) -> Result<&'g T> {
        self.check_owner(graph)?;
        graph
            .resolve(self.node)
            .map(|node| &node.value)
            .ok_or(GraphError::StaleCursor)
    }

    /// Mutable access to the current node's value.
    ///
    /// # Errors
    /// [`GraphError::ForeignCursor`] if `graph` did not create this cursor;
    /// [`GraphError::StaleCursor`] if the node has been removed.
    pub fn value_mut<'g, T>(&self, graph: &'g mut DirectedGraph<T>) -> Result<&'g mut T> {
        self.check_owner(graph)?;
        graph
            .resolve_mut(self.node)
            .map(|node| &mut node.value)
            .ok_or(GraphError::StaleCursor)
    }

    /// Outdegree of the current node: the valid range for [`advance`] is
    /// `0..outdegree`.
    ///
    /// # Errors
    /// [`GraphError::ForeignCursor`] if `graph` did not create this cursor;
    /// [`GraphError::StaleCursor`] if the node has been removed.
    ///
    /// [`advance`]: Cursor::advance
    pub fn outdegree<T>(&self, graph: &DirectedGraph<T>) -> Result<usize> {
        self.check_owner(graph)?;
        graph
            .resolve(self.node)
            .map(crate::node::Node::outdegree)
            .ok_or(GraphError::StaleCursor)
    }

    /// Steps to the `k`-th outgoing neighbor of the current node.
    ///
    /// On error the cursor is left where it was.
    ///
    /// # Errors
    /// [`GraphError::ForeignCursor`] if `graph` did not create this cursor;
    /// [`GraphError::StaleCursor`] if the current node or the selected
    /// neighbor has been removed; [`GraphError::IndexOutOfRange`] if
    /// `k >= outdegree`.
    pub fn advance<T>(&mut self, graph: &DirectedGraph<T>, k: usize) -> Result<()> {
        self.check_owner(graph)?;
        let node = graph.resolve(self.node).ok_or(GraphError::StaleCursor)?;
        let next = node
            .out
            .get(k)
            .copied()
            .ok_or_else(|| GraphError::out_of_range(IndexRole::Neighbor, k, node.outdegree()))?;
        if graph.resolve(next).is_none() {
            return Err(GraphError::StaleCursor);
        }
        self.node = next;
        Ok(())
    }

    fn check_owner<T>(&self, graph: &DirectedGraph<T>) -> Result<()> {
        if graph.id() == self.graph {
            Ok(())
        } else {
            Err(GraphError::ForeignCursor)
        }
    }
}
