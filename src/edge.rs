//! Directed edge descriptors for the graph's edge ledger.

/// An ordered `(head, tail)` pair of node positions.
///
/// Edges are pure descriptors: they do not own nodes, and their positions
/// refer to the graph's node sequence at the time the edge was recorded. The
/// ledger keeps them ordered by head, then tail, with insertion order breaking
/// ties, which makes iteration and rendering deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirectedEdge {
    head: usize,
    tail: usize,
}

impl DirectedEdge {
    /// Creates an edge from position `head` to position `tail`.
    pub fn new(head: usize, tail: usize) -> Self {
        Self { head, tail }
    }

    /// The starting node position.
    pub fn head(&self) -> usize {
        self.head
    }

    /// The ending node position.
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// True if this edge starts or ends at position `k`.
    pub(crate) fn touches(&self, k: usize) -> bool {
        self.head == k || self.tail == k
    }

    /// Shifts both endpoints above `removed` down by one position.
    ///
    /// Callers must have dropped every edge touching `removed` first.
    pub(crate) fn shift_down_past(&mut self, removed: usize) {
        debug_assert!(!self.touches(removed));
        if self.head > removed {
            self.head -= 1;
        }
        if self.tail > removed {
            self.tail -= 1;
        }
    }
}
