//! Text rendering of a graph's nodes and edge ledger.

use core::fmt;

use crate::graph::DirectedGraph;

impl<T: fmt::Display> fmt::Display for DirectedGraph<T> {
    /// Renders one line per node (`position: value`, in positional order)
    /// followed by the edge ledger as `(head, tail)` pairs in ledger order.
    ///
    /// A pure read of the graph's state; the ledger's deterministic sort
    /// makes the output stable for equal graphs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, value) in self.iter().enumerate() {
            writeln!(f, "{position}: {value}")?;
        }
        write!(f, "edges:")?;
        for edge in self.edges() {
            write!(f, " ({}, {})", edge.head(), edge.tail())?;
        }
        Ok(())
    }
}
