//! # `quiver` - Mutable Directed-Graph Container
//!
//! A generic, ordered collection of value-bearing nodes connected by directed
//! edges, with invariant-preserving mutation and cursor-based traversal.
//!
//! ## Design
//!
//! - **Arena ownership**: the graph is the sole owner of its nodes, stored in
//!   a slot arena indexed by generation-checked handles. Adjacency lists and
//!   cursors hold handles, never pointers, so a reference to a removed node
//!   resolves to "absent" in O(1) instead of dangling.
//! - **Edge ledger**: every directed edge is recorded both in the head node's
//!   adjacency list and in a globally sorted ledger of `(head, tail)`
//!   position pairs. Every mutation keeps the two in lockstep, which makes
//!   iteration order, rendering, and equality deterministic.
//! - **Checked by default**: index-taking operations validate before any
//!   state change, so a failed call leaves the graph untouched. Plain `[]`
//!   indexing is the unchecked escape hatch and panics on misuse.
//! - **Cursors stay safe under mutation**: a [`Cursor`] borrows nothing and
//!   re-validates itself against the graph on every use, turning the classic
//!   dangling-iterator problem into an explicit [`GraphError::StaleCursor`].
//!
//! Self-loops and parallel edges are allowed; [`DirectedGraph::is_simple`]
//! reports whether any are present.
//!
//! ## Example
//!
//! ```rust
//! use quiver::DirectedGraph;
//!
//! let mut graph = DirectedGraph::from(vec![10, 20, 30]);
//! graph.connect(0, 1)?;
//! graph.connect(1, 2)?;
//! graph.connect(2, 0)?;
//!
//! let mut cursor = graph.cursor()?;
//! cursor.advance(&graph, 0)?;
//! assert_eq!(*cursor.value(&graph)?, 20);
//!
//! graph.remove(1)?;
//! assert!(cursor.value(&graph).is_err());
//! # Ok::<(), quiver::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod arena;
pub mod cursor;
mod display;
pub mod edge;
pub mod error;
pub mod graph;
mod node;

pub use cursor::Cursor;
pub use edge::DirectedEdge;
pub use error::{GraphError, IndexRole, Result};
pub use graph::DirectedGraph;
