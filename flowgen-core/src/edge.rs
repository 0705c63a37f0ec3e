//! Edges and the ordered edge buffer filled by a strategy.

use std::fmt;
use std::io::{self, Write};

use crate::vertex::Vertex;

/// A directed, capacitated edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    /// Vertex the edge leaves.
    pub tail: Vertex,
    /// Vertex the edge enters.
    pub head: Vertex,
    /// Edge capacity.
    pub capacity: u64,
}

impl Edge {
    /// Builds an edge from its three components.
    #[must_use]
    pub const fn new(tail: Vertex, head: Vertex, capacity: u64) -> Self {
        Self {
            tail,
            head,
            capacity,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.tail, self.head, self.capacity)
    }
}

/// An append-only sequence of edges kept in emission order.
///
/// # Examples
/// ```
/// use flowgen_core::{Edge, EdgeList, Vertex};
///
/// let mut edges = EdgeList::new();
/// edges.push(Edge::new(Vertex::Source, Vertex::internal(1), 4));
/// edges.push(Edge::new(Vertex::internal(1), Vertex::Sink, 2));
/// assert_eq!(edges.to_text(), "s v1 4\nv1 t 2\n");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Creates an empty edge list.
    #[must_use]
    pub const fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Creates an empty edge list with room for `capacity` edges.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Appends an edge.
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Returns the number of edges.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether no edge has been emitted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the edges in emission order.
    #[must_use]
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterates over the edges in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Consumes the list and returns the underlying edges.
    #[must_use]
    pub fn into_vec(self) -> Vec<Edge> {
        self.edges
    }

    /// Writes one `<tail> <head> <capacity>` line per edge, each terminated
    /// by `\n`.
    ///
    /// # Errors
    /// Returns any [`io::Error`] raised by `writer`.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        for edge in &self.edges {
            writeln!(writer, "{edge}")?;
        }
        Ok(())
    }

    /// Renders the edge list into a `String` using the same line format as
    /// [`EdgeList::write_to`].
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for edge in &self.edges {
            text.push_str(&edge.to_string());
            text.push('\n');
        }
        text
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl Extend<Edge> for EdgeList {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}
