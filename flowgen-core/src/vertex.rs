//! Vertex identifiers shared by every strategy.

use std::fmt;

/// A vertex in a generated flow network.
///
/// Renders as `s`, `t` or `v<k>` with `k >= 1`.
///
/// # Examples
/// ```
/// use flowgen_core::Vertex;
///
/// assert_eq!(Vertex::Source.to_string(), "s");
/// assert_eq!(Vertex::Sink.to_string(), "t");
/// assert_eq!(Vertex::internal(12).to_string(), "v12");
/// assert_eq!(Vertex::cell(2, 3, 4).to_string(), "v7");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Vertex {
    /// The reserved source `s`.
    Source,
    /// The reserved sink `t`.
    Sink,
    /// A numbered internal vertex, 1-indexed.
    Internal(usize),
}

impl Vertex {
    /// Returns the internal vertex with 1-based index `index`.
    #[must_use]
    pub const fn internal(index: usize) -> Self {
        Self::Internal(index)
    }

    /// Returns the vertex for the 1-indexed grid cell `(row, col)` of a grid
    /// with `cols` columns, numbered row-major as `(row - 1) * cols + col`.
    ///
    /// Callers keep `row >= 1` and the product within `usize`.
    #[must_use]
    pub const fn cell(row: usize, col: usize, cols: usize) -> Self {
        Self::Internal((row - 1) * cols + col)
    }

    /// Returns the internal index, or `None` for the reserved endpoints.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Internal(index) => Some(*index),
            Self::Source | Self::Sink => None,
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("s"),
            Self::Sink => f.write_str("t"),
            Self::Internal(index) => write!(f, "v{index}"),
        }
    }
}
