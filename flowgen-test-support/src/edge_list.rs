//! Strict reader for emitted edge lists.
//!
//! Tests use it to check that generated output honours the line grammar
//! `<tail> <head> <capacity>` with vertex ids `s`, `t` or `v<k>` (`k >= 1`)
//! and a non-negative integer capacity.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// A vertex id read back from an edge list.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum VertexId {
    /// `s`.
    Source,
    /// `t`.
    Sink,
    /// `v<k>`.
    Internal(usize),
}

impl VertexId {
    /// Parses a single vertex token, returning `None` when it does not match
    /// `s | t | v<k>` with `k >= 1` written without sign or leading zeros.
    ///
    /// # Examples
    /// ```
    /// use flowgen_test_support::edge_list::VertexId;
    ///
    /// assert_eq!(VertexId::parse("v12"), Some(VertexId::Internal(12)));
    /// assert_eq!(VertexId::parse("v0"), None);
    /// assert_eq!(VertexId::parse("x"), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "s" => Some(Self::Source),
            "t" => Some(Self::Sink),
            _ => {
                let digits = token.strip_prefix('v')?;
                if digits.starts_with('0') || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
                    return None;
                }
                digits.parse().ok().map(Self::Internal)
            }
        }
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("s"),
            Self::Sink => f.write_str("t"),
            Self::Internal(index) => write!(f, "v{index}"),
        }
    }
}

/// One parsed `<tail> <head> <capacity>` line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParsedEdge {
    /// Tail vertex.
    pub tail: VertexId,
    /// Head vertex.
    pub head: VertexId,
    /// Edge capacity.
    pub capacity: u64,
}

/// Errors raised when a line breaks the edge-list grammar.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EdgeListError {
    /// The line did not split into exactly three tokens.
    #[error("line {line}: expected 3 fields, found {found}")]
    FieldCount {
        /// 1-based line number.
        line: usize,
        /// Number of whitespace-separated tokens present.
        found: usize,
    },
    /// A vertex token did not match `s | t | v<k>`.
    #[error("line {line}: invalid vertex id `{token}`")]
    Vertex {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },
    /// The capacity token was not a non-negative integer.
    #[error("line {line}: invalid capacity `{token}`")]
    Capacity {
        /// 1-based line number.
        line: usize,
        /// Offending token.
        token: String,
    },
}

/// Parses every line of `text`.
///
/// # Errors
/// Returns the first [`EdgeListError`] encountered.
///
/// # Examples
/// ```
/// use flowgen_test_support::edge_list::{VertexId, parse_edge_list};
///
/// let edges = parse_edge_list("s v1 4\nv1 t 2\n")?;
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[1].head, VertexId::Sink);
/// # Ok::<(), flowgen_test_support::edge_list::EdgeListError>(())
/// ```
pub fn parse_edge_list(text: &str) -> Result<Vec<ParsedEdge>, EdgeListError> {
    text.lines()
        .enumerate()
        .map(|(offset, raw)| parse_line(offset + 1, raw))
        .collect()
}

fn parse_line(line: usize, raw: &str) -> Result<ParsedEdge, EdgeListError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let [tail, head, capacity] = tokens.as_slice() else {
        return Err(EdgeListError::FieldCount {
            line,
            found: tokens.len(),
        });
    };
    let vertex = |token: &str| {
        VertexId::parse(token).ok_or_else(|| EdgeListError::Vertex {
            line,
            token: token.to_owned(),
        })
    };
    Ok(ParsedEdge {
        tail: vertex(*tail)?,
        head: vertex(*head)?,
        capacity: capacity.parse().map_err(|_| EdgeListError::Capacity {
            line,
            token: (*capacity).to_owned(),
        })?,
    })
}

/// Counts outgoing edges per tail vertex.
#[must_use]
pub fn out_degrees(edges: &[ParsedEdge]) -> BTreeMap<VertexId, usize> {
    let mut degrees = BTreeMap::new();
    for edge in edges {
        *degrees.entry(edge.tail).or_insert(0) += 1;
    }
    degrees
}

/// Counts incoming edges per head vertex.
#[must_use]
pub fn in_degrees(edges: &[ParsedEdge]) -> BTreeMap<VertexId, usize> {
    let mut degrees = BTreeMap::new();
    for edge in edges {
        *degrees.entry(edge.head).or_insert(0) += 1;
    }
    degrees
}

/// Returns the smallest and largest capacity present, or `None` when empty.
#[must_use]
pub fn capacity_bounds(edges: &[ParsedEdge]) -> Option<(u64, u64)> {
    let min = edges.iter().map(|edge| edge.capacity).min()?;
    let max = edges.iter().map(|edge| edge.capacity).max()?;
    Some((min, max))
}
