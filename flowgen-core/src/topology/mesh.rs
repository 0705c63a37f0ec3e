//! Rectangular mesh networks.

use rand::Rng;
use tracing::{debug, instrument};

use super::Topology;
use crate::{
    capacity::{CapacityPolicy, CapacityRange},
    edge::{Edge, EdgeList},
    error::{Result, TopologyError},
    vertex::Vertex,
};

const DEFAULT_ROWS: usize = 3;
const DEFAULT_COLS: usize = 4;
const DEFAULT_CAPACITY: u64 = 1;

/// A `rows x cols` grid fed by the source through its first column and
/// drained into the sink through its last column.
///
/// Cells link left to right along each row and in both directions between
/// vertically adjacent cells. `cell(i, j)` is named `v<(i - 1) * cols + j>`.
///
/// # Examples
/// ```
/// use flowgen_core::{Mesh, Topology};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mesh = Mesh::default();
/// assert_eq!((mesh.rows(), mesh.cols()), (3, 4));
/// let edges = mesh.generate(&mut SmallRng::seed_from_u64(3))?;
/// assert_eq!(edges.len(), mesh.edge_count()?);
/// assert!(edges.iter().all(|edge| edge.capacity == 1));
/// # Ok::<(), flowgen_core::TopologyError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mesh {
    rows: usize,
    cols: usize,
    capacity: CapacityPolicy,
}

impl Default for Mesh {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            capacity: CapacityPolicy::Constant(DEFAULT_CAPACITY),
        }
    }
}

impl Mesh {
    /// Validates the parameters of a mesh network.
    ///
    /// With `constant` set every edge carries `max_capacity`; otherwise each
    /// edge draws uniformly from `[1, max_capacity]`.
    ///
    /// # Errors
    /// Returns [`TopologyError::TooSmall`] for an empty grid dimension,
    /// [`TopologyError::ZeroCapacity`] when `max_capacity` is zero and
    /// [`TopologyError::Overflow`] when the cell count does not fit in `usize`.
    pub fn new(rows: usize, cols: usize, max_capacity: u64, constant: bool) -> Result<Self> {
        validate_dimension("rows", rows)?;
        validate_dimension("cols", cols)?;
        if max_capacity == 0 {
            return Err(TopologyError::ZeroCapacity);
        }
        rows.checked_mul(cols).ok_or(TopologyError::Overflow {
            quantity: "mesh cell count",
        })?;

        let capacity = if constant {
            CapacityPolicy::Constant(max_capacity)
        } else {
            CapacityPolicy::Uniform(CapacityRange::new(1, max_capacity)?)
        };
        Ok(Self {
            rows,
            cols,
            capacity,
        })
    }

    /// Returns the number of grid rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of grid columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the capacity policy applied to every edge.
    #[must_use]
    pub const fn capacity(&self) -> CapacityPolicy {
        self.capacity
    }

    /// Returns the number of edges a run emits:
    /// `2 * rows + rows * (cols - 1) + 2 * cols * (rows - 1)`.
    ///
    /// # Errors
    /// Returns [`TopologyError::Overflow`] when the count does not fit in `usize`.
    pub fn edge_count(&self) -> Result<usize> {
        let boundary = self.rows.checked_mul(2);
        let horizontal = self.rows.checked_mul(self.cols - 1);
        let vertical = self
            .cols
            .checked_mul(2)
            .and_then(|links| links.checked_mul(self.rows - 1));
        boundary
            .zip(horizontal)
            .and_then(|(lhs, rhs)| lhs.checked_add(rhs))
            .zip(vertical)
            .and_then(|(lhs, rhs)| lhs.checked_add(rhs))
            .ok_or(TopologyError::Overflow {
                quantity: "mesh edge count",
            })
    }

    const fn cell(&self, row: usize, col: usize) -> Vertex {
        Vertex::cell(row, col, self.cols)
    }

    fn link<R: Rng + ?Sized>(&self, rng: &mut R, edges: &mut EdgeList, tail: Vertex, head: Vertex) {
        edges.push(Edge::new(tail, head, self.capacity.sample(rng)));
    }
}

impl Topology for Mesh {
    fn name(&self) -> &'static str {
        "mesh"
    }

    #[instrument(
        name = "topology.mesh",
        err,
        skip(self, rng),
        fields(rows = self.rows, cols = self.cols),
    )]
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<EdgeList> {
        let mut edges = EdgeList::with_capacity(self.edge_count()?);

        for row in 1..=self.rows {
            self.link(rng, &mut edges, Vertex::Source, self.cell(row, 1));
        }

        for col in 1..self.cols {
            for row in 1..=self.rows {
                self.link(rng, &mut edges, self.cell(row, col), self.cell(row, col + 1));
            }
        }

        for col in 1..=self.cols {
            for row in 1..self.rows {
                let upper = self.cell(row, col);
                let lower = self.cell(row + 1, col);
                self.link(rng, &mut edges, upper, lower);
                self.link(rng, &mut edges, lower, upper);
            }
        }

        for row in 1..=self.rows {
            self.link(rng, &mut edges, self.cell(row, self.cols), Vertex::Sink);
        }

        debug!(edges = edges.len(), "mesh network generated");
        Ok(edges)
    }
}

const fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(TopologyError::TooSmall {
            parameter,
            minimum: 1,
            got: value,
        });
    }
    Ok(())
}
