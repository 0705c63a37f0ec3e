//! Fixed out-degree networks.

use rand::Rng;
use tracing::{debug, instrument};

use super::{Topology, sampling::sample_distinct};
use crate::{
    capacity::CapacityRange,
    edge::{Edge, EdgeList},
    error::{Result, TopologyError},
    vertex::Vertex,
};

/// A network where the source, the sink's feeders and every internal vertex
/// each contribute exactly `out_degree` edges to distinct neighbours.
///
/// Edges are emitted in three blocks: `s -> v_head`, then `v_tail -> t`, then
/// `v_i -> v_head` for `i = 1..=vertices`. Internal vertices never link to
/// themselves. The total is `out_degree * (vertices + 2)` edges.
///
/// # Examples
/// ```
/// use flowgen_core::{CapacityRange, FixedDegree, Topology};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let graph = FixedDegree::new(10, 3, CapacityRange::new(1, 100)?)?;
/// let edges = graph.generate(&mut SmallRng::seed_from_u64(42))?;
/// assert_eq!(edges.len(), 3 * (10 + 2));
/// # Ok::<(), flowgen_core::TopologyError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDegree {
    vertices: usize,
    out_degree: usize,
    capacity: CapacityRange,
}

impl FixedDegree {
    /// Validates the parameters of a fixed-degree network.
    ///
    /// # Errors
    /// Returns [`TopologyError::TooSmall`] when `vertices` is zero and
    /// [`TopologyError::OutDegreeExceedsVertices`] when `out_degree` exceeds
    /// `vertices`.
    pub const fn new(vertices: usize, out_degree: usize, capacity: CapacityRange) -> Result<Self> {
        if vertices == 0 {
            return Err(TopologyError::TooSmall {
                parameter: "vertices",
                minimum: 1,
                got: vertices,
            });
        }
        if out_degree > vertices {
            return Err(TopologyError::OutDegreeExceedsVertices {
                out_degree,
                vertices,
            });
        }
        Ok(Self {
            vertices,
            out_degree,
            capacity,
        })
    }

    /// Returns the number of internal vertices.
    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the out-degree shared by every originating node.
    #[must_use]
    pub const fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// Returns the capacity range edges are drawn from.
    #[must_use]
    pub const fn capacity(&self) -> CapacityRange {
        self.capacity
    }

    /// Returns the number of edges a successful run emits.
    ///
    /// # Errors
    /// Returns [`TopologyError::Overflow`] when the count does not fit in `usize`.
    pub fn edge_count(&self) -> Result<usize> {
        self.vertices
            .checked_add(2)
            .and_then(|nodes| nodes.checked_mul(self.out_degree))
            .ok_or(TopologyError::Overflow {
                quantity: "fixed-degree edge count",
            })
    }

    fn push_fan<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        edges: &mut EdgeList,
        origin: Vertex,
        exclude: Option<usize>,
        link: impl Fn(Vertex) -> Edge,
    ) -> Result<()> {
        let picked = sample_distinct(rng, self.vertices, origin, exclude, self.out_degree)?;
        for index in picked {
            let mut edge = link(Vertex::internal(index));
            edge.capacity = self.capacity.sample(rng);
            edges.push(edge);
        }
        Ok(())
    }
}

impl Topology for FixedDegree {
    fn name(&self) -> &'static str {
        "fixed-degree"
    }

    #[instrument(
        name = "topology.fixed_degree",
        err,
        skip(self, rng),
        fields(vertices = self.vertices, out_degree = self.out_degree),
    )]
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<EdgeList> {
        // Internal vertices choose among the other `vertices - 1` nodes, so an
        // out-degree equal to `vertices` cannot be met. Fail before any draw.
        if self.out_degree > 0 && self.out_degree == self.vertices {
            return Err(TopologyError::InsufficientCandidates {
                origin: Vertex::internal(1),
                available: self.vertices - 1,
                requested: self.out_degree,
            });
        }

        let mut edges = EdgeList::with_capacity(self.edge_count()?);

        self.push_fan(rng, &mut edges, Vertex::Source, None, |head| {
            Edge::new(Vertex::Source, head, 0)
        })?;
        self.push_fan(rng, &mut edges, Vertex::Sink, None, |tail| {
            Edge::new(tail, Vertex::Sink, 0)
        })?;
        for index in 1..=self.vertices {
            let origin = Vertex::internal(index);
            self.push_fan(rng, &mut edges, origin, Some(index), |head| {
                Edge::new(origin, head, 0)
            })?;
        }

        debug!(edges = edges.len(), "fixed-degree network generated");
        Ok(edges)
    }
}
