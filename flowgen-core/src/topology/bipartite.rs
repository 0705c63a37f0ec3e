//! Three-layer bipartite networks.

use rand::{Rng, distributions::Standard};
use tracing::{debug, instrument};

use super::Topology;
use crate::{
    capacity::CapacityRange,
    edge::{Edge, EdgeList},
    error::{Result, TopologyError},
    vertex::Vertex,
};

/// A source, a left partition `v1..=v<left>`, a right partition
/// `v<left + 1>..=v<left + right>` and a sink.
///
/// The source feeds every left vertex and every right vertex drains into the
/// sink, each with an independent capacity. A left/right pair is linked when a
/// unit draw does not exceed `max_probability`; that same draw, mapped onto
/// the capacity range, becomes the edge's capacity. Larger draws therefore
/// yield larger capacities.
///
/// # Examples
/// ```
/// use flowgen_core::{Bipartite, CapacityRange, Topology, Vertex};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let graph = Bipartite::new(3, 2, 0.0, CapacityRange::new(5, 5)?)?;
/// let edges = graph.generate(&mut SmallRng::seed_from_u64(8))?;
/// assert_eq!(edges.iter().filter(|edge| edge.tail == Vertex::Source).count(), 3);
/// assert_eq!(edges.iter().filter(|edge| edge.head == Vertex::Sink).count(), 2);
/// # Ok::<(), flowgen_core::TopologyError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bipartite {
    left: usize,
    right: usize,
    max_probability: f64,
    capacity: CapacityRange,
}

impl Bipartite {
    /// Validates the parameters of a bipartite network.
    ///
    /// # Errors
    /// Returns [`TopologyError::ProbabilityOutOfRange`] unless
    /// `max_probability` is finite and within `[0, 1]`, and
    /// [`TopologyError::Overflow`] when `left + right` does not fit in `usize`.
    pub fn new(
        left: usize,
        right: usize,
        max_probability: f64,
        capacity: CapacityRange,
    ) -> Result<Self> {
        if !max_probability.is_finite() || !(0.0..=1.0).contains(&max_probability) {
            return Err(TopologyError::ProbabilityOutOfRange {
                probability: max_probability,
            });
        }
        left.checked_add(right).ok_or(TopologyError::Overflow {
            quantity: "bipartite vertex count",
        })?;
        Ok(Self {
            left,
            right,
            max_probability,
            capacity,
        })
    }

    /// Returns the size of the source-side partition.
    #[must_use]
    pub const fn left(&self) -> usize {
        self.left
    }

    /// Returns the size of the sink-side partition.
    #[must_use]
    pub const fn right(&self) -> usize {
        self.right
    }

    /// Returns the largest unit draw that still links a pair.
    #[must_use]
    pub const fn max_probability(&self) -> f64 {
        self.max_probability
    }

    /// Returns the capacity range every edge falls within.
    #[must_use]
    pub const fn capacity(&self) -> CapacityRange {
        self.capacity
    }

    const fn right_vertex(&self, index: usize) -> Vertex {
        Vertex::internal(self.left + index)
    }
}

impl Topology for Bipartite {
    fn name(&self) -> &'static str {
        "bipartite"
    }

    #[instrument(
        name = "topology.bipartite",
        err,
        skip(self, rng),
        fields(left = self.left, right = self.right, max_probability = self.max_probability),
    )]
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<EdgeList> {
        let mut edges = EdgeList::new();

        for index in 1..=self.left {
            let capacity = self.capacity.sample(rng);
            edges.push(Edge::new(Vertex::Source, Vertex::internal(index), capacity));
        }

        let mut links = 0_usize;
        for left in 1..=self.left {
            for right in 1..=self.right {
                let draw: f64 = rng.sample(Standard);
                if draw <= self.max_probability {
                    let capacity = self.capacity.scale(draw);
                    edges.push(Edge::new(
                        Vertex::internal(left),
                        self.right_vertex(right),
                        capacity,
                    ));
                    links += 1;
                }
            }
        }

        for index in 1..=self.right {
            let capacity = self.capacity.sample(rng);
            edges.push(Edge::new(self.right_vertex(index), Vertex::Sink, capacity));
        }

        debug!(links, edges = edges.len(), "bipartite network generated");
        Ok(edges)
    }
}
