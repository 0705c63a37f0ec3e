//! Topology construction strategies.
//!
//! Every strategy validates its parameters on construction and produces an
//! owned [`EdgeList`] from an explicitly supplied random generator, so an
//! injected seed yields byte-identical output.

mod bipartite;
mod fixed_degree;
mod mesh;
mod random_density;
mod sampling;

pub use bipartite::Bipartite;
pub use fixed_degree::FixedDegree;
pub use mesh::Mesh;
pub use random_density::{DensityMatrix, RandomDensity};
pub use sampling::SAMPLING_ATTEMPTS_PER_EDGE;

use rand::Rng;

use crate::{edge::EdgeList, error::Result};

/// A randomised flow-network construction strategy.
///
/// # Examples
/// ```
/// use flowgen_core::{Bipartite, CapacityRange, Topology};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let bipartite = Bipartite::new(2, 3, 1.0, CapacityRange::new(1, 10)?)?;
/// let edges = bipartite.generate(&mut SmallRng::seed_from_u64(5))?;
/// assert_eq!(bipartite.name(), "bipartite");
/// assert_eq!(edges.len(), 2 + 2 * 3 + 3);
/// # Ok::<(), flowgen_core::TopologyError>(())
/// ```
pub trait Topology {
    /// Returns a stable label identifying the strategy.
    fn name(&self) -> &'static str;

    /// Generates the edges of one network.
    ///
    /// # Errors
    /// Returns [`crate::TopologyError`] when generation cannot satisfy the
    /// strategy's constraints. No partial edge list is returned.
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<EdgeList>;
}

#[cfg(test)]
mod tests;
