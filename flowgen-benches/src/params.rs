//! Benchmark parameter types.
//!
//! Each type renders as the Criterion parameter label and builds the
//! topology it describes.

use std::fmt;

use flowgen_core::{Bipartite, CapacityRange, FixedDegree, Mesh, RandomDensity};

use crate::error::BenchSetupError;

/// Capacity range shared by every benchmarked strategy that samples one.
pub const BENCH_CAPACITY: (u64, u64) = (1, 2500);

fn capacity() -> Result<CapacityRange, BenchSetupError> {
    Ok(CapacityRange::new(BENCH_CAPACITY.0, BENCH_CAPACITY.1)?)
}

/// Parameters for a fixed-degree run.
#[derive(Clone, Copy, Debug)]
pub struct FixedDegreeBenchParams {
    /// Number of internal vertices.
    pub vertices: usize,
    /// Distinct neighbours per node.
    pub out_degree: usize,
}

impl FixedDegreeBenchParams {
    /// Builds the described topology.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when the parameters are rejected.
    pub fn build(self) -> Result<FixedDegree, BenchSetupError> {
        Ok(FixedDegree::new(self.vertices, self.out_degree, capacity()?)?)
    }
}

impl fmt::Display for FixedDegreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={},e={}", self.vertices, self.out_degree)
    }
}

/// Parameters for a mesh run with uniform capacities.
#[derive(Clone, Copy, Debug)]
pub struct MeshBenchParams {
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
}

impl MeshBenchParams {
    /// Builds the described topology.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when the parameters are rejected.
    pub fn build(self) -> Result<Mesh, BenchSetupError> {
        Ok(Mesh::new(self.rows, self.cols, BENCH_CAPACITY.1, false)?)
    }
}

impl fmt::Display for MeshBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Parameters for a random-density run.
#[derive(Clone, Copy, Debug)]
pub struct RandomDensityBenchParams {
    /// Matrix order.
    pub vertices: usize,
    /// Presence percentage.
    pub density: u8,
}

impl RandomDensityBenchParams {
    /// Builds the described topology.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when the parameters are rejected.
    pub fn build(self) -> Result<RandomDensity, BenchSetupError> {
        Ok(RandomDensity::new(self.vertices, self.density, capacity()?)?)
    }
}

impl fmt::Display for RandomDensityBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertices, self.density)
    }
}

/// Parameters for a bipartite run.
#[derive(Clone, Copy, Debug)]
pub struct BipartiteBenchParams {
    /// Left partition size.
    pub left: usize,
    /// Right partition size.
    pub right: usize,
    /// Link threshold.
    pub max_probability: f64,
}

impl BipartiteBenchParams {
    /// Builds the described topology.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when the parameters are rejected.
    pub fn build(self) -> Result<Bipartite, BenchSetupError> {
        Ok(Bipartite::new(
            self.left,
            self.right,
            self.max_probability,
            capacity()?,
        )?)
    }
}

impl fmt::Display for BipartiteBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{},p={}", self.left, self.right, self.max_probability)
    }
}
