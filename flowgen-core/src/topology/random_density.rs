//! Dense random networks built from a symmetric adjacency matrix.

use rand::Rng;
use tracing::{debug, instrument};

use super::Topology;
use crate::{
    capacity::CapacityRange,
    edge::{Edge, EdgeList},
    error::{Result, TopologyError},
    vertex::Vertex,
};

const DEFAULT_VERTICES: usize = 500;
const DEFAULT_DENSITY: u8 = 80;
const DEFAULT_MIN_CAPACITY: u64 = 1;
const DEFAULT_MAX_CAPACITY: u64 = 2500;

/// Exclusive upper bound of the percentage draw compared against the density.
const DENSITY_SCALE: u8 = 100;

/// A symmetric adjacency matrix where `0` marks an absent pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DensityMatrix {
    order: usize,
    cells: Vec<u64>,
}

impl DensityMatrix {
    fn zeroed(order: usize) -> Result<Self> {
        let len = order.checked_mul(order).ok_or(TopologyError::Overflow {
            quantity: "density matrix size",
        })?;
        Ok(Self {
            order,
            cells: vec![0; len],
        })
    }

    /// Returns the number of rows (and columns).
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Returns the capacity stored at `(row, col)`, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        if row >= self.order || col >= self.order {
            return None;
        }
        self.cells.get(row * self.order + col).copied()
    }

    /// Returns the number of unordered pairs with a non-zero capacity.
    #[must_use]
    pub fn present_pairs(&self) -> usize {
        (0..self.order)
            .flat_map(|row| ((row + 1)..self.order).map(move |col| (row, col)))
            .filter(|&(row, col)| self.get(row, col).is_some_and(|capacity| capacity != 0))
            .count()
    }

    fn set_pair(&mut self, row: usize, col: usize, capacity: u64) {
        for index in [row * self.order + col, col * self.order + row] {
            if let Some(cell) = self.cells.get_mut(index) {
                *cell = capacity;
            }
        }
    }
}

/// A network where each unordered vertex pair is present with probability
/// `density / 100`.
///
/// Row `0` stands for the source and the last row for the sink. Emission
/// scans each row once and writes one edge per non-zero cell outside
/// column `0`, always naming the column `v<col>`:
///
/// - row `0` emits `s -> v<col>`,
/// - the last row emits `v<col> -> t`,
/// - any other row emits `v<row> -> v<col>`.
///
/// Symmetric pairs are therefore written in both directions. A sampled
/// capacity of `0` (possible when the range starts at `0`) reads as absent.
///
/// # Examples
/// ```
/// use flowgen_core::{CapacityRange, RandomDensity, Topology};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let sparse = RandomDensity::new(6, 0, CapacityRange::new(1, 9)?)?;
/// assert!(sparse.generate(&mut SmallRng::seed_from_u64(1))?.is_empty());
/// # Ok::<(), flowgen_core::TopologyError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomDensity {
    vertices: usize,
    density: u8,
    capacity: CapacityRange,
}

impl Default for RandomDensity {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
            density: DEFAULT_DENSITY,
            capacity: CapacityRange {
                min: DEFAULT_MIN_CAPACITY,
                max: DEFAULT_MAX_CAPACITY,
            },
        }
    }
}

impl RandomDensity {
    /// Validates the parameters of a random-density network.
    ///
    /// # Errors
    /// Returns [`TopologyError::TooSmall`] when fewer than two vertices are
    /// requested and [`TopologyError::DensityOutOfRange`] when `density`
    /// exceeds 100.
    pub const fn new(vertices: usize, density: u8, capacity: CapacityRange) -> Result<Self> {
        if vertices < 2 {
            return Err(TopologyError::TooSmall {
                parameter: "vertices",
                minimum: 2,
                got: vertices,
            });
        }
        if density > DENSITY_SCALE {
            return Err(TopologyError::DensityOutOfRange { density });
        }
        Ok(Self {
            vertices,
            density,
            capacity,
        })
    }

    /// Returns the matrix order, including source and sink.
    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the presence threshold on the `0..100` scale.
    #[must_use]
    pub const fn density(&self) -> u8 {
        self.density
    }

    /// Returns the capacity range present pairs draw from.
    #[must_use]
    pub const fn capacity(&self) -> CapacityRange {
        self.capacity
    }

    /// Samples the symmetric adjacency matrix.
    ///
    /// For every pair `i < j` a percentage in `0..100` is drawn; when it falls
    /// below the density both `(i, j)` and `(j, i)` receive one shared capacity.
    ///
    /// # Errors
    /// Returns [`TopologyError::Overflow`] when the matrix size does not fit
    /// in `usize`.
    pub fn sample_matrix<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DensityMatrix> {
        let mut matrix = DensityMatrix::zeroed(self.vertices)?;
        for row in 0..self.vertices {
            for col in (row + 1)..self.vertices {
                let draw = rng.gen_range(0..DENSITY_SCALE);
                if draw < self.density {
                    matrix.set_pair(row, col, self.capacity.sample(rng));
                }
            }
        }
        Ok(matrix)
    }

    /// Emits one edge per non-zero matrix cell outside column `0`, scanning
    /// rows in order.
    #[must_use]
    pub fn emit(&self, matrix: &DensityMatrix) -> EdgeList {
        let order = matrix.order();
        let last = order.saturating_sub(1);
        let mut edges = EdgeList::new();
        for row in 0..order {
            for col in 1..order {
                let Some(capacity) = matrix.get(row, col).filter(|&value| value != 0) else {
                    continue;
                };
                let other = Vertex::internal(col);
                let edge = if row == 0 {
                    Edge::new(Vertex::Source, other, capacity)
                } else if row == last {
                    Edge::new(other, Vertex::Sink, capacity)
                } else {
                    Edge::new(Vertex::internal(row), other, capacity)
                };
                edges.push(edge);
            }
        }
        edges
    }
}

impl Topology for RandomDensity {
    fn name(&self) -> &'static str {
        "random-density"
    }

    #[instrument(
        name = "topology.random_density",
        err,
        skip(self, rng),
        fields(vertices = self.vertices, density = self.density),
    )]
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<EdgeList> {
        let matrix = self.sample_matrix(rng)?;
        let edges = self.emit(&matrix);
        debug!(
            pairs = matrix.present_pairs(),
            edges = edges.len(),
            "random-density network generated"
        );
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::{fixture, rstest};

    #[fixture]
    fn capacity() -> CapacityRange {
        CapacityRange::new(1, 50).expect("valid range")
    }

    fn matrix_of(order: usize, pairs: &[(usize, usize, u64)]) -> DensityMatrix {
        let mut matrix = DensityMatrix::zeroed(order).expect("matrix fits");
        for &(row, col, value) in pairs {
            matrix.set_pair(row, col, value);
        }
        matrix
    }

    #[rstest]
    fn zero_density_leaves_the_matrix_empty(capacity: CapacityRange) {
        let graph = RandomDensity::new(20, 0, capacity).expect("valid parameters");
        let matrix = graph
            .sample_matrix(&mut SmallRng::seed_from_u64(4))
            .expect("matrix fits");
        assert_eq!(matrix.present_pairs(), 0);
        assert!(graph.emit(&matrix).is_empty());
    }

    #[rstest]
    fn full_density_fills_every_off_diagonal_pair(capacity: CapacityRange) {
        let graph = RandomDensity::new(9, 100, capacity).expect("valid parameters");
        let matrix = graph
            .sample_matrix(&mut SmallRng::seed_from_u64(6))
            .expect("matrix fits");
        for row in 0..9 {
            assert_eq!(matrix.get(row, row), Some(0));
            for col in 0..9 {
                if row != col {
                    let value = matrix.get(row, col).expect("in bounds");
                    assert!(capacity.contains(value));
                    assert_eq!(matrix.get(col, row), Some(value));
                }
            }
        }
        assert_eq!(matrix.present_pairs(), 9 * 8 / 2);
    }

    #[rstest]
    #[case(2, 1)]
    #[case(4, 9)]
    #[case(9, 64)]
    fn full_density_edge_count_follows_the_row_scan(
        capacity: CapacityRange,
        #[case] vertices: usize,
        #[case] expected: usize,
    ) {
        // Row 0 emits n - 1 edges and every later row emits n - 2.
        let graph = RandomDensity::new(vertices, 100, capacity).expect("valid parameters");
        let edges = graph
            .generate(&mut SmallRng::seed_from_u64(12))
            .expect("generation must succeed");
        assert_eq!(edges.len(), expected);
    }

    #[rstest]
    fn emission_names_boundary_rows_and_columns(capacity: CapacityRange) {
        let graph = RandomDensity::new(4, 50, capacity).expect("valid parameters");
        let matrix = matrix_of(4, &[(0, 1, 7), (0, 3, 2), (1, 2, 5), (2, 3, 9)]);
        assert_eq!(
            graph.emit(&matrix).to_text(),
            "s v1 7\ns v3 2\nv1 v2 5\nv2 v1 5\nv2 v3 9\nv2 t 9\n"
        );
    }

    #[test]
    fn full_density_names_columns_as_internal_vertices() {
        let range = CapacityRange::new(5, 5).expect("valid range");
        let graph = RandomDensity::new(4, 100, range).expect("valid parameters");
        let text = graph
            .generate(&mut SmallRng::seed_from_u64(1))
            .expect("generation must succeed")
            .to_text();
        assert_eq!(
            text,
            "s v1 5\ns v2 5\ns v3 5\nv1 v2 5\nv1 v3 5\nv2 v1 5\nv2 v3 5\nv1 t 5\nv2 t 5\n"
        );

        let mut lines: Vec<&str> = text.lines().collect();
        let emitted = lines.len();
        lines.sort_unstable();
        lines.dedup();
        assert_eq!(lines.len(), emitted);
        assert!(!lines.contains(&"s t 5"));
    }

    #[rstest]
    fn pairs_touching_the_source_column_are_emitted_once(capacity: CapacityRange) {
        let graph = RandomDensity::new(3, 50, capacity).expect("valid parameters");
        let matrix = matrix_of(3, &[(0, 1, 4)]);
        assert_eq!(graph.emit(&matrix).to_text(), "s v1 4\n");
    }

    #[rstest]
    fn zero_capacity_pairs_are_not_emitted() {
        let range = CapacityRange::new(0, 0).expect("valid range");
        let graph = RandomDensity::new(5, 100, range).expect("valid parameters");
        let edges = graph
            .generate(&mut SmallRng::seed_from_u64(3))
            .expect("generation must succeed");
        assert!(edges.is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn rejects_fewer_than_two_vertices(capacity: CapacityRange, #[case] vertices: usize) {
        let err = RandomDensity::new(vertices, 50, capacity).expect_err("too few vertices");
        assert!(matches!(err, TopologyError::TooSmall { minimum: 2, .. }));
    }

    #[rstest]
    fn rejects_density_above_one_hundred(capacity: CapacityRange) {
        let err = RandomDensity::new(10, 101, capacity).expect_err("density > 100 must fail");
        assert_eq!(err, TopologyError::DensityOutOfRange { density: 101 });
    }

    #[test]
    fn default_matches_the_reference_dense_graph() {
        let graph = RandomDensity::default();
        assert_eq!(
            (graph.vertices(), graph.density()),
            (DEFAULT_VERTICES, DEFAULT_DENSITY)
        );
        assert_eq!(
            (graph.capacity().min(), graph.capacity().max()),
            (1, 2500)
        );
    }

    #[test]
    fn get_rejects_out_of_range_coordinates() {
        let matrix = matrix_of(3, &[]);
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.get(0, 3), None);
    }
}
