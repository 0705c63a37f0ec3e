//! Flow-network topology generation.
//!
//! Four randomised construction strategies build directed graphs with a
//! reserved source `s` and sink `t` for max-flow/min-cut benchmarking:
//!
//! - [`FixedDegree`]: every node has exactly `e` distinct out-neighbours.
//! - [`Mesh`]: a rectangular grid fed from the first column and drained from
//!   the last.
//! - [`RandomDensity`]: a symmetric adjacency matrix where each pair is present
//!   with a percentage probability.
//! - [`Bipartite`]: a three-layer source/left/right/sink graph.
//!
//! Each strategy implements [`Topology`] and returns an owned [`EdgeList`].
//! The list is handed to an [`EdgeSink`] which writes one
//! `<tail> <head> <capacity>` line per edge.
//!
//! # Examples
//! ```
//! use flowgen_core::{Mesh, Topology};
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let mesh = Mesh::new(2, 2, 5, true)?;
//! let edges = mesh.generate(&mut SmallRng::seed_from_u64(7))?;
//! assert_eq!(edges.len(), 10);
//! assert!(edges.to_text().starts_with("s v1 5\n"));
//! # Ok::<(), flowgen_core::TopologyError>(())
//! ```

mod capacity;
mod edge;
mod error;
mod sink;
mod topology;
mod vertex;

pub use crate::{
    capacity::{CapacityPolicy, CapacityRange},
    edge::{Edge, EdgeList},
    error::{Result, SinkError, SinkErrorCode, TopologyError, TopologyErrorCode},
    sink::{EdgeSink, FileSink},
    topology::{
        Bipartite, DensityMatrix, FixedDegree, Mesh, RandomDensity, SAMPLING_ATTEMPTS_PER_EDGE,
        Topology,
    },
    vertex::Vertex,
};
