//! Benchmark setup error type.

use flowgen_core::TopologyError;

/// Errors that may occur while preparing a benchmark input.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Parameters were rejected or generation failed.
    #[error("topology setup failed: {0}")]
    Topology(#[from] TopologyError),
}
