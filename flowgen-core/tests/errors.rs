//! Stable error codes and messages exposed by the core API.

use std::io;

use flowgen_core::{SinkError, SinkErrorCode, TopologyError, TopologyErrorCode, Vertex};
use rstest::rstest;

#[rstest]
#[case(
    TopologyError::InvalidCapacityRange { min: 3, max: 1 },
    TopologyErrorCode::InvalidCapacityRange,
    "TOPOLOGY_INVALID_CAPACITY_RANGE",
)]
#[case(TopologyError::ZeroCapacity, TopologyErrorCode::ZeroCapacity, "TOPOLOGY_ZERO_CAPACITY")]
#[case(
    TopologyError::TooSmall { parameter: "rows", minimum: 1, got: 0 },
    TopologyErrorCode::TooSmall,
    "TOPOLOGY_TOO_SMALL",
)]
#[case(
    TopologyError::OutDegreeExceedsVertices { out_degree: 5, vertices: 4 },
    TopologyErrorCode::OutDegreeExceedsVertices,
    "TOPOLOGY_OUT_DEGREE_EXCEEDS_VERTICES",
)]
#[case(
    TopologyError::DensityOutOfRange { density: 120 },
    TopologyErrorCode::DensityOutOfRange,
    "TOPOLOGY_DENSITY_OUT_OF_RANGE",
)]
#[case(
    TopologyError::ProbabilityOutOfRange { probability: 1.5 },
    TopologyErrorCode::ProbabilityOutOfRange,
    "TOPOLOGY_PROBABILITY_OUT_OF_RANGE",
)]
#[case(
    TopologyError::InsufficientCandidates { origin: Vertex::internal(1), available: 2, requested: 3 },
    TopologyErrorCode::InsufficientCandidates,
    "TOPOLOGY_INSUFFICIENT_CANDIDATES",
)]
#[case(
    TopologyError::SamplingExhausted {
        origin: Vertex::Source,
        accepted: 1,
        requested: 2,
        attempts: 128,
    },
    TopologyErrorCode::SamplingExhausted,
    "TOPOLOGY_SAMPLING_EXHAUSTED",
)]
#[case(
    TopologyError::Overflow { quantity: "mesh cell count" },
    TopologyErrorCode::Overflow,
    "TOPOLOGY_OVERFLOW",
)]
fn returns_expected_topology_code(
    #[case] error: TopologyError,
    #[case] expected: TopologyErrorCode,
    #[case] raw: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), raw);
    assert_eq!(expected.to_string(), raw);
}

#[test]
fn sink_errors_report_their_code_and_path() {
    let error = SinkError::Io {
        path: "Mesh/graph.txt".into(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(error.code(), SinkErrorCode::Io);
    assert_eq!(error.code().as_str(), "SINK_IO");
    assert_eq!(
        error.to_string(),
        "failed to write edge list to `Mesh/graph.txt`: denied"
    );
}

#[rstest]
#[case(
    TopologyError::InvalidCapacityRange { min: 9, max: 2 },
    "max capacity must be greater than or equal to min capacity (min=9, max=2)",
)]
#[case(
    TopologyError::OutDegreeExceedsVertices { out_degree: 5, vertices: 4 },
    "out-degree (5) must not exceed the number of vertices (4)",
)]
#[case(
    TopologyError::InsufficientCandidates { origin: Vertex::internal(3), available: 2, requested: 3 },
    "`v3` needs 3 distinct neighbours but only 2 are eligible",
)]
fn messages_explain_the_failure(#[case] error: TopologyError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}
