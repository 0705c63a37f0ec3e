//! Error types for the flowgen core library.
//!
//! Parameter and sampling failures surface as [`TopologyError`] before any
//! edge is emitted; write failures surface as [`SinkError`].

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::vertex::Vertex;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced while validating parameters or generating a topology.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TopologyError {
    /// The capacity lower bound exceeded the upper bound.
    #[error("max capacity must be greater than or equal to min capacity (min={min}, max={max})")]
    InvalidCapacityRange {
        /// Lower bound supplied by the caller.
        min: u64,
        /// Upper bound supplied by the caller.
        max: u64,
    },
    /// A capacity bound of zero was supplied where edges need a positive capacity.
    #[error("capacity bound must be at least 1")]
    ZeroCapacity,
    /// A structural count was below its minimum.
    #[error("{parameter} must be at least {minimum} (got {got})")]
    TooSmall {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Smallest accepted value.
        minimum: usize,
        /// Value supplied by the caller.
        got: usize,
    },
    /// The fixed out-degree exceeded the number of vertices.
    #[error("out-degree ({out_degree}) must not exceed the number of vertices ({vertices})")]
    OutDegreeExceedsVertices {
        /// Requested out-degree.
        out_degree: usize,
        /// Number of internal vertices.
        vertices: usize,
    },
    /// The density percentage was above 100.
    #[error("density must lie within 0..=100 (got {density})")]
    DensityOutOfRange {
        /// Density supplied by the caller.
        density: u8,
    },
    /// The connection probability was not a finite value in `[0, 1]`.
    #[error("max probability must be finite and within [0, 1] (got {probability})")]
    ProbabilityOutOfRange {
        /// Probability supplied by the caller.
        probability: f64,
    },
    /// Fewer distinct candidates exist than edges were requested for a node.
    #[error("`{origin}` needs {requested} distinct neighbours but only {available} are eligible")]
    InsufficientCandidates {
        /// Node whose neighbourhood was being sampled.
        origin: Vertex,
        /// Number of eligible candidates.
        available: usize,
        /// Number of distinct neighbours requested.
        requested: usize,
    },
    /// Rejection sampling ran out of attempts before finding enough neighbours.
    #[error(
        "sampling for `{origin}` gave up after {attempts} draws with {accepted} of {requested} neighbours chosen"
    )]
    SamplingExhausted {
        /// Node whose neighbourhood was being sampled.
        origin: Vertex,
        /// Distinct neighbours accepted before giving up.
        accepted: usize,
        /// Number of distinct neighbours requested.
        requested: usize,
        /// Draws spent before giving up.
        attempts: usize,
    },
    /// A derived count did not fit in `usize`.
    #[error("{quantity} overflows usize")]
    Overflow {
        /// Description of the overflowing quantity.
        quantity: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`TopologyError`] variants.
    enum TopologyErrorCode for TopologyError {
        /// The capacity lower bound exceeded the upper bound.
        InvalidCapacityRange => InvalidCapacityRange { .. } => "TOPOLOGY_INVALID_CAPACITY_RANGE",
        /// A capacity bound of zero was supplied.
        ZeroCapacity => ZeroCapacity => "TOPOLOGY_ZERO_CAPACITY",
        /// A structural count was below its minimum.
        TooSmall => TooSmall { .. } => "TOPOLOGY_TOO_SMALL",
        /// The fixed out-degree exceeded the number of vertices.
        OutDegreeExceedsVertices => OutDegreeExceedsVertices { .. } => "TOPOLOGY_OUT_DEGREE_EXCEEDS_VERTICES",
        /// The density percentage was above 100.
        DensityOutOfRange => DensityOutOfRange { .. } => "TOPOLOGY_DENSITY_OUT_OF_RANGE",
        /// The connection probability was outside `[0, 1]`.
        ProbabilityOutOfRange => ProbabilityOutOfRange { .. } => "TOPOLOGY_PROBABILITY_OUT_OF_RANGE",
        /// Fewer distinct candidates exist than were requested.
        InsufficientCandidates => InsufficientCandidates { .. } => "TOPOLOGY_INSUFFICIENT_CANDIDATES",
        /// Rejection sampling ran out of attempts.
        SamplingExhausted => SamplingExhausted { .. } => "TOPOLOGY_SAMPLING_EXHAUSTED",
        /// A derived count overflowed.
        Overflow => Overflow { .. } => "TOPOLOGY_OVERFLOW",
    }
}

/// Error produced while writing an edge list to its destination.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SinkError {
    /// Creating, writing, syncing or renaming the output failed.
    #[error("failed to write edge list to `{path}`: {source}")]
    Io {
        /// Destination that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`SinkError`] variants.
    enum SinkErrorCode for SinkError {
        /// Creating, writing, syncing or renaming the output failed.
        Io => Io { .. } => "SINK_IO",
    }
}

/// Convenient alias for results returned by the topology API.
pub type Result<T> = core::result::Result<T, TopologyError>;
