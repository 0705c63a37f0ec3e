//! Shared test utilities used across flowgen crates.

pub mod edge_list;
pub mod tracing;
