//! Support library for the `flowgen` binary.
//!
//! Exposes argument parsing and the generate-then-write pipeline so tests can
//! drive a full run without spawning a process.

pub mod cli;
pub mod logging;
