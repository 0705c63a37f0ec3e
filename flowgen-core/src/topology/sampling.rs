//! Bounded rejection sampling of distinct neighbour indices.

use std::collections::HashSet;

use rand::Rng;
use tracing::warn;

use crate::{
    error::{Result, TopologyError},
    vertex::Vertex,
};

/// Draws allowed per requested neighbour before distinct sampling gives up.
///
/// Collecting all `v - 1` eligible neighbours needs about `v ln v` draws, so
/// the budget of `64 * requested` only runs out when the generator is
/// degenerate.
pub const SAMPLING_ATTEMPTS_PER_EDGE: usize = 64;

/// Samples `requested` distinct indices from `1..=vertices`, never returning
/// `exclude`, in acceptance order.
pub(super) fn sample_distinct<R: Rng + ?Sized>(
    rng: &mut R,
    vertices: usize,
    origin: Vertex,
    exclude: Option<usize>,
    requested: usize,
) -> Result<Vec<usize>> {
    let available = eligible_candidates(vertices, exclude);
    if requested > available {
        return Err(TopologyError::InsufficientCandidates {
            origin,
            available,
            requested,
        });
    }
    if requested == 0 {
        return Ok(Vec::new());
    }

    let budget = requested
        .checked_mul(SAMPLING_ATTEMPTS_PER_EDGE)
        .ok_or(TopologyError::Overflow {
            quantity: "sampling attempt budget",
        })?;

    let mut seen: HashSet<usize> = exclude.into_iter().collect();
    let mut accepted = Vec::with_capacity(requested);
    let mut attempts = 0_usize;
    while accepted.len() < requested {
        if attempts == budget {
            warn!(
                origin = %origin,
                accepted = accepted.len(),
                requested,
                attempts,
                "distinct sampling budget exhausted"
            );
            return Err(TopologyError::SamplingExhausted {
                origin,
                accepted: accepted.len(),
                requested,
                attempts,
            });
        }
        attempts += 1;
        let candidate = rng.gen_range(1..=vertices);
        if seen.insert(candidate) {
            accepted.push(candidate);
        }
    }
    Ok(accepted)
}

/// Returns how many indices in `1..=vertices` remain once `exclude` is removed.
pub(super) fn eligible_candidates(vertices: usize, exclude: Option<usize>) -> usize {
    match exclude {
        Some(index) if (1..=vertices).contains(&index) => vertices - 1,
        _ => vertices,
    }
}
