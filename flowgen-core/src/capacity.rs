//! Capacity sampling shared by every topology strategy.

use rand::Rng;

use crate::error::{Result, TopologyError};

/// An inclusive `[min, max]` range of edge capacities.
///
/// # Examples
/// ```
/// use flowgen_core::CapacityRange;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let range = CapacityRange::new(3, 9)?;
/// let capacity = range.sample(&mut SmallRng::seed_from_u64(1));
/// assert!((3..=9).contains(&capacity));
/// assert!(CapacityRange::new(9, 3).is_err());
/// # Ok::<(), flowgen_core::TopologyError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CapacityRange {
    pub(crate) min: u64,
    pub(crate) max: u64,
}

impl CapacityRange {
    /// Validates and builds a capacity range.
    ///
    /// # Errors
    /// Returns [`TopologyError::InvalidCapacityRange`] when `min > max`.
    pub const fn new(min: u64, max: u64) -> Result<Self> {
        if min > max {
            return Err(TopologyError::InvalidCapacityRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> u64 {
        self.min
    }

    /// Returns the inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> u64 {
        self.max
    }

    /// Returns whether `capacity` lies within the range.
    #[must_use]
    pub const fn contains(&self, capacity: u64) -> bool {
        self.min <= capacity && capacity <= self.max
    }

    /// Draws a uniformly distributed capacity from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.gen_range(self.min..=self.max)
    }

    /// Maps a unit value onto the range as `floor(min + value * (max - min + 1))`.
    ///
    /// Values are clamped to `[0, 1]` first and the result never exceeds
    /// `max`, so a draw of exactly `1.0` lands on the upper bound.
    ///
    /// # Examples
    /// ```
    /// use flowgen_core::CapacityRange;
    ///
    /// let range = CapacityRange::new(10, 19)?;
    /// assert_eq!(range.scale(0.0), 10);
    /// assert_eq!(range.scale(0.55), 15);
    /// assert_eq!(range.scale(1.0), 19);
    /// # Ok::<(), flowgen_core::TopologyError>(())
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the coupled bipartite capacity is defined over a unit float draw"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "capacity spans far beyond 2^52 are not meaningful for benchmarks"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the floored offset is non-negative and bounded by the span"
    )]
    pub fn scale(&self, value: f64) -> u64 {
        let unit = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        let span = (self.max - self.min) as f64 + 1.0;
        let offset = (unit * span).floor() as u64;
        self.min.saturating_add(offset).min(self.max)
    }
}

/// How a strategy assigns a capacity to each emitted edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CapacityPolicy {
    /// Every edge receives the same capacity.
    Constant(u64),
    /// Each edge receives an independent uniform draw from the range.
    Uniform(CapacityRange),
}

impl CapacityPolicy {
    /// Returns the next capacity. Constant policies do not consume randomness.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match self {
            Self::Constant(capacity) => *capacity,
            Self::Uniform(range) => range.sample(rng),
        }
    }

    /// Returns the inclusive bounds every sampled capacity falls within.
    #[must_use]
    pub const fn bounds(&self) -> (u64, u64) {
        match self {
            Self::Constant(capacity) => (*capacity, *capacity),
            Self::Uniform(range) => (range.min, range.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 2500)]
    #[case(7, 7)]
    fn new_accepts_ordered_bounds(#[case] min: u64, #[case] max: u64) {
        let range = CapacityRange::new(min, max).expect("ordered bounds must be accepted");
        assert_eq!((range.min(), range.max()), (min, max));
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        let err = CapacityRange::new(5, 4).expect_err("min > max must fail");
        assert_eq!(err, TopologyError::InvalidCapacityRange { min: 5, max: 4 });
    }

    #[test]
    fn sample_stays_within_bounds() {
        let range = CapacityRange::new(2, 6).expect("valid range");
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..1_000 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn degenerate_range_always_returns_its_bound() {
        let range = CapacityRange::new(42, 42).expect("valid range");
        let mut rng = SmallRng::seed_from_u64(9);
        assert!((0..50).all(|_| range.sample(&mut rng) == 42));
    }

    #[rstest]
    #[case(0.0, 1)]
    #[case(0.099, 1)]
    #[case(0.1, 2)]
    #[case(0.999, 10)]
    #[case(1.0, 10)]
    #[case(-3.0, 1)]
    #[case(7.5, 10)]
    #[case(f64::NAN, 1)]
    fn scale_maps_unit_values_onto_the_range(#[case] value: f64, #[case] expected: u64) {
        let range = CapacityRange::new(1, 10).expect("valid range");
        assert_eq!(range.scale(value), expected);
    }

    #[test]
    fn scale_is_monotonic() {
        let range = CapacityRange::new(1, 2500).expect("valid range");
        let scaled: Vec<u64> = (0..=100)
            .map(|step| range.scale(f64::from(step) / 100.0))
            .collect();
        assert!(scaled.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn constant_policy_ignores_randomness() {
        let policy = CapacityPolicy::Constant(5);
        let mut rng = SmallRng::seed_from_u64(11);
        assert!((0..20).all(|_| policy.sample(&mut rng) == 5));
        assert_eq!(policy.bounds(), (5, 5));
    }

    #[test]
    fn uniform_policy_reports_range_bounds() {
        let policy = CapacityPolicy::Uniform(CapacityRange::new(1, 9).expect("valid range"));
        assert_eq!(policy.bounds(), (1, 9));
    }
}
