//! Random source capabilities consumed by the sampling functions.
//!
//! The sampling core never owns a generator. Every operation borrows one of
//! three capabilities for the duration of a call:
//!
//! | Capability | Method | Contract |
//! |---|---|---|
//! | [`UniformDraw`] | `uniform(max)` | value uniformly drawn from `[0, max)` |
//! | [`GaussianDraw`] | `gaussian(mean, stddev)` | normal-like draw centred at `mean` |
//! | [`Shuffler`] | `shuffle(items)` | new vector holding a permutation of `items` |
//!
//! Closures implement the first two directly, which keeps stubbing trivial:
//!
//! ```
//! use u_sample::decide::decide;
//! let mut coin = |_max: f64| 0.45;
//! assert!(decide(0.5, &mut coin));
//! ```
//!
//! [`RngSource`] adapts any [`rand::Rng`] into all three.
//!
//! # Reproducibility
//!
//! For reproducible runs, use [`create_rng`] or [`RngSource::seeded`] with a
//! fixed seed. The underlying algorithm (SmallRng) is deterministic for a
//! given seed on the same platform.

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Uniform range draw: `uniform(max)` returns a value in `[0, max)`.
///
/// `uniform(1.0)` is the canonical coin draw.
pub trait UniformDraw {
    fn uniform(&mut self, max: f64) -> f64;
}

/// Gaussian draw: `gaussian(mean, stddev)` samples a normal-like variate.
pub trait GaussianDraw {
    fn gaussian(&mut self, mean: f64, stddev: f64) -> f64;
}

/// Produces a permuted copy of a sequence.
///
/// Implementations must not mutate `items` (the shared borrow enforces it)
/// and must return every element exactly once.
pub trait Shuffler {
    fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T>;
}

/// A source providing all three capabilities.
pub trait RandomSource: UniformDraw + GaussianDraw + Shuffler {}

impl<S: UniformDraw + GaussianDraw + Shuffler> RandomSource for S {}

impl<F: FnMut(f64) -> f64> UniformDraw for F {
    fn uniform(&mut self, max: f64) -> f64 {
        self(max)
    }
}

impl<F: FnMut(f64, f64) -> f64> GaussianDraw for F {
    fn gaussian(&mut self, mean: f64, stddev: f64) -> f64 {
        self(mean, stddev)
    }
}

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_sample::source::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely.
///
/// # Algorithm
/// Iterates backwards, swapping each element with a uniformly chosen
/// earlier (or same) position.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn shuffle_in_place<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Adapter exposing a [`rand::Rng`] as a [`RandomSource`].
///
/// # Examples
/// ```
/// use u_sample::source::{RngSource, UniformDraw};
/// let mut source = RngSource::seeded(7);
/// let x = source.uniform(10.0);
/// assert!((0.0..10.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl RngSource<rand::rngs::SmallRng> {
    /// Deterministic source built with [`create_rng`].
    pub fn seeded(seed: u64) -> Self {
        Self::new(create_rng(seed))
    }

    /// Source seeded from operating-system entropy.
    pub fn from_os_rng() -> Self {
        Self::new(rand::rngs::SmallRng::from_os_rng())
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> UniformDraw for RngSource<R> {
    /// Scales a unit draw by `max`.
    ///
    /// For negative `max` the result lies in `(max, 0]`; no range is
    /// rejected.
    fn uniform(&mut self, max: f64) -> f64 {
        self.rng.random::<f64>() * max
    }
}

impl<R: Rng> GaussianDraw for RngSource<R> {
    fn gaussian(&mut self, mean: f64, stddev: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        mean + stddev * z
    }
}

impl<R: Rng> Shuffler for RngSource<R> {
    fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        shuffle_in_place(&mut out, &mut self.rng);
        out
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rng_deterministic() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let vals1: Vec<f64> = (0..10).map(|_| rng1.random()).collect();
        let vals2: Vec<f64> = (0..10).map(|_| rng2.random()).collect();
        assert_eq!(vals1, vals2);
    }

    #[test]
    fn test_shuffle_in_place_preserves_elements() {
        let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut rng = create_rng(123);
        shuffle_in_place(&mut v, &mut rng);
        v.sort();
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_shuffle_in_place_empty_and_single() {
        let mut rng = create_rng(0);
        let mut empty: Vec<i32> = vec![];
        shuffle_in_place(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![42];
        shuffle_in_place(&mut single, &mut rng);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_rng_source_shuffle_leaves_input_untouched() {
        // With 10 elements, probability of identity permutation is 1/10! ≈ 2.8e-7
        let original = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut source = RngSource::seeded(42);
        let shuffled = source.shuffle(&original);
        assert_eq!(original, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_ne!(shuffled, original, "shuffle should change order (probabilistic)");
    }

    #[test]
    fn test_rng_source_seeded_is_reproducible() {
        let mut a = RngSource::seeded(9);
        let mut b = RngSource::seeded(9);
        for _ in 0..20 {
            assert_eq!(a.uniform(5.0), b.uniform(5.0));
            assert_eq!(a.gaussian(0.5, 0.1), b.gaussian(0.5, 0.1));
        }
    }

    #[test]
    fn test_uniform_negative_max() {
        let mut source = RngSource::seeded(3);
        for _ in 0..100 {
            let x = source.uniform(-2.0);
            assert!(x > -2.0 && x <= 0.0, "got {x}");
        }
    }

    #[test]
    fn test_gaussian_moments() {
        let mut source = RngSource::seeded(11);
        let n = 20_000;
        let draws: Vec<f64> = (0..n).map(|_| source.gaussian(0.5, 0.1)).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!((mean - 0.5).abs() < 0.01, "mean {mean}");
        assert!((var.sqrt() - 0.1).abs() < 0.01, "stddev {}", var.sqrt());
    }

    #[test]
    fn test_gaussian_zero_stddev_is_mean() {
        let mut source = RngSource::seeded(1);
        assert_eq!(source.gaussian(0.3, 0.0), 0.3);
    }

    #[test]
    fn test_closures_are_sources() {
        let mut calls = 0;
        let mut uniform = |max: f64| {
            calls += 1;
            max / 2.0
        };
        assert_eq!(uniform.uniform(4.0), 2.0);
        assert_eq!(calls, 1);

        let mut gauss = |mean: f64, stddev: f64| mean + stddev;
        assert_eq!(gauss.gaussian(0.5, 0.25), 0.75);
    }

    #[test]
    fn test_into_inner_continues_stream() {
        let mut reference = create_rng(5);
        let expected: f64 = {
            let _: f64 = reference.random();
            reference.random()
        };

        let mut source = RngSource::seeded(5);
        let _ = source.uniform(1.0);
        let mut rng = source.into_inner();
        let next: f64 = rng.random();
        assert_eq!(next, expected);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn shuffle_is_permutation(
            seed in 0_u64..10000,
            data in proptest::collection::vec(0_i32..1000, 0..50),
        ) {
            let mut source = RngSource::seeded(seed);
            let mut shuffled = source.shuffle(&data);
            let mut sorted_orig = data.clone();
            sorted_orig.sort();
            shuffled.sort();
            prop_assert_eq!(sorted_orig, shuffled);
        }

        #[test]
        fn uniform_stays_in_range(
            seed in 0_u64..10000,
            max in 0.001_f64..1000.0,
        ) {
            let mut source = RngSource::seeded(seed);
            let x = source.uniform(max);
            prop_assert!(x >= 0.0 && x < max);
        }
    }
}
