//! Element sampling from slices.
//!
//! Every operation borrows its input immutably and its random source
//! mutably for the duration of the call. Single picks return a reference
//! into the input; multi-element results are new vectors of clones.
//!
//! # Operations
//!
//! | Function | Source | Picks |
//! |---|---|---|
//! | [`sample`] | [`UniformDraw`] | one element, uniform |
//! | [`sample_gaussian`] | [`GaussianDraw`] | one element, biased around a normalized mean |
//! | [`sample_weighted`] | [`UniformDraw`] | one element, by cumulative weight |
//! | [`shuffle`] | [`Shuffler`] | permuted copy |
//! | [`sample_multiple`] | [`Shuffler`] | `k` distinct elements |

use tracing::trace;

use crate::config::GaussianParams;
use crate::error::{Result, SamplingError};
use crate::source::{GaussianDraw, Shuffler, UniformDraw};

/// Linear map of `value` from the `from` interval onto the `to` interval.
/// Values outside `from` extrapolate.
fn remap(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    (value - from.0) / (from.1 - from.0) * (to.1 - to.0) + to.0
}

/// Maps a real-valued draw to an index in `[0, len)`.
///
/// Floors first, then clamps, so tail draws land on the first or last
/// element. NaN maps to 0. `len` must be non-zero.
fn index_from_draw(draw: f64, len: usize) -> usize {
    let last = len - 1;
    let floored = draw.floor();
    if floored.is_nan() || floored < 0.0 {
        trace!(draw, len, "draw below index range, clamped to first element");
        0
    } else if floored > last as f64 {
        trace!(draw, len, "draw above index range, clamped to last element");
        last
    } else {
        floored as usize
    }
}

/// Picks one element uniformly at random.
///
/// Draws `index = floor(source.uniform(len))`.
///
/// # Errors
/// [`SamplingError::EmptySequence`] if `items` is empty. No draw is made.
///
/// # Examples
/// ```
/// use u_sample::sample::sample;
/// let items = ["a", "b", "c"];
/// let picked = sample(&items, &mut |max: f64| max * 0.5).unwrap();
/// assert_eq!(*picked, "b");
/// ```
pub fn sample<'a, T, R: UniformDraw + ?Sized>(items: &'a [T], source: &mut R) -> Result<&'a T> {
    if items.is_empty() {
        return Err(SamplingError::EmptySequence);
    }
    let idx = index_from_draw(source.uniform(items.len() as f64), items.len());
    Ok(&items[idx])
}

/// Picks one element, biased by a gaussian draw over the normalized
/// index domain.
///
/// # Algorithm
/// 1. `val = source.gaussian(params.mean, params.stddev)`
/// 2. remap `val` linearly from `[0, 1]` to `[0, len]`
/// 3. `idx = clamp(floor(mapped), 0, len - 1)`
///
/// Because gaussian tails are unbounded, step 3 is what keeps the index
/// valid.
///
/// # Errors
/// [`SamplingError::EmptySequence`] if `items` is empty.
///
/// # Examples
/// ```
/// use u_sample::config::GaussianParams;
/// use u_sample::sample::sample_gaussian;
/// let items = [0, 1, 2, 3, 4];
/// let mut centred = |mean: f64, _stddev: f64| mean;
/// let picked = sample_gaussian(&items, GaussianParams::default(), &mut centred).unwrap();
/// assert_eq!(*picked, 2);
/// ```
pub fn sample_gaussian<'a, T, R: GaussianDraw + ?Sized>(
    items: &'a [T],
    params: GaussianParams,
    source: &mut R,
) -> Result<&'a T> {
    if items.is_empty() {
        return Err(SamplingError::EmptySequence);
    }
    let val = source.gaussian(params.mean, params.stddev);
    let mapped = remap(val, (0.0, 1.0), (0.0, items.len() as f64));
    Ok(&items[index_from_draw(mapped, items.len())])
}

/// Prefix sums of a weight sequence, reusable across draws.
///
/// Weights are taken as given: zero and negative entries are kept, so the
/// cumulative sequence may be non-monotonic. When a draw exceeds no prefix
/// sum (all weights zero, a non-positive total, or mixed signs), the pick
/// falls back to a uniform index.
///
/// # Examples
/// ```
/// use u_sample::sample::CumulativeWeights;
/// let table = CumulativeWeights::new(&[1.0, 2.0, 3.0]);
/// assert_eq!(table.cumulative(), &[1.0, 3.0, 6.0]);
/// assert_eq!(table.total(), 6.0);
/// let idx = table.pick_index(&mut |_max: f64| 2.5).unwrap();
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeWeights {
    cumulative: Vec<f64>,
    total: f64,
}

impl CumulativeWeights {
    pub fn new(weights: &[f64]) -> Self {
        let cumulative = weights
            .iter()
            .scan(0.0, |acc, &w| {
                *acc += w;
                Some(*acc)
            })
            .collect();
        let total = weights.iter().sum();
        Self { cumulative, total }
    }

    /// Plain sum of the weights, negatives included.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Draws an index according to the weights.
    ///
    /// Draws `r = source.uniform(total)` and returns the first index whose
    /// prefix sum exceeds `r`. Otherwise makes a second draw and picks
    /// uniformly.
    ///
    /// # Errors
    /// [`SamplingError::EmptySequence`] if the table is empty.
    ///
    /// # Complexity
    /// O(n) per draw.
    pub fn pick_index<R: UniformDraw + ?Sized>(&self, source: &mut R) -> Result<usize> {
        if self.is_empty() {
            return Err(SamplingError::EmptySequence);
        }
        let r = source.uniform(self.total);
        if let Some(idx) = self.cumulative.iter().position(|&acc| r < acc) {
            return Ok(idx);
        }
        trace!(
            total = self.total,
            draw = r,
            "no cumulative weight exceeds draw, falling back to uniform pick"
        );
        let len = self.len();
        Ok(index_from_draw(source.uniform(len as f64), len))
    }
}

/// Picks one value according to parallel weights.
///
/// See [`CumulativeWeights`] for the selection rule and its fallback. The
/// returned value can be of any type.
///
/// # Errors
/// - [`SamplingError::LengthMismatch`] if `values` and `weights` differ in
///   length.
/// - [`SamplingError::EmptySequence`] if both are empty.
///
/// # Examples
/// ```
/// use u_sample::sample::sample_weighted;
/// let values = ["rare", "common"];
/// let picked = sample_weighted(&values, &[0.0, 3.0], &mut |max: f64| max * 0.9).unwrap();
/// assert_eq!(*picked, "common");
/// ```
pub fn sample_weighted<'a, T, R: UniformDraw + ?Sized>(
    values: &'a [T],
    weights: &[f64],
    source: &mut R,
) -> Result<&'a T> {
    if values.len() != weights.len() {
        return Err(SamplingError::LengthMismatch {
            values: values.len(),
            weights: weights.len(),
        });
    }
    let idx = CumulativeWeights::new(weights).pick_index(source)?;
    Ok(&values[idx])
}

/// Returns a permuted copy of `items`, as produced by `shuffler`.
///
/// The permutation itself is entirely the shuffler's; `items` is not
/// touched.
pub fn shuffle<T: Clone, S: Shuffler + ?Sized>(items: &[T], shuffler: &mut S) -> Vec<T> {
    shuffler.shuffle(items)
}

/// Draws `count` distinct elements without replacement.
///
/// Shuffles a copy of `items` and keeps the first `count` elements in
/// shuffled order.
///
/// # Errors
/// [`SamplingError::InsufficientElements`] if `count > items.len()`. The
/// check happens before any shuffle.
///
/// # Examples
/// ```
/// use u_sample::sample::sample_multiple;
/// use u_sample::source::RngSource;
/// let items = [1, 2, 3, 4, 5];
/// let mut source = RngSource::seeded(42);
/// let picked = sample_multiple(&items, 2, &mut source).unwrap();
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
/// ```
pub fn sample_multiple<T: Clone, S: Shuffler + ?Sized>(
    items: &[T],
    count: usize,
    shuffler: &mut S,
) -> Result<Vec<T>> {
    if count > items.len() {
        return Err(SamplingError::InsufficientElements {
            requested: count,
            available: items.len(),
        });
    }
    let mut shuffled = shuffle(items, shuffler);
    shuffled.truncate(count);
    Ok(shuffled)
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::source::RngSource;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn sample_gaussian_index_in_range(
            len in 1_usize..50,
            val in -1.0e6_f64..1.0e6,
        ) {
            let items: Vec<usize> = (0..len).collect();
            let picked = *sample_gaussian(&items, GaussianParams::default(), &mut |_: f64, _: f64| val).unwrap();
            prop_assert!(picked < len);
        }

        #[test]
        fn sample_weighted_all_zero_returns_member(
            len in 1_usize..20,
            draw in 0.0_f64..1.0,
        ) {
            let values: Vec<usize> = (0..len).collect();
            let weights = vec![0.0; len];
            let mut source = |max: f64| max * draw;
            let picked = *sample_weighted(&values, &weights, &mut source).unwrap();
            prop_assert!(picked < len);
        }

        #[test]
        fn sample_weighted_returns_member_for_any_weights(
            seed in 0_u64..10000,
            weights in proptest::collection::vec(-10.0_f64..10.0, 1..20),
        ) {
            let values: Vec<usize> = (0..weights.len()).collect();
            let mut source = RngSource::seeded(seed);
            let picked = *sample_weighted(&values, &weights, &mut source).unwrap();
            prop_assert!(picked < weights.len());
        }

        #[test]
        fn sample_multiple_distinct_members(
            seed in 0_u64..10000,
            len in 0_usize..40,
            k_frac in 0.0_f64..=1.0,
        ) {
            let items: Vec<usize> = (0..len).collect();
            let k = ((len as f64) * k_frac).floor() as usize;
            let mut source = RngSource::seeded(seed);
            let picked = sample_multiple(&items, k, &mut source).unwrap();
            prop_assert_eq!(picked.len(), k);
            let mut sorted = picked.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), k);
            prop_assert!(picked.iter().all(|&x| x < len));
        }

        #[test]
        fn sample_multiple_rejects_excess(
            len in 0_usize..20,
            extra in 1_usize..10,
        ) {
            let items: Vec<usize> = (0..len).collect();
            let mut source = RngSource::seeded(0);
            let result = sample_multiple(&items, len + extra, &mut source);
            prop_assert!(
                matches!(result, Err(SamplingError::InsufficientElements { .. })),
                "expected InsufficientElements"
            );
        }
    }
}
