//! Probability-driven binary decisions.
//!
//! A decision consumes exactly one coin draw (`uniform(1.0)`) and compares it
//! against a probability: the outcome is "true" when `draw < p`. The
//! probability is not range-checked, so `p >= 1.0` always hits and
//! `p <= 0.0` never does for a well-behaved source.
//!
//! Two named operations cover the two calling modes:
//!
//! - [`decide`] returns the boolean itself.
//! - [`decide_with_outcomes`] returns one of two caller-supplied values.
//!
//! [`DecisionFn`] binds a source (and optionally an [`Outcomes`] pair) once
//! so a probability-only decision can be repeated.

use crate::error::{Result, SamplingError};
use crate::source::UniformDraw;

/// Returns `true` with probability `p`.
///
/// # Examples
/// ```
/// use u_sample::decide::decide;
/// let mut draw = |_max: f64| 0.45;
/// assert!(decide(0.5, &mut draw));
/// assert!(!decide(0.3, &mut draw));
/// ```
pub fn decide<R: UniformDraw + ?Sized>(p: f64, source: &mut R) -> bool {
    source.uniform(1.0) < p
}

/// Returns `on_true` with probability `p`, `on_false` otherwise.
///
/// # Examples
/// ```
/// use u_sample::decide::decide_with_outcomes;
/// let mut draw = |_max: f64| 0.55;
/// assert_eq!(decide_with_outcomes(0.5, &mut draw, "t", "f"), "f");
/// ```
pub fn decide_with_outcomes<T, R: UniformDraw + ?Sized>(
    p: f64,
    source: &mut R,
    on_true: T,
    on_false: T,
) -> T {
    if decide(p, source) {
        on_true
    } else {
        on_false
    }
}

/// The pair of values a decision resolves to.
///
/// Both values share one type, so a mismatched pair cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcomes<T> {
    on_true: T,
    on_false: T,
}

impl<T> Outcomes<T> {
    pub fn new(on_true: T, on_false: T) -> Self {
        Self { on_true, on_false }
    }

    /// Validates an outcome pair assembled from optional parts.
    ///
    /// # Returns
    /// - `Ok(Some(_))` when both values are present.
    /// - `Ok(None)` when neither is, meaning a plain boolean decision.
    ///
    /// # Errors
    /// [`SamplingError::InvalidArguments`] when exactly one value is present.
    ///
    /// # Examples
    /// ```
    /// use u_sample::decide::Outcomes;
    /// assert!(Outcomes::from_parts(Some(1), Some(2)).unwrap().is_some());
    /// assert!(Outcomes::<i32>::from_parts(None, None).unwrap().is_none());
    /// assert!(Outcomes::from_parts(Some(1), None).is_err());
    /// ```
    pub fn from_parts(on_true: Option<T>, on_false: Option<T>) -> Result<Option<Self>> {
        match (on_true, on_false) {
            (Some(t), Some(f)) => Ok(Some(Self::new(t, f))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(SamplingError::invalid_arguments(
                "outcome for the true branch given without one for the false branch",
            )),
            (None, Some(_)) => Err(SamplingError::invalid_arguments(
                "outcome for the false branch given without one for the true branch",
            )),
        }
    }

    pub fn on_true(&self) -> &T {
        &self.on_true
    }

    pub fn on_false(&self) -> &T {
        &self.on_false
    }

    /// Selects the branch value for a decision result.
    pub fn pick(&self, hit: bool) -> &T {
        if hit {
            &self.on_true
        } else {
            &self.on_false
        }
    }

    /// Makes one decision and returns the matching value.
    pub fn decide<R: UniformDraw + ?Sized>(&self, p: f64, source: &mut R) -> &T {
        self.pick(decide(p, source))
    }

    pub fn into_inner(self) -> (T, T) {
        (self.on_true, self.on_false)
    }
}

impl Default for Outcomes<bool> {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// A decision function with its random source bound once.
///
/// # Examples
/// ```
/// use u_sample::decide::{DecisionFn, Outcomes};
/// let mut coin = DecisionFn::new(|_max: f64| 0.65);
/// assert!(coin.decide(1.0));
/// assert!(!coin.decide(0.5));
///
/// let mut labelled = DecisionFn::with_outcomes(|_max: f64| 0.65, Outcomes::new("t", "f"));
/// assert_eq!(labelled.decide(0.4), "f");
/// ```
#[derive(Debug, Clone)]
pub struct DecisionFn<R, T = bool> {
    source: R,
    outcomes: Outcomes<T>,
}

impl<R: UniformDraw> DecisionFn<R, bool> {
    /// Binds `source` for plain boolean decisions.
    pub fn new(source: R) -> Self {
        Self {
            source,
            outcomes: Outcomes::default(),
        }
    }
}

impl<R: UniformDraw, T: Clone> DecisionFn<R, T> {
    /// Binds `source` together with a validated outcome pair.
    pub fn with_outcomes(source: R, outcomes: Outcomes<T>) -> Self {
        Self { source, outcomes }
    }

    /// Makes one decision with probability `p`.
    pub fn decide(&mut self, p: f64) -> T {
        self.outcomes.decide(p, &mut self.source).clone()
    }

    pub fn outcomes(&self) -> &Outcomes<T> {
        &self.outcomes
    }

    pub fn into_source(self) -> R {
        self.source
    }
}

// ============================================================================
// Tests
// ============================================================================
