//! A random source bound once, with every sampling operation as a method.
//!
//! [`Sampler`] holds an optional source. Methods on a sampler without a
//! source return [`SamplingError::MissingRandomSource`] instead of
//! drawing.
//!
//! # Examples
//! ```
//! use u_sample::config::SamplerConfig;
//! use u_sample::sampler::Sampler;
//!
//! let mut sampler = Sampler::from_config(&SamplerConfig::seeded(42));
//! let picked = sampler.sample(&["a", "b", "c"]).unwrap();
//! assert!(["a", "b", "c"].contains(picked));
//!
//! let three = sampler.sample_multiple(&[1, 2, 3, 4, 5], 3).unwrap();
//! assert_eq!(three.len(), 3);
//! ```

use rand::rngs::SmallRng;
use tracing::debug;

use crate::config::{GaussianParams, SamplerConfig};
use crate::decide;
use crate::error::{Result, SamplingError};
use crate::sample;
use crate::source::{RandomSource, RngSource};

/// Sampling operations over a bound random source.
#[derive(Debug, Clone)]
pub struct Sampler<R = RngSource<SmallRng>> {
    source: Option<R>,
    gaussian: GaussianParams,
}

impl<R> Default for Sampler<R> {
    fn default() -> Self {
        Self {
            source: None,
            gaussian: GaussianParams::default(),
        }
    }
}

impl Sampler<RngSource<SmallRng>> {
    /// Builds a sampler backed by `SmallRng`.
    ///
    /// Seeds deterministically when `config.seed` is set and from OS
    /// entropy otherwise.
    pub fn from_config(config: &SamplerConfig) -> Self {
        let source = match config.seed {
            Some(seed) => {
                debug!(seed, "building seeded sampler");
                RngSource::seeded(seed)
            }
            None => {
                debug!("building sampler seeded from OS entropy");
                RngSource::from_os_rng()
            }
        };
        Self::with_source(source).with_gaussian(config.gaussian)
    }
}

impl<R: RandomSource> Sampler<R> {
    /// A sampler with no source bound.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: R) -> Self {
        Self {
            source: Some(source),
            gaussian: GaussianParams::default(),
        }
    }

    /// Replaces the gaussian parameters used by [`Sampler::sample_gaussian`].
    pub fn with_gaussian(mut self, gaussian: GaussianParams) -> Self {
        self.gaussian = gaussian;
        self
    }

    pub fn gaussian_params(&self) -> GaussianParams {
        self.gaussian
    }

    /// Binds `source`, returning the previously bound one.
    pub fn set_source(&mut self, source: R) -> Option<R> {
        self.source.replace(source)
    }

    pub fn take_source(&mut self) -> Option<R> {
        self.source.take()
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    fn source_mut(&mut self) -> Result<&mut R> {
        self.source.as_mut().ok_or(SamplingError::MissingRandomSource)
    }

    /// See [`decide::decide`].
    pub fn decide(&mut self, p: f64) -> Result<bool> {
        Ok(decide::decide(p, self.source_mut()?))
    }

    /// See [`decide::decide_with_outcomes`].
    pub fn decide_with_outcomes<T>(&mut self, p: f64, on_true: T, on_false: T) -> Result<T> {
        Ok(decide::decide_with_outcomes(
            p,
            self.source_mut()?,
            on_true,
            on_false,
        ))
    }

    /// See [`sample::sample`].
    pub fn sample<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        sample::sample(items, self.source_mut()?)
    }

    /// See [`sample::sample_gaussian`]. Uses the sampler's gaussian
    /// parameters.
    pub fn sample_gaussian<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        let params = self.gaussian;
        sample::sample_gaussian(items, params, self.source_mut()?)
    }

    /// See [`sample::sample_weighted`].
    pub fn sample_weighted<'a, T>(&mut self, values: &'a [T], weights: &[f64]) -> Result<&'a T> {
        sample::sample_weighted(values, weights, self.source_mut()?)
    }

    /// See [`sample::shuffle`].
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Result<Vec<T>> {
        Ok(sample::shuffle(items, self.source_mut()?))
    }

    /// See [`sample::sample_multiple`].
    pub fn sample_multiple<T: Clone>(&mut self, items: &[T], count: usize) -> Result<Vec<T>> {
        sample::sample_multiple(items, count, self.source_mut()?)
    }
}
