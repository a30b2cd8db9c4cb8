//! Sampler configuration.
//!
//! With the `serde` feature enabled both types deserialize from partial
//! documents; missing fields take their defaults.

/// Centre and spread of the gaussian draw used by gaussian sampling.
///
/// Both values live in the normalized `[0, 1]` index domain: `mean = 0.5`
/// favours the middle of a sequence, a larger `stddev` spreads picks
/// further out. Neither is validated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaussianParams {
    pub mean: f64,
    pub stddev: f64,
}

impl GaussianParams {
    pub const DEFAULT_MEAN: f64 = 0.5;
    pub const DEFAULT_STDDEV: f64 = 0.1;

    pub fn new(mean: f64, stddev: f64) -> Self {
        Self { mean, stddev }
    }
}

impl Default for GaussianParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MEAN, Self::DEFAULT_STDDEV)
    }
}

/// Settings for building a [`Sampler`](crate::sampler::Sampler).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerConfig {
    /// Seed for a reproducible source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub gaussian: GaussianParams,
}

impl SamplerConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_gaussian(mut self, gaussian: GaussianParams) -> Self {
        self.gaussian = gaussian;
        self
    }
}
