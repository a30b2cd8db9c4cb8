//! # u-sample
//!
//! Probability-driven sampling helpers over a caller-supplied random source.
//!
//! The crate never owns randomness. Each operation borrows a capability
//! ([`source::UniformDraw`], [`source::GaussianDraw`], [`source::Shuffler`])
//! for one call, so results are reproducible with a seeded source and
//! testable with stubs.
//!
//! ## Modules
//!
//! - [`decide`] — Weighted boolean outcomes and bound decision functions
//! - [`sample`] — Uniform, gaussian-biased and weighted picks, shuffling,
//!   sampling without replacement
//! - [`source`] — Capability traits and the [`source::RngSource`] adapter over `rand`
//! - [`sampler`] — [`sampler::Sampler`], a source bound once with every operation as a method
//! - [`config`] — Gaussian defaults and sampler settings
//! - [`error`] — [`SamplingError`]
//!
//! ## Design Philosophy
//!
//! - **Injected randomness**: no global generator, no hidden state
//! - **Inherited edge cases kept**: weighted sampling with zero or negative
//!   weights falls back to a uniform pick rather than rejecting the input
//! - **Property-based testing**: sampling invariants verified via proptest

pub mod config;
pub mod decide;
pub mod error;
pub mod sample;
pub mod sampler;
pub mod source;

pub use error::{Result, SamplingError};
