//! Error type shared by every sampling operation.

/// Result alias used throughout the crate.
pub type Result<T, E = SamplingError> = core::result::Result<T, E>;

/// Failures raised by the sampling operations.
///
/// Every error is returned at the call that detects it. Nothing is retried
/// and no partial result is produced.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    /// An outcome pair was only partially supplied.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The operation needs a random source and none is bound.
    #[error("a random source is required but none was provided")]
    MissingRandomSource,

    /// A single element was requested from an empty sequence.
    #[error("cannot sample from an empty sequence")]
    EmptySequence,

    /// Values and weights differ in length.
    #[error("values and weights must have the same length (values: {values}, weights: {weights})")]
    LengthMismatch { values: usize, weights: usize },

    /// More samples were requested than the sequence holds.
    #[error("cannot draw {requested} samples without replacement from {available} elements")]
    InsufficientElements { requested: usize, available: usize },
}

impl SamplingError {
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SamplingError::LengthMismatch {
            values: 3,
            weights: 2,
        };
        assert_eq!(
            err.to_string(),
            "values and weights must have the same length (values: 3, weights: 2)"
        );

        let err = SamplingError::InsufficientElements {
            requested: 5,
            available: 2,
        };
        assert!(err.to_string().contains("5 samples"));

        let err = SamplingError::invalid_arguments("only one outcome supplied");
        assert_eq!(
            err.to_string(),
            "invalid arguments: only one outcome supplied"
        );
    }
}
