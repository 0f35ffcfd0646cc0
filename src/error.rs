//! Errors raised when building or evaluating an epicycle approximation.

use thiserror::Error;

/// Everything that can go wrong in this crate.
///
/// Configuration problems (`InvalidVectorCount`, `InvalidSampleCount`) and
/// unusable inputs (`IncompatibleInput`) are raised synchronously at
/// construction time. `Evaluation` propagates a failure from the path itself
/// and can also surface lazily when a fallible path is sampled later. Nothing
/// is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EpicycleError {
    /// The requested number of rotating vectors was zero.
    #[error("vector count must be positive")]
    InvalidVectorCount,

    /// The sample count was zero or smaller than the vector count.
    #[error(
        "sample count must be positive and at least the vector count \
         (got {sample_count} samples for {vector_count} vectors)"
    )]
    InvalidSampleCount {
        sample_count: usize,
        vector_count: usize,
    },

    /// The supplied path cannot be sampled at all.
    #[error("input path cannot be sampled: {0}")]
    IncompatibleInput(&'static str),

    /// Sampling the path failed at a specific proportion.
    #[error("path evaluation failed at t = {t}: {reason}")]
    Evaluation { t: f64, reason: String },
}
