use std::error::Error as StdError;

use crate::transient::{EvalError, ParamError};

use super::ConfigError;

/// Errors that can occur during adaptive integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("vector field returned {actual} components, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("vector field error: {0}")]
    Field(#[source] Box<dyn StdError + Send + Sync>),

    /// The step was rejected more often than the configured retry limit.
    #[error("no acceptable step for slot {slot} after {retries} retries (last step size {step:e})")]
    NonConvergence {
        /// Sample index that could not be produced.
        slot: usize,

        /// Last attempted step size.
        step: f64,

        /// Rejections for this slot.
        retries: usize,
    },

    /// The error estimate is not a number, so no step size can be derived.
    #[error("error estimate is not a number at slot {slot} (step size {step:e})")]
    NonFiniteEstimate {
        /// Sample index being produced.
        slot: usize,

        /// Step size of the failed attempt.
        step: f64,
    },
}

impl<E> From<EvalError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<E>) -> Self {
        match err {
            EvalError::Field(e) => Self::Field(Box::new(e)),
            EvalError::DimensionMismatch { expected, actual } => {
                Self::DimensionMismatch { expected, actual }
            }
        }
    }
}
