use std::error::Error as StdError;

use crate::transient::{EvalError, ParamError};

/// Errors that can occur during fixed-step integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),

    #[error("vector field returned {actual} components, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("vector field error: {0}")]
    Field(#[source] Box<dyn StdError + Send + Sync>),
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
