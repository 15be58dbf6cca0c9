use thiserror::Error;

use stepwise_core::VectorField;

/// Errors that can occur when evaluating a vector field during a step.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The field itself failed.
    #[error("vector field evaluation failed")]
    Field(#[source] E),

    /// The field returned a derivative of the wrong length.
    #[error("vector field returned {actual} components, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Evaluates the field at `(s, r)` and writes the derivative into `out`.
///
/// `out` must already have the state's dimension.
///
/// # Errors
///
/// Returns an error if the field fails or returns a derivative whose length
/// differs from `r`.
pub(crate) fn evaluate_into<F: VectorField>(
    field: &F,
    s: f64,
    r: &[f64],
    out: &mut [f64],
) -> Result<(), EvalError<F::Error>> {
    let derivative = field.evaluate(s, r).map_err(EvalError::Field)?;

    if derivative.len() != out.len() {
        return Err(EvalError::DimensionMismatch {
            expected: out.len(),
            actual: derivative.len(),
        });
    }

    out.copy_from_slice(&derivative);
    Ok(())
}
