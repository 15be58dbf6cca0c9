use std::convert::Infallible;

/// The right-hand side of a first-order ODE system `dr/ds = f(s, r)`.
///
/// A vector field maps the independent variable `s` and a state vector `r`
/// to the derivative of the state with respect to `s`. Integrators call it
/// several times per step (up to six for the adaptive method), so it must be
/// pure: the same `(s, r)` must always produce the same derivative.
///
/// The returned vector must have the same length as `r`. Integrators check
/// this and fail fast when it does not hold.
///
/// Closures of the form `Fn(f64, &[f64]) -> Vec<f64>` implement this trait
/// with [`Infallible`] as their error type. Implement it directly on a type
/// when the evaluation can fail or carries parameters worth naming.
///
/// # Example
///
/// ```
/// use stepwise_core::VectorField;
///
/// // Exponential decay: dy/ds = -y.
/// let decay = |_s: f64, r: &[f64]| vec![-r[0]];
///
/// let derivative = decay.evaluate(0.0, &[2.0]).unwrap();
/// assert_eq!(derivative, vec![-2.0]);
/// ```
pub trait VectorField {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative of the state at `(s, r)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed at this
    /// point (for example, outside the field's domain).
    fn evaluate(&self, s: f64, r: &[f64]) -> Result<Vec<f64>, Self::Error>;
}

impl<F> VectorField for F
where
    F: Fn(f64, &[f64]) -> Vec<f64>,
{
    type Error = Infallible;

    fn evaluate(&self, s: f64, r: &[f64]) -> Result<Vec<f64>, Self::Error> {
        Ok(self(s, r))
    }
}
