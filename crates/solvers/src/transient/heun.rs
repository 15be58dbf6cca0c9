//! Heun's method (explicit trapezoidal rule).
//!
//! Predicts with an Euler step, then corrects with the average of the slopes
//! at both ends of the step:
//!
//! ```text
//! k1 = f(s_{i-1}, r_{i-1})
//! k2 = f(s_{i}, r_{i-1} + h · k1)
//! r_{i} = r_{i-1} + (h / 2) · (k1 + k2)
//! ```
//!
//! Second order: halving `h` cuts the global error by about four. Two field
//! evaluations per step.

pub use super::fixed::{Action, Error, Event, Solution, Status};

use stepwise_core::{Observer, VectorField};

use super::{Tableau, fixed};

/// Integrates with Heun's method.
///
/// See [`fixed::solve`] for the sample layout and observer behavior.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, or if the field fails or
/// returns a derivative whose length differs from `r0`.
pub fn solve<F, Obs>(
    field: &F,
    r0: &[f64],
    s0: f64,
    samples: usize,
    h: f64,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorField,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    fixed::solve(&Tableau::<2>::HEUN, field, r0, s0, samples, h, observer)
}

/// Integrates with Heun's method without observation.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, or if the field fails or
/// returns a derivative whose length differs from `r0`.
pub fn solve_unobserved<F: VectorField>(
    field: &F,
    r0: &[f64],
    s0: f64,
    samples: usize,
    h: f64,
) -> Result<Solution, Error> {
    solve(field, r0, s0, samples, h, ())
}
