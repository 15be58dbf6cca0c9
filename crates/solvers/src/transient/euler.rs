//! Forward Euler solver.
//!
//! Steps the state along the tangent at the start of each step:
//!
//! ```text
//! r_{i} = r_{i-1} + h · f(s_{i-1}, r_{i-1})
//! ```
//!
//! First order: halving `h` roughly halves the global error. One field
//! evaluation per step.
//!
//! # Example
//!
//! ```
//! use stepwise_solvers::transient::euler;
//!
//! let decay = |_s: f64, r: &[f64]| vec![-r[0]];
//!
//! let solution = euler::solve_unobserved(&decay, &[1.0], 0.0, 11, 0.1)?;
//!
//! // Each step multiplies the state by (1 - h).
//! assert!((solution.trajectory.last().r[0] - 0.9_f64.powi(10)).abs() < 1e-12);
//! # Ok::<(), euler::Error>(())
//! ```

pub use super::fixed::{Action, Error, Event, Solution, Status};

use stepwise_core::{Observer, VectorField};

use super::{Tableau, fixed};

/// Integrates with forward Euler.
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
    fixed::solve(&Tableau::<1>::EULER, field, r0, s0, samples, h, observer)
}

/// Integrates with forward Euler without observation.
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
