//! Classical fourth-order Runge–Kutta solver.
//!
//! Four stages at fractions 0, 1/2, 1/2 and 1 of the step, combined as:
//!
//! ```text
//! r_{i} = r_{i-1} + (h / 6) · (k1 + 2·k2 + 2·k3 + k4)
//! ```
//!
//! Fourth order: halving `h` cuts the global error by about sixteen. Four
//! field evaluations per step.
//!
//! # Example
//!
//! ```
//! use stepwise_solvers::transient::rk4;
//!
//! let decay = |_s: f64, r: &[f64]| vec![-r[0]];
//!
//! let solution = rk4::solve_unobserved(&decay, &[1.0], 0.0, 11, 0.1)?;
//!
//! assert!((solution.trajectory.last().r[0] - (-1.0_f64).exp()).abs() < 1e-6);
//! # Ok::<(), rk4::Error>(())
//! ```

pub use super::fixed::{Action, Error, Event, Solution, Status};

use stepwise_core::{Observer, VectorField};

use super::{Tableau, fixed};

/// Integrates with classical Runge–Kutta.
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
    fixed::solve(&Tableau::<4>::RK4, field, r0, s0, samples, h, observer)
}

/// Integrates with classical Runge–Kutta without observation.
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
