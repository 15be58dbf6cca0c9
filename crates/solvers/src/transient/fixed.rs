//! Shared driver for the fixed-step explicit Runge–Kutta solvers.
//!
//! Every fixed-step method advances the state the same way:
//!
//! ```text
//! s_{i} = s_{i-1} + h
//! r_{i} = r_{i-1} + h · Σ b_j · k_j
//! ```
//!
//! where the stages `k_j` and weights `b_j` come from the method's
//! [`Tableau`]. The [`euler`](super::euler), [`heun`](super::heun) and
//! [`rk4`](super::rk4) modules are thin wrappers that pick the tableau.
//!
//! # Example
//!
//! ```
//! use stepwise_solvers::transient::{Tableau, fixed};
//!
//! let decay = |_s: f64, r: &[f64]| vec![-r[0]];
//!
//! let solution = fixed::solve_unobserved(&Tableau::<4>::RK4, &decay, &[1.0], 0.0, 11, 0.1)?;
//!
//! assert_eq!(solution.trajectory.len(), 11);
//! # Ok::<(), fixed::Error>(())
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use stepwise_core::{Observer, Trajectory, VectorField};

use super::{Tableau, params, stages::Stages};

/// Integrates `dr/ds = field(s, r)` with a fixed step using `tableau`.
///
/// Produces `samples` samples: the initial condition `(s0, r0)` followed by
/// `samples - 1` steps of size `h`. With `samples == 1` no step is taken and
/// the field is never evaluated.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial sample and after each
/// step, and may return [`Action::StopEarly`] to end the run with the
/// samples produced so far.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, or if the field fails or
/// returns a derivative whose length differs from `r0`.
pub fn solve<F, Obs, const S: usize>(
    tableau: &Tableau<S>,
    field: &F,
    r0: &[f64],
    s0: f64,
    samples: usize,
    h: f64,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorField,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    params::check_initial(r0, s0, samples)?;
    params::check_fixed_step(h)?;

    let mut trajectory = Trajectory::new(s0, r0, samples);

    let event = Event {
        step: 0,
        s: s0,
        r: r0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            trajectory,
            steps: 0,
            evaluations: 0,
        });
    }

    let mut stages = Stages::<S>::new(r0.len());
    let mut current = r0.to_vec();
    let mut next = vec![0.0; r0.len()];
    let mut s = s0;

    for step in 1..samples {
        stages.compute(field, &tableau.c, &tableau.a, s, &current, h)?;
        stages.combine(&current, h, &tableau.b, &mut next);

        s += h;
        trajectory.push(s, &next);
        std::mem::swap(&mut current, &mut next);

        let event = Event {
            step,
            s,
            r: &current,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            tracing::debug!(method = tableau.name, step, "stopped by observer");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                trajectory,
                steps: step,
                evaluations: stages.evaluations(),
            });
        }
    }

    tracing::debug!(
        method = tableau.name,
        order = tableau.order,
        steps = samples - 1,
        evaluations = stages.evaluations(),
        "fixed-step integration complete"
    );

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        steps: samples - 1,
        evaluations: stages.evaluations(),
    })
}

/// Integrates with a fixed step without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, or if the field fails or
/// returns a derivative whose length differs from `r0`.
pub fn solve_unobserved<F, const S: usize>(
    tableau: &Tableau<S>,
    field: &F,
    r0: &[f64],
    s0: f64,
    samples: usize,
    h: f64,
) -> Result<Solution, Error>
where
    F: VectorField,
{
    solve(tableau, field, r0, s0, samples, h, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;
    use thiserror::Error;

    use crate::transient::ParamError;

    // --- Test fixtures ---

    /// dr/ds = -r, counting every evaluation.
    struct CountingDecay {
        calls: Cell<usize>,
    }

    impl CountingDecay {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl VectorField for CountingDecay {
        type Error = std::convert::Infallible;

        fn evaluate(&self, _s: f64, r: &[f64]) -> Result<Vec<f64>, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            Ok(r.iter().map(|r| -r).collect())
        }
    }

    #[derive(Debug, Error)]
    #[error("singular at s = {0}")]
    struct Singular(f64);

    /// dr/ds = 1/(1 - s), undefined at s = 1.
    struct Pole;

    impl VectorField for Pole {
        type Error = Singular;

        fn evaluate(&self, s: f64, _r: &[f64]) -> Result<Vec<f64>, Self::Error> {
            if s >= 1.0 {
                return Err(Singular(s));
            }
            Ok(vec![1.0 / (1.0 - s)])
        }
    }

    fn run_all(
        field: &CountingDecay,
        r0: &[f64],
        s0: f64,
        samples: usize,
        h: f64,
    ) -> [Solution; 3] {
        [
            solve_unobserved(&Tableau::<1>::EULER, field, r0, s0, samples, h).unwrap(),
            solve_unobserved(&Tableau::<2>::HEUN, field, r0, s0, samples, h).unwrap(),
            solve_unobserved(&Tableau::<4>::RK4, field, r0, s0, samples, h).unwrap(),
        ]
    }

    // --- Tests ---

    #[test]
    fn first_sample_is_initial_condition() {
        let field = CountingDecay::new();
        let r0 = [0.3, -1.7, 2.0];

        for solution in run_all(&field, &r0, 1.25, 8, 0.05) {
            assert_eq!(solution.status, Status::Complete);
            assert_eq!(solution.trajectory.len(), 8);
            assert_eq!(solution.trajectory.first().s, 1.25);
            assert_eq!(solution.trajectory.first().r, &r0);
        }
    }

    #[test]
    fn single_sample_takes_no_steps() {
        let field = CountingDecay::new();

        for solution in run_all(&field, &[1.0], 0.0, 1, 0.1) {
            assert_eq!(solution.trajectory.len(), 1);
            assert_eq!(solution.steps, 0);
            assert_eq!(solution.evaluations, 0);
        }
        assert_eq!(field.calls.get(), 0);
    }

    #[test]
    fn evaluations_match_stage_count() {
        let field = CountingDecay::new();

        let [euler, heun, rk4] = run_all(&field, &[1.0], 0.0, 11, 0.1);

        assert_eq!(euler.evaluations, 10);
        assert_eq!(heun.evaluations, 20);
        assert_eq!(rk4.evaluations, 40);
        assert_eq!(field.calls.get(), 70);
    }

    #[test]
    fn samples_are_evenly_spaced() {
        let field = CountingDecay::new();

        for solution in run_all(&field, &[1.0], 2.0, 5, -0.25) {
            let s = solution.trajectory.s();
            for pair in s.windows(2) {
                assert_relative_eq!(pair[1] - pair[0], -0.25, epsilon = 1e-15);
            }
            assert_relative_eq!(s[4], 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let field = CountingDecay::new();

        let first = run_all(&field, &[1.0, 2.0], 0.0, 50, 0.03);
        let second = run_all(&field, &[1.0, 2.0], 0.0, 50, 0.03);

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.trajectory, b.trajectory);
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        let field = CountingDecay::new();
        let t = Tableau::<1>::EULER;

        let cases = [
            (solve_unobserved(&t, &field, &[1.0], 0.0, 0, 0.1), ParamError::NoSamples),
            (solve_unobserved(&t, &field, &[], 0.0, 5, 0.1), ParamError::EmptyState),
            (solve_unobserved(&t, &field, &[1.0], 0.0, 5, 0.0), ParamError::StepSize),
            (solve_unobserved(&t, &field, &[1.0], 0.0, 5, f64::NAN), ParamError::StepSize),
        ];

        for (result, expected) in cases {
            assert!(
                matches!(result, Err(Error::InvalidParameter(e)) if e == expected),
                "expected {expected:?}"
            );
        }
        assert_eq!(field.calls.get(), 0);
    }

    #[test]
    fn dimension_mismatch_fails_fast() {
        let field = |_s: f64, r: &[f64]| vec![r[0]];

        let result = solve_unobserved(&Tableau::<4>::RK4, &field, &[1.0, 2.0], 0.0, 10, 0.1);

        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn field_errors_are_propagated() {
        // The third Euler step evaluates at s = 1.0.
        let result = solve_unobserved(&Tableau::<1>::EULER, &Pole, &[0.0], 0.0, 10, 0.5);

        let Err(Error::Field(source)) = result else {
            panic!("expected a field error");
        };
        assert_eq!(source.to_string(), "singular at s = 1");
    }

    #[test]
    fn observer_can_stop_early() {
        let field = CountingDecay::new();

        let observer = |event: &Event<'_>| (event.step >= 3).then_some(Action::StopEarly);

        let solution =
            solve(&Tableau::<2>::HEUN, &field, &[1.0], 0.0, 100, 0.1, observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 3);
        assert_eq!(solution.trajectory.len(), 4);
        assert_eq!(solution.evaluations, 6);
    }

    #[test]
    fn observer_sees_every_sample() {
        let field = CountingDecay::new();
        let mut seen = Vec::new();

        let solution = solve(
            &Tableau::<4>::RK4,
            &field,
            &[1.0],
            0.0,
            5,
            0.1,
            |event: &Event<'_>| {
                seen.push((event.step, event.s, event.r[0]));
                None
            },
        )
        .unwrap();

        let steps: Vec<usize> = seen.iter().map(|(step, _, _)| *step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
        for (i, (_, s, r)) in seen.iter().enumerate() {
            assert_eq!(*s, solution.trajectory.s()[i]);
            assert_eq!(*r, solution.trajectory.state(i)[0]);
        }
    }
}
