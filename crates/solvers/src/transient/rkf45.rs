//! Runge–Kutta–Fehlberg 4(5) solver with step-size control.
//!
//! # Algorithm
//!
//! Each output slot is produced by a retry loop:
//!
//! 1. Evaluate the six Fehlberg stages for the current step size `h`.
//! 2. Form the fourth-order estimate `y4` and the fifth-order estimate `y5`.
//! 3. For each component compute
//!    `q_j = safety · (tolerance · h / |y4_j − y5_j|)^(1 / order)` and take
//!    the smallest, `q`.
//! 4. If `q ≥ 1` the step is accepted: the sample `(s + h, y5)` is stored and
//!    the next slot starts from `q · h`. Otherwise `h` shrinks to `q · h` and
//!    the slot is retried.
//!
//! The scale that decides acceptance is also applied to the step size carried
//! into the next slot, so a slot that needed several rejections starts the
//! following slot from its own shrunken step rather than from `h0`.
//!
//! # Edge cases
//!
//! - Components whose two estimates agree exactly impose no limit. When every
//!   component agrees, the step is accepted and grown by
//!   [`Config::max_growth`].
//! - Each slot may be rejected at most [`Config::max_retries`] times before
//!   the run fails with [`Error::NonConvergence`]. The run also fails if the
//!   step size underflows to zero.
//! - A NaN error estimate fails the run with [`Error::NonFiniteEstimate`].
//!
//! # Observer Events
//!
//! The solver emits [`Event::Start`] once, then one [`Event::Rejected`] or
//! [`Event::Accepted`] per attempted step. Observers can return
//! [`Action::StopEarly`] on any event, or [`Action::ForceAccept`] on a
//! rejection to keep the attempted step anyway.
//!
//! # Example
//!
//! ```
//! use stepwise_solvers::transient::rkf45::{self, Config};
//!
//! let decay = |_s: f64, r: &[f64]| vec![-r[0]];
//!
//! let solution = rkf45::solve_unobserved(&decay, &[1.0], 0.0, 20, 0.01, &Config::default())?;
//!
//! for sample in solution.trajectory.iter() {
//!     assert!((sample.r[0] - (-sample.s).exp()).abs() < 1e-6);
//! }
//! # Ok::<(), rkf45::Error>(())
//! ```

mod action;
mod config;
mod control;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use stepwise_core::{Observer, Trajectory, VectorField};

use control::Scale;

use super::{EmbeddedTableau, params, stages::Stages};

const TABLEAU: EmbeddedTableau<6> = EmbeddedTableau::<6>::FEHLBERG45;

/// Integrates `dr/ds = field(s, r)` with Runge–Kutta–Fehlberg 4(5).
///
/// Produces `samples` samples starting from `(s0, r0)`, with the first step
/// attempted at `h0`. The spacing of the samples is whatever step size was
/// accepted for each slot.
///
/// See the [module docs](self) for the retry loop and observer events.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, if the field fails or
/// returns a derivative of the wrong length, if a slot exceeds the retry
/// limit, or if the error estimate becomes NaN.
#[allow(clippy::too_many_lines)]
pub fn solve<F, Obs>(
    field: &F,
    r0: &[f64],
    s0: f64,
    samples: usize,
    h0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorField,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    params::check_initial(r0, s0, samples)?;
    params::check_initial_step(h0)?;

    let dim = r0.len();
    let mut trajectory = Trajectory::new(s0, r0, samples);

    let stopped = |trajectory, accepted, rejected, evaluations, next_step| Solution {
        status: Status::StoppedByObserver,
        trajectory,
        accepted,
        rejected,
        evaluations,
        next_step,
    };

    if let Some(Action::StopEarly) = observer.observe(&Event::Start { s: s0, r: r0 }) {
        return Ok(stopped(trajectory, 0, 0, 0, h0));
    }

    let mut stages = Stages::<6>::new(dim);
    let mut current = r0.to_vec();
    let mut low = vec![0.0; dim];
    let mut high = vec![0.0; dim];
    let mut s = s0;
    let mut h = h0;
    let mut rejected = 0;

    for slot in 1..samples {
        let mut attempt = 0;

        let (step, scale, next_step, forced) = loop {
            stages.compute(field, &TABLEAU.c, &TABLEAU.a, s, &current, h)?;
            stages.combine(&current, h, &TABLEAU.low, &mut low);
            stages.combine(&current, h, &TABLEAU.high, &mut high);

            let q = match control::scale(&low, &high, h, config) {
                Scale::Finite(q) => q,
                Scale::Singular => {
                    tracing::debug!(
                        method = TABLEAU.name,
                        slot,
                        step = h,
                        "embedded estimates agree, growing step"
                    );
                    config.max_growth()
                }
                Scale::NotANumber => {
                    tracing::warn!(
                        method = TABLEAU.name,
                        slot,
                        step = h,
                        "error estimate is not a number"
                    );
                    return Err(Error::NonFiniteEstimate { slot, step: h });
                }
            };

            if q >= 1.0 {
                break (h, q, q * h, false);
            }

            let next_step = q * h;
            rejected += 1;
            tracing::trace!(slot, attempt, step = h, scale = q, "step rejected");

            let event = Event::Rejected {
                slot,
                attempt,
                step: h,
                scale: q,
                next_step,
            };
            match observer.observe(&event) {
                Some(Action::StopEarly) => {
                    return Ok(stopped(
                        trajectory,
                        slot - 1,
                        rejected,
                        stages.evaluations(),
                        next_step,
                    ));
                }
                Some(Action::ForceAccept) => break (h, q, h, true),
                None => {}
            }

            attempt += 1;
            if attempt > config.max_retries() || next_step <= 0.0 {
                tracing::warn!(
                    method = TABLEAU.name,
                    slot,
                    step = h,
                    retries = attempt,
                    "step size did not converge"
                );
                return Err(Error::NonConvergence {
                    slot,
                    step: h,
                    retries: attempt,
                });
            }
            h = next_step;
        };

        s += step;
        h = next_step;
        trajectory.push(s, &high);
        std::mem::swap(&mut current, &mut high);

        let event = Event::Accepted {
            slot,
            s,
            r: &current,
            step,
            scale,
            next_step,
            forced,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(stopped(trajectory, slot, rejected, stages.evaluations(), h));
        }
    }

    tracing::debug!(
        method = TABLEAU.name,
        accepted = samples - 1,
        rejected,
        evaluations = stages.evaluations(),
        next_step = h,
        "adaptive integration complete"
    );

    Ok(Solution {
        status: Status::Complete,
        trajectory,
        accepted: samples - 1,
        rejected,
        evaluations: stages.evaluations(),
        next_step: h,
    })
}

/// Integrates with Runge–Kutta–Fehlberg 4(5) without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the parameters are invalid, if the field fails or
/// returns a derivative of the wrong length, if a slot exceeds the retry
/// limit, or if the error estimate becomes NaN.
pub fn solve_unobserved<F: VectorField>(
    field: &F,
    r0: &[f64],
    s0: f64,
    samples: usize,
    h0: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(field, r0, s0, samples, h0, config, ())
}
