//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch both the fixed-step and the adaptive integrators.
//!
//! # Event traits
//!
//! - [`HasSample`] — events that carry a stored sample
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//! - [`CanForceAccept`] — actions that can keep a rejected step
//!
//! # Example
//!
//! ```rust
//! use stepwise_core::Observer;
//! use stepwise_observers::traits::{CanStopEarly, HasSample};
//!
//! /// Stops once a component leaves `[lower, upper]`.
//! struct Bounds {
//!     component: usize,
//!     lower: f64,
//!     upper: f64,
//! }
//!
//! impl<E: HasSample, A: CanStopEarly> Observer<E, A> for Bounds {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let value = event.sample()?.r[self.component];
//!         (value < self.lower || value > self.upper).then(A::stop_early)
//!     }
//! }
//! ```

use stepwise_core::Sample;
use stepwise_solvers::transient::{fixed, rkf45};

/// An event that carries a sample of the trajectory.
pub trait HasSample {
    /// Returns the sample stored with this event.
    ///
    /// Returns `None` for events that do not store a sample, such as a
    /// rejected adaptive step.
    fn sample(&self) -> Option<Sample<'_>>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An action type that can accept a step the error control rejected.
pub trait CanForceAccept {
    /// Returns the action that keeps the rejected step.
    fn force_accept() -> Self;
}

// --- HasSample impls ---

impl HasSample for fixed::Event<'_> {
    fn sample(&self) -> Option<Sample<'_>> {
        Some(Sample {
            s: self.s,
            r: self.r,
        })
    }
}

impl HasSample for rkf45::Event<'_> {
    fn sample(&self) -> Option<Sample<'_>> {
        match *self {
            rkf45::Event::Start { s, r } | rkf45::Event::Accepted { s, r, .. } => {
                Some(Sample { s, r })
            }
            rkf45::Event::Rejected { .. } => None,
        }
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for fixed::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for rkf45::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- CanForceAccept for rkf45::Action ---

impl CanForceAccept for rkf45::Action {
    fn force_accept() -> Self {
        Self::ForceAccept
    }
}
