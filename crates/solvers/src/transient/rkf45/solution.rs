use stepwise_core::Trajectory;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Produced every requested sample.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an adaptive integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Samples produced, starting with the initial condition.
    ///
    /// Spacing in `s` is whatever step size was accepted for each slot.
    pub trajectory: Trajectory,

    /// Number of accepted steps.
    pub accepted: usize,

    /// Number of rejected attempts across all slots.
    pub rejected: usize,

    /// Number of vector field evaluations performed.
    pub evaluations: usize,

    /// Step size the solver would have attempted next.
    pub next_step: f64,
}
