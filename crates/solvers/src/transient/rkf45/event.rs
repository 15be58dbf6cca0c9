/// Events emitted by the adaptive solver.
///
/// Every attempted step produces exactly one [`Event::Rejected`] or
/// [`Event::Accepted`]. A slot is the index of the sample being produced; it
/// only advances on acceptance.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    /// The initial condition, before any step is attempted.
    Start {
        /// Initial independent variable.
        s: f64,

        /// Initial state.
        r: &'a [f64],
    },

    /// A step was rejected and will be retried with a smaller step size.
    Rejected {
        /// Sample index being produced.
        slot: usize,

        /// Zero-based rejection count for this slot.
        attempt: usize,

        /// Step size of the rejected attempt.
        step: f64,

        /// Step-size scale factor computed for this attempt (below one).
        scale: f64,

        /// Step size of the retry, `scale · step`.
        next_step: f64,
    },

    /// A step was accepted and a new sample stored.
    Accepted {
        /// Index of the stored sample.
        slot: usize,

        /// Independent variable of the stored sample.
        s: f64,

        /// State of the stored sample (the higher-order estimate).
        r: &'a [f64],

        /// Step size that produced the sample.
        step: f64,

        /// Step-size scale factor computed for this attempt.
        scale: f64,

        /// Step size the next slot will start from.
        next_step: f64,

        /// Whether an observer forced acceptance of a rejected step.
        forced: bool,
    },
}

impl Event<'_> {
    /// Returns the slot this event belongs to (0 for [`Event::Start`]).
    #[must_use]
    pub fn slot(&self) -> usize {
        match self {
            Self::Start { .. } => 0,
            Self::Rejected { slot, .. } | Self::Accepted { slot, .. } => *slot,
        }
    }

    /// Returns the step size attempted, or `None` for [`Event::Start`].
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        match self {
            Self::Start { .. } => None,
            Self::Rejected { step, .. } | Self::Accepted { step, .. } => Some(*step),
        }
    }
}
