/// Actions an observer can take during adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the trajectory so far.
    StopEarly,

    /// Accept a rejected step anyway.
    ///
    /// Only meaningful in response to [`Event::Rejected`](super::Event::Rejected);
    /// ignored for other events. The higher-order estimate at the rejected
    /// step size becomes the next sample, and the step size is left unchanged
    /// for the next slot.
    ///
    /// Use this when the tolerance is known to be unreachable in a region and
    /// a coarser sample is preferable to a [`NonConvergence`] failure.
    ///
    /// [`NonConvergence`]: super::Error::NonConvergence
    ForceAccept,
}
