use crate::Trajectory;

/// A downstream consumer of finished trajectories.
///
/// Sinks receive complete trajectories after an integrator returns, labelled
/// by the caller (typically with the method that produced them). Rendering
/// curves and writing tabular files are the usual consumers.
///
/// Unlike an [`Observer`](crate::Observer), a sink never influences the run
/// that produced the trajectory.
pub trait TrajectorySink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Consumes a labelled trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the sink cannot accept the trajectory.
    fn consume(&mut self, label: &str, trajectory: &Trajectory) -> Result<(), Self::Error>;
}

impl<T: TrajectorySink + ?Sized> TrajectorySink for &mut T {
    type Error = T::Error;

    fn consume(&mut self, label: &str, trajectory: &Trajectory) -> Result<(), Self::Error> {
        (**self).consume(label, trajectory)
    }
}
