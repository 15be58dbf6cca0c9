/// Event emitted by the fixed-step solvers for each sample.
///
/// Step 0 is the initial condition before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for the initial sample).
    pub step: usize,

    /// The independent variable at this sample.
    pub s: f64,

    /// The state at this sample.
    pub r: &'a [f64],
}
