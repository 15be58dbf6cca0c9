use thiserror::Error;

/// Invalid arguments rejected before any integration work starts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    #[error("at least one sample is required")]
    NoSamples,

    #[error("initial state must have at least one component")]
    EmptyState,

    #[error("initial state must be finite")]
    NonFiniteState,

    #[error("initial s must be finite")]
    NonFiniteStart,

    #[error("step size must be finite and non-zero")]
    StepSize,

    #[error("initial step size must be finite and positive")]
    NonPositiveStep,
}

/// Checks the arguments every integrator shares.
pub(crate) fn check_initial(r0: &[f64], s0: f64, samples: usize) -> Result<(), ParamError> {
    if samples < 1 {
        return Err(ParamError::NoSamples);
    }
    if r0.is_empty() {
        return Err(ParamError::EmptyState);
    }
    if !r0.iter().all(|r| r.is_finite()) {
        return Err(ParamError::NonFiniteState);
    }
    if !s0.is_finite() {
        return Err(ParamError::NonFiniteStart);
    }
    Ok(())
}

/// Fixed steps may march in either direction.
pub(crate) fn check_fixed_step(h: f64) -> Result<(), ParamError> {
    if !h.is_finite() || h == 0.0 {
        return Err(ParamError::StepSize);
    }
    Ok(())
}

/// Adaptive steps only ever shrink or grow a positive step.
pub(crate) fn check_initial_step(h: f64) -> Result<(), ParamError> {
    if !h.is_finite() || h <= 0.0 {
        return Err(ParamError::NonPositiveStep);
    }
    Ok(())
}
