//! Core traits and types for explicit ODE integration.
//!
//! This crate defines the shared abstractions that integrators, observers,
//! and trajectory consumers build on:
//!
//! - [`VectorField`] — the right-hand side `f(s, r)` of `dr/ds = f(s, r)`
//! - [`Trajectory`] — the `(s, r)` samples an integrator produces
//! - [`Observer`] — receives integrator events and optionally returns control actions
//! - [`TrajectorySink`] — consumes finished trajectories (plotting, export)
//!
//! All arithmetic is 64-bit (`f64`).

mod field;
mod observer;
mod sink;
mod trajectory;

pub use field::VectorField;
pub use observer::Observer;
pub use sink::TrajectorySink;
pub use trajectory::{Sample, Trajectory};
