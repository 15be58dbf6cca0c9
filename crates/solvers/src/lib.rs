//! Explicit integrators for first-order ODE systems.
//!
//! Every integrator takes a [`VectorField`], an initial condition `(s0, r0)`
//! and a sample count, and returns a [`Trajectory`] of exactly that many
//! samples (unless an observer stops the run early).
//!
//! # Integrators
//!
//! - [`transient::euler`] — explicit Euler, order 1
//! - [`transient::heun`] — explicit trapezoidal (Heun), order 2
//! - [`transient::rk4`] — classical Runge–Kutta, order 4
//! - [`transient::rkf45`] — Runge–Kutta–Fehlberg 4(5) with step-size control
//!
//! [`VectorField`]: stepwise_core::VectorField
//! [`Trajectory`]: stepwise_core::Trajectory

pub mod transient;
