//! Reusable observers and trajectory sinks for stepwise integrators.
//!
//! This crate provides [`Observer`] implementations, capability traits that
//! work across the fixed-step and adaptive solvers, and consumers for
//! finished trajectories.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasSample`], [`CanStopEarly`], [`CanForceAccept`])
//! - [`table`] — [`Table`], a [`TrajectorySink`] that writes labelled
//!   trajectories side by side as CSV
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing solver runs via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: stepwise_core::Observer
//! [`TrajectorySink`]: stepwise_core::TrajectorySink
//! [`HasSample`]: traits::HasSample
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanForceAccept`]: traits::CanForceAccept
//! [`Table`]: table::Table

pub mod table;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
