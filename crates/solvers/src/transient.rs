//! Solvers that march a state forward in the independent variable.
//!
//! The fixed-step family ([`euler`], [`heun`], [`rk4`]) shares one driver,
//! [`fixed::solve`], parameterized by a Butcher [`Tableau`]. The adaptive
//! [`rkf45`] solver evaluates an [`EmbeddedTableau`] and retries each step
//! with a smaller step size until its error estimate is acceptable.

mod evaluate;
mod params;
mod stages;
mod tableau;

pub use evaluate::EvalError;
pub use params::ParamError;
pub use tableau::{EmbeddedTableau, Tableau};

pub mod euler;
pub mod fixed;
pub mod heun;
pub mod rk4;
pub mod rkf45;
