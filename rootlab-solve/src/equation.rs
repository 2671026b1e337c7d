//! Solvers for scalar equations, finding a root of `f(x) = 0`.
//!
//! Both solvers iterate a fixed-point update `x1 <- g(x)` starting from the
//! pair `(0, start)` and stop once two consecutive estimates are closer than
//! [`Config::eps`]. Every iteration records a [`Snapshot`] before the update,
//! and the resulting trail is returned in the [`Solution`].
//!
//! # Solvers
//!
//! - [`chord`]: keeps the left endpoint fixed and interpolates toward the root
//! - [`newton`]: linear extrapolation along the first derivative
//!
//! Each solver comes in two loop styles that produce identical results: a
//! `while`-loop rendition (`solve`, observable) and an iterator rendition
//! (`steps` / `solve_stepwise`).
//!
//! [`start`] picks Newton's starting endpoint from Fourier's condition.
//!
//! [`Snapshot`]: rootlab_core::Snapshot

mod config;
mod event;
mod solution;
mod steps;

pub use config::{Config, ConfigError};
pub use event::{Action, Event};
pub use solution::{Solution, Status};
pub use steps::Steps;

pub mod chord;
pub mod newton;
pub mod start;
