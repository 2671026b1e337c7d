//! Core traits and types for rootlab.
//!
//! This crate defines the shared abstractions that the solvers and the
//! driver build on:
//!
//! - [`Equation`]: a scalar equation with its first and second derivatives
//! - [`SqrtCos`]: the fixed equation `sqrt(x) - cos(0.387x)`
//! - [`Snapshot`]: a captured (previous, current) estimate pair
//! - [`Observer`]: receives solver events and optionally returns control actions

mod equation;
mod observer;
mod snapshot;

pub use equation::{Equation, SqrtCos};
pub use observer::Observer;
pub use snapshot::{Snapshot, Trail};
