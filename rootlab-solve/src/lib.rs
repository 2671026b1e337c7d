//! Numerical solvers for rootlab.
//!
//! See [`equation`] for the chord and Newton root finders.

pub mod equation;
