//! Chord and Newton iterations for `sqrt(x) = cos(0.387x)`, rendered as
//! bordered console tables.
//!
//! - [`project`]: turns a snapshot trail into display rows
//! - [`Settings`]: the fixed bracket, tolerance, and iteration cap
//! - [`solve_all`] / [`run`]: pick Newton's start, run both
//!   methods in both loop styles, and render the tables

mod driver;
mod error;
mod settings;

pub mod project;

pub use driver::{Outcome, Report, run, solve_all};
pub use error::Error;
pub use settings::Settings;
