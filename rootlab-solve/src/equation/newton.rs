//! Newton's method.
//!
//! ```text
//! x_{n+1} = x_n - f(x_n) / f'(x_n)
//! ```
//!
//! Unlike [`chord`](super::chord), the reported root is the estimate produced
//! by the final update.
//!
//! Use [`start::select`](super::start::select) to pick a starting endpoint
//! that satisfies Fourier's condition.

use rootlab_core::{Equation, Observer};

use super::{
    Action, Config, Event, Solution, Steps,
    steps::{Reported, run_while},
};

/// Starting point used in place of an exact zero.
///
/// Equations with a `sqrt(x)` term have singular derivatives at the origin.
pub const ZERO_START_SUBSTITUTE: f64 = 0.01;

/// Returns the Newton update `x - f(x) / f'(x)`.
#[must_use]
pub fn next_estimate<E>(equation: &E, x: f64) -> f64
where
    E: Equation + ?Sized,
{
    x - equation.value(x) / equation.derivative(x)
}

/// Replaces an exact zero start with [`ZERO_START_SUBSTITUTE`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn guard_start(x0: f64) -> f64 {
    if x0 == 0.0 { ZERO_START_SUBSTITUTE } else { x0 }
}

/// Finds a root starting from `x0` using Newton's method.
///
/// Observers see each iteration's snapshot and the estimate it produced, and
/// may stop the loop early.
pub fn solve<E, Obs>(equation: &E, x0: f64, config: &Config, observer: Obs) -> Solution
where
    E: Equation + ?Sized,
    Obs: Observer<Event, Action>,
{
    run_while(
        |x| next_estimate(equation, x),
        guard_start(x0),
        config,
        Reported::Current,
        observer,
    )
}

/// Runs Newton's method without observation.
pub fn solve_unobserved<E>(equation: &E, x0: f64, config: &Config) -> Solution
where
    E: Equation + ?Sized,
{
    solve(equation, x0, config, ())
}

/// Returns the Newton iterations from `x0` as an iterator of snapshots.
pub fn steps<'a, E>(
    equation: &'a E,
    x0: f64,
    config: &Config,
) -> Steps<impl Fn(f64) -> f64 + use<'a, E>>
where
    E: Equation + ?Sized,
{
    Steps::new(
        move |x| next_estimate(equation, x),
        guard_start(x0),
        config,
        Reported::Current,
    )
}

/// Runs Newton's method by draining [`steps`].
pub fn solve_stepwise<E>(equation: &E, x0: f64, config: &Config) -> Solution
where
    E: Equation + ?Sized,
{
    steps(equation, x0, config).finish()
}
