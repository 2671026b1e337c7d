//! Chord method.
//!
//! Keeps the left endpoint `a` fixed as an anchor and repeatedly replaces the
//! current estimate with the x-intercept of the chord through
//! `(a, f(a))` and `(x, f(x))`:
//!
//! ```text
//! x_{n+1} = a - f(a) / (f(x_n) - f(a)) * (x_n - a)
//! ```
//!
//! The method reports the estimate that entered the final update, one step
//! behind the freshest estimate. Callers that need the latest value can apply
//! [`next_estimate`] to the reported root once more.
//!
//! The bracket is not validated: `f(a)` and `f(b)` are assumed to differ in
//! sign. A flat chord (`f(x) == f(a)`) divides by zero and the resulting IEEE
//! specials are carried through the trail unchanged.

use rootlab_core::{Equation, Observer};

use super::{
    Action, Config, Event, Solution, Steps,
    steps::{Reported, run_while},
};

/// Returns the x-intercept of the chord from `(anchor, f(anchor))` to `(x, f(x))`.
#[must_use]
pub fn next_estimate<E>(equation: &E, anchor: f64, x: f64) -> f64
where
    E: Equation + ?Sized,
{
    let f_anchor = equation.value(anchor);
    anchor - f_anchor / (equation.value(x) - f_anchor) * (x - anchor)
}

/// Finds a root on `bracket = [a, b]` using the chord method.
///
/// Iterates with `a` as the anchor and `b` as the first estimate. Observers see
/// each iteration's snapshot and the estimate it produced, and may stop the
/// loop early.
pub fn solve<E, Obs>(equation: &E, bracket: [f64; 2], config: &Config, observer: Obs) -> Solution
where
    E: Equation + ?Sized,
    Obs: Observer<Event, Action>,
{
    let [anchor, start] = bracket;
    run_while(
        |x| next_estimate(equation, anchor, x),
        start,
        config,
        Reported::Previous,
        observer,
    )
}

/// Runs the chord method without observation.
pub fn solve_unobserved<E>(equation: &E, bracket: [f64; 2], config: &Config) -> Solution
where
    E: Equation + ?Sized,
{
    solve(equation, bracket, config, ())
}

/// Returns the chord iterations on `bracket` as an iterator of snapshots.
pub fn steps<'a, E>(
    equation: &'a E,
    bracket: [f64; 2],
    config: &Config,
) -> Steps<impl Fn(f64) -> f64 + use<'a, E>>
where
    E: Equation + ?Sized,
{
    let [anchor, start] = bracket;
    Steps::new(
        move |x| next_estimate(equation, anchor, x),
        start,
        config,
        Reported::Previous,
    )
}

/// Runs the chord method by draining [`steps`].
pub fn solve_stepwise<E>(equation: &E, bracket: [f64; 2], config: &Config) -> Solution
where
    E: Equation + ?Sized,
{
    steps(equation, bracket, config).finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rootlab_core::{Snapshot, SqrtCos};

    use crate::equation::Status;

    const ROOT: f64 = 0.886_777_190_730_906_4;

    fn lab_config() -> Config {
        Config::new(1e-3, 1000).expect("valid config")
    }

    /// Equation with a constant value, so every chord is flat.
    struct Flat(f64);

    impl Equation for Flat {
        fn value(&self, _x: f64) -> f64 {
            self.0
        }

        fn derivative(&self, _x: f64) -> f64 {
            0.0
        }

        fn second_derivative(&self, _x: f64) -> f64 {
            0.0
        }
    }

    #[test]
    fn converges_on_lab_bracket() {
        let config = lab_config();
        let solution = solve_unobserved(&SqrtCos, [0.0, 1.5], &config);

        assert_eq!(solution.status, Status::Converged);
        assert!(!solution.trail.is_empty());
        assert_abs_diff_eq!(solution.root, ROOT, epsilon = config.eps());
    }

    #[test]
    fn reports_the_lagging_estimate() {
        let config = lab_config();
        let solution = solve_unobserved(&SqrtCos, [0.0, 1.5], &config);

        let last = solution.trail.last().expect("non-empty trail");
        assert_eq!(solution.root, last.current);

        let next = next_estimate(&SqrtCos, 0.0, solution.root);
        assert!((next - solution.root).abs() < config.eps());
        assert!(last.gap() >= config.eps());
    }

    #[test]
    fn first_snapshot_starts_from_zero() {
        let solution = solve_unobserved(&SqrtCos, [0.0, 1.5], &lab_config());

        assert_eq!(solution.trail[0], Snapshot::new(0.0, 1.5));
        assert_relative_eq!(
            solution.trail[1].current,
            next_estimate(&SqrtCos, 0.0, 1.5),
            epsilon = 1e-15
        );
    }

    #[test]
    fn estimates_approach_root_from_the_right() {
        let solution = solve_unobserved(&SqrtCos, [0.0, 1.5], &lab_config());

        for pair in solution.trail.windows(2) {
            assert!(pair[1].current < pair[0].current);
            assert!(pair[1].current > ROOT);
        }
    }

    #[test]
    fn loop_styles_agree() {
        let config = lab_config();
        let looped = solve_unobserved(&SqrtCos, [0.0, 1.5], &config);
        let stepped = solve_stepwise(&SqrtCos, [0.0, 1.5], &config);

        assert_eq!(looped, stepped);
    }

    #[test]
    fn huge_eps_gives_empty_trail() {
        let config = Config::new(2.0, 1000).expect("valid config");
        let solution = solve_unobserved(&SqrtCos, [0.0, 1.5], &config);

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.trail.is_empty());
        assert_eq!(solution.root, 0.0);
    }

    #[test]
    fn zero_over_zero_is_degenerate() {
        let solution = solve_unobserved(&Flat(0.0), [0.0, 1.0], &lab_config());

        assert_eq!(solution.status, Status::Degenerate);
        assert_eq!(solution.trail, vec![Snapshot::new(0.0, 1.0)]);
        assert_eq!(solution.root, 1.0);
    }

    #[test]
    fn flat_nonzero_chord_never_settles() {
        let config = Config::new(1e-3, 6).expect("valid config");
        let solution = solve_unobserved(&Flat(1.0), [0.0, 1.0], &config);

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 6);
        assert!(solution.trail[1..].iter().all(|s| s.current.is_infinite()));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let solution = solve(
            &SqrtCos,
            [0.0, 1.5],
            &lab_config(),
            |event: &Event| (event.iter == 2).then_some(Action::StopEarly),
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_eq!(solution.root, solution.trail[1].current);
    }
}
