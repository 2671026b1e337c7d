//! Starting-point selection for Newton's method.
//!
//! Fourier's condition: Newton's method converges monotonically on `[a, b]`
//! from an endpoint `x0` where `f(x0) * f''(x0) >= 0`. The left endpoint is
//! tried first, then the right one.

use rootlab_core::Equation;
use thiserror::Error;

/// How a non-finite Fourier product is judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StartPolicy {
    /// Compare the raw IEEE product: `+inf` qualifies, `NaN` never does.
    #[default]
    Ieee,
    /// Only a finite, non-negative product qualifies.
    FiniteOnly,
}

impl StartPolicy {
    /// Returns true if `product` satisfies Fourier's condition under this policy.
    #[must_use]
    pub fn accepts(self, product: f64) -> bool {
        match self {
            StartPolicy::Ieee => product >= 0.0,
            StartPolicy::FiniteOnly => product.is_finite() && product >= 0.0,
        }
    }
}

/// The bracket endpoint chosen as Newton's starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Left,
    Right,
}

/// A starting point that satisfies Fourier's condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Start {
    /// Which endpoint qualified.
    pub endpoint: Endpoint,
    /// The endpoint value.
    pub x: f64,
    /// `f(x) * f''(x)` at the endpoint.
    pub product: f64,
}

/// Errors that can occur when selecting a starting point.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StartError {
    #[error(
        "Fourier's condition fails at both endpoints: \
         f(a)·f''(a) = {left_product} at a = {left}, \
         f(b)·f''(b) = {right_product} at b = {right}"
    )]
    FourierUnsatisfied {
        left: f64,
        right: f64,
        left_product: f64,
        right_product: f64,
    },
}

/// Returns `f(x) * f''(x)`.
#[must_use]
pub fn fourier_product<E>(equation: &E, x: f64) -> f64
where
    E: Equation + ?Sized,
{
    equation.value(x) * equation.second_derivative(x)
}

/// Picks the first endpoint of `bracket` that satisfies Fourier's condition.
///
/// # Errors
///
/// Returns [`StartError::FourierUnsatisfied`] if neither endpoint qualifies.
pub fn select<E>(equation: &E, bracket: [f64; 2], policy: StartPolicy) -> Result<Start, StartError>
where
    E: Equation + ?Sized,
{
    let [left, right] = bracket;

    let left_product = fourier_product(equation, left);
    if policy.accepts(left_product) {
        return Ok(Start {
            endpoint: Endpoint::Left,
            x: left,
            product: left_product,
        });
    }

    let right_product = fourier_product(equation, right);
    if policy.accepts(right_product) {
        return Ok(Start {
            endpoint: Endpoint::Right,
            x: right,
            product: right_product,
        });
    }

    Err(StartError::FourierUnsatisfied {
        left,
        right,
        left_product,
        right_product,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootlab_core::SqrtCos;

    /// `x² - 2`: convex everywhere, so any endpoint with `f > 0` qualifies.
    struct Parabola;

    impl Equation for Parabola {
        fn value(&self, x: f64) -> f64 {
            x * x - 2.0
        }

        fn derivative(&self, x: f64) -> f64 {
            2.0 * x
        }

        fn second_derivative(&self, _x: f64) -> f64 {
            2.0
        }
    }

    #[test]
    fn origin_product_is_positive_infinity() {
        // f(0) = -1 and f''(0) = -inf.
        assert_eq!(fourier_product(&SqrtCos, 0.0), f64::INFINITY);
    }

    #[test]
    fn right_lab_endpoint_fails_the_condition() {
        assert!(fourier_product(&SqrtCos, 1.5) < 0.0);
    }

    #[test]
    fn ieee_policy_picks_left_lab_endpoint() {
        let start = select(&SqrtCos, [0.0, 1.5], StartPolicy::Ieee).expect("left qualifies");

        assert_eq!(start.endpoint, Endpoint::Left);
        assert_eq!(start.x, 0.0);
        assert_eq!(start.product, f64::INFINITY);
    }

    #[test]
    fn finite_only_policy_falls_back_to_right_and_fails() {
        let err = select(&SqrtCos, [0.0, 1.5], StartPolicy::FiniteOnly)
            .expect_err("neither endpoint qualifies");

        let StartError::FourierUnsatisfied {
            left,
            right,
            left_product,
            right_product,
        } = err;
        assert_eq!((left, right), (0.0, 1.5));
        assert!(left_product.is_infinite());
        assert!(right_product < 0.0);
    }

    #[test]
    fn falls_back_to_right_endpoint() {
        // f(0) < 0 with f'' > 0 rejects the left endpoint.
        let start = select(&Parabola, [0.0, 3.0], StartPolicy::FiniteOnly).expect("right qualifies");

        assert_eq!(start.endpoint, Endpoint::Right);
        assert_eq!(start.x, 3.0);
        assert_eq!(start.product, 14.0);
    }

    #[test]
    fn nan_product_never_qualifies() {
        assert!(!StartPolicy::Ieee.accepts(f64::NAN));
        assert!(!StartPolicy::FiniteOnly.accepts(f64::NAN));
        assert!(StartPolicy::Ieee.accepts(0.0));
        assert!(!StartPolicy::FiniteOnly.accepts(f64::INFINITY));
    }

    #[test]
    fn error_message_names_both_products() {
        let err = select(&Parabola, [-1.0, 1.0], StartPolicy::Ieee).expect_err("both negative");
        let message = err.to_string();

        assert!(message.contains("f(a)·f''(a) = -2"));
        assert!(message.contains("f(b)·f''(b) = -2"));
    }
}
