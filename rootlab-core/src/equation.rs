/// A scalar equation `f(x) = 0` together with its first two derivatives.
///
/// Implementations are pure: evaluating the same `x` twice yields the same
/// bits. No domain checks are performed, so evaluating outside the domain
/// produces IEEE infinities or NaN and it is up to the caller to avoid it.
pub trait Equation {
    /// Returns `f(x)`.
    fn value(&self, x: f64) -> f64;

    /// Returns `f'(x)`.
    fn derivative(&self, x: f64) -> f64;

    /// Returns `f''(x)`.
    fn second_derivative(&self, x: f64) -> f64;
}

/// The equation `sqrt(x) - cos(0.387x) = 0`.
///
/// Defined for `x > 0`. At `x = 0` both derivatives divide by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqrtCos;

impl SqrtCos {
    /// Angular coefficient inside the cosine.
    pub const K: f64 = 0.387;

    /// `K²`, rounded the way the second derivative has always been written.
    pub const K_SQUARED: f64 = 0.149769;
}

impl Equation for SqrtCos {
    fn value(&self, x: f64) -> f64 {
        x.sqrt() - (Self::K * x).cos()
    }

    fn derivative(&self, x: f64) -> f64 {
        0.5 / x.sqrt() + Self::K * (Self::K * x).sin()
    }

    fn second_derivative(&self, x: f64) -> f64 {
        -0.25 / (x * x.sqrt()) + Self::K_SQUARED * (Self::K * x).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_at_one() {
        let eq = SqrtCos;
        assert_relative_eq!(eq.value(1.0), 0.073_954_538_695_812_37, epsilon = 1e-15);
        assert_relative_eq!(eq.derivative(1.0), 0.646_058_436_747_269_1, epsilon = 1e-15);
        assert_relative_eq!(
            eq.second_derivative(1.0),
            -0.111_307_097_305_933_1,
            epsilon = 1e-15
        );
    }

    #[test]
    fn derivative_matches_central_difference() {
        let eq = SqrtCos;
        let h = 1e-6;
        for x in [0.25, 0.9, 1.5, 4.0] {
            let slope = (eq.value(x + h) - eq.value(x - h)) / (2.0 * h);
            assert_relative_eq!(eq.derivative(x), slope, epsilon = 1e-6);

            let curvature = (eq.derivative(x + h) - eq.derivative(x - h)) / (2.0 * h);
            assert_relative_eq!(eq.second_derivative(x), curvature, epsilon = 1e-5);
        }
    }

    #[test]
    fn origin_is_singular() {
        let eq = SqrtCos;
        assert_relative_eq!(eq.value(0.0), -1.0);
        assert!(eq.derivative(0.0).is_infinite());
        assert_eq!(eq.second_derivative(0.0), f64::NEG_INFINITY);
    }
}
