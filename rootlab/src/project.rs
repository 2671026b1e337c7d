//! Projects snapshot trails into display rows.
//!
//! Each snapshot `(previous, current)` becomes four cells: `x = current`,
//! `f(x)`, an auxiliary column, and the step `|x - previous|`.

use rootlab_core::{Equation, Snapshot};

/// Digits printed after the decimal point.
pub const PRECISION: usize = 6;

/// The quantity shown in the third column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auxiliary {
    /// `f'(x)`, shown for Newton's method.
    Derivative,
    /// `1 / (1 + f(x))`, shown for the chord method.
    InverseOnePlusF,
}

impl Auxiliary {
    /// Returns the column label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Auxiliary::Derivative => "f'(x)",
            Auxiliary::InverseOnePlusF => "1/(1+f(x))",
        }
    }

    fn value<E>(self, equation: &E, x: f64, fx: f64) -> f64
    where
        E: Equation + ?Sized,
    {
        match self {
            Auxiliary::Derivative => equation.derivative(x),
            Auxiliary::InverseOnePlusF => 1.0 / (1.0 + fx),
        }
    }
}

/// Formats a value in fixed-point notation with [`PRECISION`] decimals.
///
/// Output does not depend on locale. IEEE specials print as `NaN`, `inf`,
/// and `-inf`.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.prec$}", prec = PRECISION)
}

/// Returns the column labels for a projected table.
#[must_use]
pub fn header(auxiliary: Auxiliary) -> [&'static str; 4] {
    ["x", "f(x)", auxiliary.label(), "|x1-x|"]
}

/// Projects one snapshot into a row of cells.
#[must_use]
pub fn row<E>(equation: &E, snapshot: &Snapshot, auxiliary: Auxiliary) -> [String; 4]
where
    E: Equation + ?Sized,
{
    let x = snapshot.current;
    let fx = equation.value(x);

    [
        format_value(x),
        format_value(fx),
        format_value(auxiliary.value(equation, x, fx)),
        format_value(snapshot.gap()),
    ]
}

/// Projects every snapshot of a trail.
#[must_use]
pub fn project<E>(equation: &E, trail: &[Snapshot], auxiliary: Auxiliary) -> Vec<[String; 4]>
where
    E: Equation + ?Sized,
{
    trail
        .iter()
        .map(|snapshot| row(equation, snapshot, auxiliary))
        .collect()
}
