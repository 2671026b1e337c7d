//! Shared helpers for the end-to-end tests.

use rootlab_core::{Equation, SqrtCos};

/// Bisects `sqrt(x) = cos(0.387x)` on `[0, 1.5]` down to machine precision.
///
/// Serves as a reference root that does not share code with the chord or
/// Newton solvers.
#[must_use]
pub fn reference_root() -> f64 {
    let equation = SqrtCos;
    let (mut left, mut right) = (0.0_f64, 1.5_f64);

    for _ in 0..200 {
        let mid = 0.5 * (left + right);
        if equation.value(mid) < 0.0 {
            left = mid;
        } else {
            right = mid;
        }
    }

    0.5 * (left + right)
}

/// Splits rendered output into tables, one `Vec` of lines per table.
///
/// A table starts at a line beginning with `┌` and ends at a line beginning
/// with `└`. Lines outside a table are ignored.
#[must_use]
pub fn split_tables(output: &str) -> Vec<Vec<&str>> {
    let mut tables = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in output.lines() {
        if line.starts_with('┌') {
            current = Some(vec![line]);
        } else if let Some(lines) = current.as_mut() {
            lines.push(line);
            if line.starts_with('└') {
                tables.extend(current.take());
            }
        }
    }

    tables
}
