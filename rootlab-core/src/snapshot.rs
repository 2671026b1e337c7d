/// A captured (previous, current) estimate pair from one solver iteration.
///
/// Solvers record a snapshot at the top of each loop iteration, before the
/// estimates are updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub previous: f64,
    pub current: f64,
}

/// The ordered history of snapshots from a single solver run.
pub type Trail = Vec<Snapshot>;

impl Snapshot {
    /// Creates a new snapshot from the previous and current estimates.
    #[must_use]
    pub fn new(previous: f64, current: f64) -> Self {
        Self { previous, current }
    }

    /// Returns the step between the two estimates, `|current - previous|`.
    #[must_use]
    pub fn gap(&self) -> f64 {
        (self.current - self.previous).abs()
    }
}
