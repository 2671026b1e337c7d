use rootlab_core::Trail;

/// Indicates how the solver loop terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Two consecutive estimates came within the tolerance.
    Converged,

    /// The step between estimates became NaN, which ends the loop.
    ///
    /// The root and trail are returned exactly as the loop left them and
    /// usually contain IEEE special values.
    Degenerate,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a chord or Newton solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate reported by the method.
    pub root: f64,

    /// Snapshots recorded at the top of every iteration.
    pub trail: Trail,

    /// Number of iterations performed.
    pub iters: usize,
}

impl Solution {
    pub(super) fn new(status: Status, root: f64, trail: Trail) -> Self {
        Self {
            status,
            root,
            iters: trail.len(),
            trail,
        }
    }
}
