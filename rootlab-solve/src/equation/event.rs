use rootlab_core::Snapshot;

/// Iteration event emitted by the `while`-loop solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Snapshot recorded at the top of this iteration.
    pub snapshot: Snapshot,
    /// Estimate produced by this iteration's update.
    pub next: f64,
}

/// Control actions supported by the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the trail so far.
    StopEarly,
}
