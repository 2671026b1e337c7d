use rootlab_core::{Observer, Snapshot, Trail};

use super::{Action, Config, Event, Solution, Status};

/// Which of the two final estimates a method reports as its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reported {
    /// The estimate that entered the last update.
    Previous,
    /// The estimate the last update produced.
    Current,
}

impl Reported {
    fn pick(self, previous: f64, current: f64) -> f64 {
        match self {
            Reported::Previous => previous,
            Reported::Current => current,
        }
    }
}

/// Runs the update `current <- update(previous)` with an explicit `while` loop.
///
/// The loop starts from the pair `(0, start)` and continues while the gap
/// between the two estimates is at least `eps`. A NaN gap compares false,
/// so it ends the loop just like convergence does.
pub(crate) fn run_while<G, Obs>(
    update: G,
    start: f64,
    config: &Config,
    reported: Reported,
    mut observer: Obs,
) -> Solution
where
    G: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
{
    let mut previous = 0.0;
    let mut current = start;
    let mut trail = Trail::new();
    let mut stopped_early = false;

    while (current - previous).abs() >= config.eps() {
        if trail.len() == config.max_iters() {
            break;
        }

        let snapshot = Snapshot::new(previous, current);
        trail.push(snapshot);

        previous = current;
        current = update(previous);

        let event = Event {
            iter: trail.len(),
            snapshot,
            next: current,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            stopped_early = true;
            break;
        }
    }

    let status = if stopped_early {
        Status::StoppedByObserver
    } else {
        classify(previous, current, config.eps())
    };

    Solution::new(status, reported.pick(previous, current), trail)
}

/// Determines why a loop that was not stopped by an observer ended.
fn classify(previous: f64, current: f64, eps: f64) -> Status {
    let gap = (current - previous).abs();
    if gap >= eps {
        Status::MaxIters
    } else if gap.is_nan() {
        Status::Degenerate
    } else {
        Status::Converged
    }
}

/// Iterator rendition of a solver loop.
///
/// Each call to `next` records and yields the snapshot taken at the top of
/// one iteration, then applies the update. The iterator ends under the same
/// conditions as the `while` rendition, and [`Steps::finish`] turns it into
/// the same [`Solution`].
///
/// ```
/// use rootlab_core::SqrtCos;
/// use rootlab_solve::equation::{Config, chord};
///
/// let mut steps = chord::steps(&SqrtCos, [0.0, 1.5], &Config::default());
/// for snapshot in &mut steps {
///     println!("{} -> {}", snapshot.previous, snapshot.current);
/// }
/// let solution = steps.finish();
/// assert!(solution.iters > 0);
/// ```
#[derive(Debug, Clone)]
pub struct Steps<G> {
    update: G,
    previous: f64,
    current: f64,
    config: Config,
    reported: Reported,
    trail: Trail,
}

impl<G> Steps<G>
where
    G: Fn(f64) -> f64,
{
    pub(crate) fn new(update: G, start: f64, config: &Config, reported: Reported) -> Self {
        Self {
            update,
            previous: 0.0,
            current: start,
            config: *config,
            reported,
            trail: Trail::new(),
        }
    }

    /// Returns the snapshots yielded so far.
    #[must_use]
    pub fn trail(&self) -> &[Snapshot] {
        &self.trail
    }

    /// Returns the root estimate the method would report right now.
    #[must_use]
    pub fn root(&self) -> f64 {
        self.reported.pick(self.previous, self.current)
    }

    /// Runs any remaining iterations and returns the solution.
    #[must_use]
    pub fn finish(mut self) -> Solution {
        for _ in self.by_ref() {}
        let status = classify(self.previous, self.current, self.config.eps());
        let root = self.root();
        Solution::new(status, root, self.trail)
    }
}

impl<G> Iterator for Steps<G>
where
    G: Fn(f64) -> f64,
{
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let gap = (self.current - self.previous).abs();
        if gap.is_nan() || gap < self.config.eps() {
            return None;
        }
        if self.trail.len() == self.config.max_iters() {
            return None;
        }

        let snapshot = Snapshot::new(self.previous, self.current);
        self.trail.push(snapshot);

        self.previous = self.current;
        self.current = (self.update)(self.previous);

        Some(snapshot)
    }
}
