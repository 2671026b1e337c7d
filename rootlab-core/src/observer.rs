/// Hook called by a root finder after every update.
///
/// `E` is the event the solver reports (for the chord and Newton solvers, the
/// snapshot plus the estimate it produced) and `A` is the set of actions the
/// solver honours. Returning `None` leaves the iteration alone.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Inspects one event, optionally asking the solver to act on it.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
