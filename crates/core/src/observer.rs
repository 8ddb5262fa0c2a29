/// Receives solver events and decides how the iteration should proceed.
///
/// Each solver defines its own event and action types. The `observe` method
/// returns `Option<A>`: `Some(action)` asks the solver to act (for example,
/// stop early) and `None` lets it continue unchanged.
///
/// Closures implement `Observer` automatically, and `()` is a no-op observer
/// that never returns an action.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
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
