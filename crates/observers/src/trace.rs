use sextant_core::Observer;

use crate::traits::Tracked;

/// Emits one `tracing` debug record per solver event.
///
/// Each record carries the solver label, the iteration, and the tracked
/// quantity with its value. The observer never returns an action.
///
/// Pass `&mut observer` to keep using it after the solve, or pass it by
/// value when it is only needed for the duration of one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingObserver {
    solver: &'static str,
}

impl TracingObserver {
    /// Creates an observer that labels its records with `solver`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver }
    }

    /// Returns the solver label.
    #[must_use]
    pub fn solver(&self) -> &'static str {
        self.solver
    }
}

impl<E, A> Observer<E, A> for TracingObserver
where
    E: Tracked,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        tracing::debug!(
            solver = self.solver,
            iter = event.iter(),
            quantity = E::QUANTITY,
            value = event.value(),
            "solver iteration"
        );
        None
    }
}

impl<E, A> Observer<E, A> for &mut TracingObserver
where
    E: Tracked,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sextant_solvers::{equation::secant, optimization::golden_section};
    use tracing::Level;

    #[test]
    fn logs_without_intervening() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let config = golden_section::Config::new(1e-6).expect("valid tol");
            let unobserved =
                golden_section::minimize_unobserved(|x| (x - 1.0).powi(2), [-4.0, 4.0], &config)
                    .expect("should converge");

            let traced = golden_section::minimize(
                |x| (x - 1.0).powi(2),
                [-4.0, 4.0],
                &config,
                TracingObserver::new("golden_section"),
            )
            .expect("should converge");

            assert_eq!(traced, unobserved);
        });
    }

    #[test]
    fn usable_by_reference_across_solvers() {
        let mut observer = TracingObserver::new("secant");

        let solution = secant::solve(|x| x * x - 2.0, 1.0, &secant::Config::default(), &mut observer)
            .expect("should converge");

        assert_eq!(solution.status, secant::Status::Converged);
        assert_eq!(observer.solver(), "secant");
    }
}
