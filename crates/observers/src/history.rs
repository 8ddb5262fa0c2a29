use sextant_core::Observer;

use crate::traits::{CanStopEarly, Tracked};

/// Records the tracked value of every event in order.
///
/// With [`History::until`], the recorder also asks the solver to stop once
/// a value's magnitude falls to the target.
///
/// # Example
///
/// ```rust
/// use sextant_observers::History;
/// use sextant_solvers::equation::secant;
///
/// let mut history = History::new();
/// let solution = secant::solve(|x| x * x - 9.0, 1.0, &secant::Config::default(), &mut history)
///     .expect("should converge");
///
/// assert_eq!(history.values().len(), solution.iters);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    values: Vec<f64>,
    target: Option<f64>,
}

impl History {
    /// Creates a recorder that never intervenes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that stops the solver once `|value| <= target`.
    #[must_use]
    pub fn until(target: f64) -> Self {
        Self {
            values: Vec::new(),
            target: Some(target),
        }
    }

    /// Returns the recorded values in event order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the recorder and returns its values.
    #[must_use]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Returns true if the latest value reached the target.
    #[must_use]
    pub fn reached(&self) -> bool {
        match (self.target, self.values.last()) {
            (Some(target), Some(value)) => value.abs() <= target,
            _ => false,
        }
    }
}

impl<E, A> Observer<E, A> for History
where
    E: Tracked,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.values.push(event.value());
        self.reached().then(A::stop_early)
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the values can be read after the solve completes.
impl<E, A> Observer<E, A> for &mut History
where
    E: Tracked,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use sextant_solvers::optimization::{golden_section, steepest_descent};

    #[test]
    fn records_descent_objectives() {
        let f = |x: &[f64]| (x[0] - 2.0).powi(2) + (x[1] - 1.0).powi(2);
        let config = steepest_descent::Config::default();
        let mut history = History::new();

        let solution =
            steepest_descent::minimize(f, &[4.0, 3.0], &config, &mut history).expect("ok");

        // The solution history also holds f(x0); the observer only sees updates.
        assert_eq!(history.values(), &solution.history[1..]);
        assert!(!history.reached());
    }

    #[test]
    fn stops_once_target_is_reached() {
        let config = golden_section::Config::new(1e-10).expect("valid tol");
        let mut history = History::until(1e-3);

        let solution = golden_section::minimize(
            |x| (x - 0.5).powi(2),
            [0.0, 10.0],
            &config,
            &mut history,
        )
        .expect("should stop early");

        assert_eq!(solution.status, golden_section::Status::StoppedByObserver);
        assert!(history.reached());
        assert_eq!(history.values().len(), solution.iters);
        assert!(history.values().last().expect("recorded").abs() <= 1e-3);
    }

    #[test]
    fn reached_requires_a_target_and_a_value() {
        assert!(!History::new().reached());
        assert!(!History::until(1.0).reached());

        let mut history = History::until(1.0);
        let event = golden_section::Event {
            iter: 1,
            bracket: [0.0, 1.0],
            point: golden_section::Point::new(0.2, 0.5),
            other: golden_section::Point::new(0.6, 0.9),
        };
        let action: Option<golden_section::Action> = history.observe(&event);

        assert_eq!(action, Some(golden_section::Action::StopEarly));
        assert_relative_eq!(history.into_values()[0], 0.5);
    }
}
