use sextant_core::Observer;

use super::{
    Action, Config, Error, Event, LineSearch, Solution, Status,
    bracket::{GoldenBracket, narrowing_steps},
    state::{State, evaluate},
};

/// Bracket state after the narrowing loop finishes.
struct Narrowed {
    bracket: GoldenBracket,
    iters: usize,
    stopped: bool,
}

/// Runs `steps` golden section narrowing steps on `bracket`.
///
/// Each step costs exactly one evaluation of `g`: the retained interior
/// point is reused and only the new one is evaluated.
fn narrow<G, Obs, T>(
    g: &G,
    bracket: GoldenBracket,
    steps: usize,
    observer: &mut Obs,
    transform: &T,
) -> Result<Narrowed, Error>
where
    G: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
    T: Fn(f64) -> f64,
{
    let mut state = State::new(g, bracket)?;

    for iter in 1..=steps {
        let direction = state.next_action(transform);
        let point = evaluate(g, direction.x())?;
        let other = state.apply(direction, point);

        let event = Event {
            iter,
            bracket: state.bracket().bounds(),
            point,
            other,
        };

        match observer.observe(&event) {
            Some(Action::StopEarly) => {
                return Ok(Narrowed {
                    bracket: *state.bracket(),
                    iters: iter,
                    stopped: true,
                });
            }
            Some(Action::AssumeWorse) => state.assume_worse(direction, transform),
            None => {}
        }
    }

    Ok(Narrowed {
        bracket: *state.bracket(),
        iters: steps,
        stopped: false,
    })
}

/// Core golden section search implementation.
///
/// The `transform` function is applied to objective values before comparison,
/// allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<F, Obs, T>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    transform: T,
) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
    Obs: Observer<Event, Action>,
    T: Fn(f64) -> f64,
{
    let bracket = GoldenBracket::new(bracket)?;

    let tol = config.tol();
    let width = bracket.width();
    if tol >= width {
        return Err(Error::ToleranceExceedsBracket { tol, width });
    }

    let eps = tol / width;
    if eps <= 0.0 {
        return Err(Error::ToleranceUnderflow { tol, width });
    }

    let steps = narrowing_steps(eps);
    let narrowed = narrow(&f, bracket, steps, &mut observer, &transform)?;

    let optimum = evaluate(&f, narrowed.bracket.estimate())?;
    let status = if narrowed.stopped {
        Status::StoppedByObserver
    } else {
        Status::Converged
    };

    Ok(Solution {
        status,
        x: optimum.x,
        objective: optimum.objective,
        bracket: narrowed.bracket.bounds(),
        iters: narrowed.iters,
    })
}

/// Minimizes `g` over `bracket` to a relative tolerance `eps`.
///
/// Unlike [`minimize`](super::minimize), `eps` is a fraction of the bracket
/// width rather than an absolute tolerance.
///
/// # Errors
///
/// Returns an error if `eps` is outside `(0, 1)`, the bracket is invalid,
/// or `g` returns NaN.
pub fn line_search<G>(g: G, bracket: [f64; 2], eps: f64) -> Result<LineSearch, Error>
where
    G: Fn(f64) -> f64,
{
    if !(eps > 0.0 && eps < 1.0) {
        return Err(Error::InvalidRelativeTolerance { eps });
    }

    let bracket = GoldenBracket::new(bracket)?;
    let narrowed = narrow(&g, bracket, narrowing_steps(eps), &mut (), &|v: f64| v)?;

    Ok(LineSearch {
        x: narrowed.bracket.estimate(),
        iters: narrowed.iters,
    })
}
