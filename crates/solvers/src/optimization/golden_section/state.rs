use super::{Error, Point, bracket::GoldenBracket};

/// Direction to shrink the bracket and where to evaluate next.
#[derive(Debug, Clone, Copy)]
pub(super) enum ShrinkDirection {
    /// Shrink left bound; payload is x for new `inner_right`.
    ShrinkLeft(f64),

    /// Shrink right bound; payload is x for new `inner_left`.
    ShrinkRight(f64),
}

impl ShrinkDirection {
    /// Returns the x value that must be evaluated for this shrink.
    pub(super) fn x(self) -> f64 {
        match self {
            Self::ShrinkLeft(x) | Self::ShrinkRight(x) => x,
        }
    }
}

/// Bracket plus the evaluated interior points.
///
/// Objectives are stored untransformed; comparisons go through the
/// transform so the same state serves minimization and maximization.
pub(super) struct State {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
}

impl State {
    /// Evaluates both interior points of a fresh bracket.
    pub(super) fn new<G>(g: &G, bracket: GoldenBracket) -> Result<Self, Error>
    where
        G: Fn(f64) -> f64,
    {
        let left = evaluate(g, bracket.inner_left)?;
        let right = evaluate(g, bracket.inner_right)?;
        Ok(Self {
            bracket,
            left,
            right,
        })
    }

    pub(super) fn bracket(&self) -> &GoldenBracket {
        &self.bracket
    }

    /// Pure query: which direction to shrink and where to evaluate next.
    pub(super) fn next_action<T: Fn(f64) -> f64>(&self, transform: &T) -> ShrinkDirection {
        if transform(self.left.objective) > transform(self.right.objective) {
            // Right is better → shrink left
            ShrinkDirection::ShrinkLeft(self.bracket.new_inner_right())
        } else {
            // Left is better (or tied) → shrink right
            ShrinkDirection::ShrinkRight(self.bracket.new_inner_left())
        }
    }

    /// Applies a shrink and stores the new evaluation.
    ///
    /// Returns the retained interior point.
    pub(super) fn apply(&mut self, direction: ShrinkDirection, point: Point) -> Point {
        match direction {
            ShrinkDirection::ShrinkRight(_) => {
                // [left, inner_right] becomes the new bracket; the old left
                // interior point moves into the right slot.
                self.bracket.shrink_right();
                self.right = self.left;
                self.left = point;
                self.right
            }
            ShrinkDirection::ShrinkLeft(_) => {
                // [inner_left, right] becomes the new bracket; the old right
                // interior point moves into the left slot.
                self.bracket.shrink_left();
                self.left = self.right;
                self.right = point;
                self.left
            }
        }
    }

    /// Marks the point stored by `direction` as worse than any real value.
    pub(super) fn assume_worse<T: Fn(f64) -> f64>(
        &mut self,
        direction: ShrinkDirection,
        transform: &T,
    ) {
        let slot = match direction {
            ShrinkDirection::ShrinkRight(_) => &mut self.left,
            ShrinkDirection::ShrinkLeft(_) => &mut self.right,
        };
        slot.objective = transform(f64::INFINITY);
    }
}

/// Evaluates the objective, rejecting NaN.
pub(super) fn evaluate<G>(g: &G, x: f64) -> Result<Point, Error>
where
    G: Fn(f64) -> f64,
{
    let objective = g(x);
    if objective.is_nan() {
        return Err(Error::NanObjective { x });
    }
    Ok(Point::new(x, objective))
}
