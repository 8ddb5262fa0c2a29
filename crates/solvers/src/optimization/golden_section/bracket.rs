use thiserror::Error;

/// The golden section fraction: τ = 1 − 1/φ = (3 − √5) / 2.
///
/// Interior points sit a fraction τ in from each end of the bracket.
pub(super) const TAU: f64 = 0.381_966_011_250_105_1;

/// Errors that can occur when validating bracket bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s): [{left}, {right}]")]
    NonFinite { left: f64, right: f64 },

    /// Endpoints are equal, giving zero width.
    #[error("zero width bracket at {value}")]
    ZeroWidth { value: f64 },

    /// Endpoints are finite but their distance overflows.
    #[error("bracket width overflows: [{left}, {right}]")]
    WidthOverflow { left: f64, right: f64 },
}

/// Golden section search bracket.
///
/// Maintains the outer interval [left, right] and two interior points
/// positioned by the golden section fraction [`TAU`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct GoldenBracket {
    /// Outer left bound.
    pub(super) left: f64,

    /// Outer right bound.
    pub(super) right: f64,

    /// Inner left point at `(1 - τ) * left + τ * right`.
    pub(super) inner_left: f64,

    /// Inner right point at `τ * left + (1 - τ) * right`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a validated bracket, swapping reversed bounds.
    ///
    /// # Errors
    ///
    /// Returns a [`BracketError`] if either bound is non-finite or the bounds
    /// are equal.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite { left: a, right: b });
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(BracketError::ZeroWidth { value: a });
        }

        let (left, right) = if a < b { (a, b) } else { (b, a) };
        if !(right - left).is_finite() {
            return Err(BracketError::WidthOverflow { left, right });
        }

        Ok(Self {
            left,
            right,
            inner_left: lower_point(left, right),
            inner_right: upper_point(left, right),
        })
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the outer bounds as an array.
    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Shrinks the bounds to `[left, inner_right]`.
    ///
    /// The old `inner_left` becomes the new `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = lower_point(self.left, self.right);
    }

    /// Shrinks the bounds to `[inner_left, right]`.
    ///
    /// The old `inner_right` becomes the new `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = upper_point(self.left, self.right);
    }

    /// Returns x for the new `inner_left` after shrinking right (without mutating).
    pub(super) fn new_inner_left(&self) -> f64 {
        lower_point(self.left, self.inner_right)
    }

    /// Returns x for the new `inner_right` after shrinking left (without mutating).
    pub(super) fn new_inner_right(&self) -> f64 {
        upper_point(self.inner_left, self.right)
    }

    /// Returns the optimum estimate: the mean of all four tracked abscissas.
    pub(super) fn estimate(&self) -> f64 {
        (self.left + self.inner_left + self.inner_right + self.right) / 4.0
    }
}

/// Returns the number of narrowing steps needed to reach relative width `eps`.
///
/// Computes `N = ceil(ln(eps) / ln(1 - τ) + 3)` and returns `N - 3`.
/// The caller guarantees `0 < eps < 1`, so the result is at least one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn narrowing_steps(eps: f64) -> usize {
    let total = (eps.ln() / (1.0 - TAU).ln() + 3.0).ceil();
    (total as usize).saturating_sub(3)
}

fn lower_point(left: f64, right: f64) -> f64 {
    (1.0 - TAU) * left + TAU * right
}

fn upper_point(left: f64, right: f64) -> f64 {
    TAU * left + (1.0 - TAU) * right
}
