use super::Point;

/// Event emitted after each narrowing step of the golden section search.
///
/// `point` is the interior point evaluated during this step and `other` is
/// the interior point carried over from the previous step. Both lie inside
/// `bracket`, which has already been narrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Narrowing step counter (1-based).
    pub iter: usize,

    /// Outer bounds after this step.
    pub bracket: [f64; 2],

    /// The newly evaluated interior point.
    pub point: Point,

    /// The retained interior point.
    pub other: Point,
}

impl Event {
    /// Returns the x value evaluated during this step.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.point.x
    }
}
