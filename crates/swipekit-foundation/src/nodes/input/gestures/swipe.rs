//! Horizontal swipe classification.

/// Direction of a finished drag, if it travelled far enough to count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeResult {
    Left,
    Right,
    None,
}

/// Classifies a finalized drag distance (`start - end`) against `threshold`.
///
/// Both comparisons are strict, so a distance of exactly `threshold` or
/// `-threshold` yields [`SwipeResult::None`].
pub fn classify(distance: f32, threshold: f32) -> SwipeResult {
    if distance > threshold {
        SwipeResult::Left
    } else if distance < -threshold {
        SwipeResult::Right
    } else {
        SwipeResult::None
    }
}
