//! Pure answer checks. None of these touch game state.

use crate::model::{Point, Symbol};

/// A chosen option is right when it equals the round's answer.
#[must_use]
pub fn is_correct<T: PartialEq + ?Sized>(chosen: &T, correct: &T) -> bool {
    chosen == correct
}

/// Two revealed memory cards form a pair when their symbols match.
#[must_use]
pub fn is_pair(first: Symbol, second: Symbol) -> bool {
    first == second
}

/// A click hits when it lies strictly inside the square box of the given
/// half-width centred on the target.
#[must_use]
pub fn is_hit(target: Point, click: Point, half_width: f64) -> bool {
    (click.x - target.x).abs() < half_width && (click.y - target.y).abs() < half_width
}
