use crate::constants::{AXIS_MIN_PERCENT, MAX_PROGRESS_HANDLERS};
use crate::value_space::ValueSpace;

/// Filled segment of the track, as `(from, to)` coordinates in percent.
///
/// One handle fills from the axis start to the handle; two handles fill the
/// span between them. With more handles no progress bar is drawn.
#[must_use]
pub fn progress_span(values: &[f64], space: &ValueSpace) -> Option<(f64, f64)> {
    match values {
        [one] => Some((AXIS_MIN_PERCENT, space.value_to_coordinate(*one))),
        [a, b] => {
            let (a, b) = (space.value_to_coordinate(*a), space.value_to_coordinate(*b));
            Some((a.min(b), a.max(b)))
        }
        _ => {
            debug_assert!(values.len() > MAX_PROGRESS_HANDLERS || values.is_empty());
            None
        }
    }
}
