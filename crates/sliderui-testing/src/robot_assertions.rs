//! Assertion utilities for robot testing
//!
//! Progress values pass through float arithmetic (resistance, division by
//! the track length), so most checks compare within a tolerance.

use sliderui_core::{Slider, SliderChange};

/// Default tolerance for progress comparisons.
pub const PROGRESS_TOLERANCE: f32 = 1e-5;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert the slider's progress within [`PROGRESS_TOLERANCE`].
pub fn assert_progress(slider: &Slider, expected: f32, msg: &str) {
    assert_approx_eq(slider.progress(), expected, PROGRESS_TOLERANCE, msg);
}

/// Assert that progress lies within `[low, high]`.
pub fn assert_progress_within(slider: &Slider, low: f32, high: f32, msg: &str) {
    let progress = slider.progress();
    assert!(
        progress >= low && progress <= high,
        "{}: progress {} outside [{}, {}]",
        msg,
        progress,
        low,
        high
    );
}

/// Assert that a change log contains a drag-flag flip to `active`.
pub fn assert_dragging_reported(changes: &[SliderChange], active: bool, msg: &str) {
    assert!(
        changes.contains(&SliderChange::Dragging(active)),
        "{}: no Dragging({}) in {:?}",
        msg,
        active,
        changes
    );
}

/// Assert that no binding write in the log left `[0, 1]`.
pub fn assert_binding_writes_clamped(changes: &[SliderChange], msg: &str) {
    for change in changes {
        if let SliderChange::BindingWritten(value) = change {
            assert!(
                (0.0..=1.0).contains(value),
                "{}: binding write {} outside [0, 1]",
                msg,
                value
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_accepts_within_tolerance() {
        assert_approx_eq(1.0375, 1.03750002, 1e-6, "close values");
    }

    #[test]
    #[should_panic(expected = "far values")]
    fn approx_eq_rejects_outside_tolerance() {
        assert_approx_eq(1.0, 1.1, 1e-3, "far values");
    }

    #[test]
    fn clamped_writes_pass() {
        let changes = [
            SliderChange::Progress(1.04),
            SliderChange::BindingWritten(1.0),
            SliderChange::Dragging(true),
        ];
        assert_binding_writes_clamped(&changes, "clamped");
        assert_dragging_reported(&changes, true, "drag start");
    }
}
