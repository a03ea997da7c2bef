//! Robot-style driver for slider gestures.
//!
//! A [`SliderRobot`] owns a [`Slider`] plus a virtual clock, so tests can
//! script presses, drags and releases and then step time forward to check
//! the post-release linger without sleeping.
//!
//! # Example
//!
//! ```
//! use sliderui_core::prelude::*;
//! use sliderui_testing::SliderRobot;
//!
//! let mut robot = SliderRobot::horizontal(200.0, 0.5);
//! robot.press();
//! robot.drag_to(Point::new(50.0, 0.0));
//! robot.release();
//! assert_eq!(robot.slider().progress(), 0.75);
//!
//! robot.advance_millis(1_250);
//! assert!(!robot.slider().is_dragging());
//! ```

use sliderui_core::{
    SharedProgress, Slider, SliderChange, SliderConfiguration, SliderConstants,
};
use sliderui_graphics::Point;
use web_time::{Duration, Instant};

/// Scripted pointer driver with a virtual clock.
pub struct SliderRobot {
    slider: Slider,
    binding: SharedProgress,
    origin: Instant,
    elapsed: Duration,
    translation: Point,
    log: Vec<SliderChange>,
}

impl SliderRobot {
    /// Wraps an existing slider. `binding` should be the handle it was built with.
    pub fn new(slider: Slider, binding: SharedProgress) -> Self {
        Self {
            slider,
            binding,
            origin: Instant::now(),
            elapsed: Duration::ZERO,
            translation: Point::ZERO,
            log: Vec::new(),
        }
    }

    /// Builds a robot around a slider with the given configuration.
    ///
    /// Panics on invalid configuration; robots are test-only.
    pub fn with_config(
        configuration: SliderConfiguration,
        constants: SliderConstants,
        track_length: f32,
        initial: f32,
    ) -> Self {
        let binding = SharedProgress::new(initial);
        let slider = Slider::new(binding.clone(), configuration, constants, track_length)
            .unwrap_or_else(|err| panic!("robot slider configuration rejected: {err}"));
        Self::new(slider, binding)
    }

    /// Horizontal slider with default constants.
    pub fn horizontal(track_length: f32, initial: f32) -> Self {
        Self::with_config(
            SliderConfiguration::default(),
            SliderConstants::default(),
            track_length,
            initial,
        )
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut Slider {
        &mut self.slider
    }

    pub fn binding(&self) -> &SharedProgress {
        &self.binding
    }

    /// Current virtual time.
    pub fn now(&self) -> Instant {
        self.origin + self.elapsed
    }

    /// Every change reported since the robot was created or last drained.
    pub fn changes(&self) -> &[SliderChange] {
        &self.log
    }

    pub fn take_changes(&mut self) -> Vec<SliderChange> {
        std::mem::take(&mut self.log)
    }

    /// Pointer down. Resets the gesture translation.
    pub fn press(&mut self) {
        self.translation = Point::ZERO;
        let changes = self.slider.on_pointer_down();
        self.log.extend(changes);
    }

    /// Moves the pointer to an absolute translation from the press point.
    pub fn drag_to(&mut self, translation: Point) {
        self.translation = translation;
        let changes = self.slider.on_pointer_move(translation);
        self.log.extend(changes);
    }

    /// Moves the pointer by `delta` relative to its current translation.
    pub fn drag_by(&mut self, delta: Point) {
        self.drag_to(self.translation + delta);
    }

    /// Moves towards `translation` in evenly spaced steps, like a real
    /// pointer reporting intermediate positions.
    pub fn drag_in_steps(&mut self, translation: Point, steps: usize) {
        let from = self.translation;
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.drag_to(Point::new(
                from.x + (translation.x - from.x) * t,
                from.y + (translation.y - from.y) * t,
            ));
        }
    }

    /// Pointer up at the current virtual time.
    pub fn release(&mut self) {
        let now = self.now();
        let changes = self.slider.on_pointer_up_at(now);
        self.log.extend(changes);
    }

    /// Full press, stepped drag, release sequence.
    pub fn swipe(&mut self, translation: Point) {
        self.press();
        self.drag_in_steps(translation, 10);
        self.release();
    }

    /// Writes the external binding on behalf of outside code.
    pub fn set_external(&mut self, value: f32) {
        let changes = self.slider.on_external_progress_set(value);
        self.log.extend(changes);
    }

    /// Advances the virtual clock and delivers any due timer.
    pub fn advance(&mut self, duration: Duration) {
        self.elapsed += duration;
        let now = self.now();
        let changes = self.slider.tick(now);
        if !changes.is_empty() {
            log::debug!("robot tick at {:?}: {:?}", self.elapsed, changes);
        }
        self.log.extend(changes);
    }

    pub fn advance_millis(&mut self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    /// Advances until the pending deadline, if any, has fired.
    pub fn wait_for_idle(&mut self) {
        if let Some(deadline) = self.slider.next_deadline() {
            let remaining = deadline.saturating_duration_since(self.now());
            self.advance(remaining);
        }
    }
}
