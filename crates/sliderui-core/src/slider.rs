//! The slider facade the presentation adapter talks to.
//!
//! Pointer events and external writes go in; every handler runs to
//! completion and reports what changed as [`SliderChanges`]. An empty list
//! means nothing observable moved and no redraw is needed.

use smallvec::SmallVec;
use sliderui_graphics::{Point, Rect, Size};
use sliderui_layout::{Axis, Edge};
use web_time::Instant;

use crate::{
    hit_area, scale_anchor, scale_factor, BindingSynchronizer, ConfigError, FillType,
    GestureController, GesturePhase, ScaleEffect, SharedProgress, SliderConfiguration,
    SliderConstants, TrackGeometry,
};

/// One observable change produced by a handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderChange {
    /// Internal progress moved to this value.
    Progress(f32),
    /// The drag-active flag flipped.
    Dragging(bool),
    /// This value was written to the external binding.
    BindingWritten(f32),
}

pub type SliderChanges = SmallVec<[SliderChange; 4]>;

/// Everything a stateless renderer needs to draw the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSnapshot {
    pub progress: f32,
    pub is_dragging: bool,
    pub visual_scale: f32,
    pub scale_anchor: Edge,
    pub axis: Axis,
    pub fill_type: FillType,
}

#[derive(Debug)]
pub struct Slider {
    configuration: SliderConfiguration,
    constants: SliderConstants,
    track: TrackGeometry,
    gesture: GestureController,
    binding: BindingSynchronizer,
    progress: f32,
}

impl Slider {
    /// Builds a slider seeded from `binding`.
    ///
    /// Fails if the constants are out of range or the track has no length.
    pub fn new(
        binding: SharedProgress,
        configuration: SliderConfiguration,
        constants: SliderConstants,
        track_length: f32,
    ) -> Result<Self, ConfigError> {
        constants.validate()?;
        let track = TrackGeometry::new(track_length, configuration.axis)?;
        let binding = BindingSynchronizer::new(binding);
        let progress = binding.initial_progress();
        let mut gesture = GestureController::new(&constants);
        gesture.reset_offsets(progress, &track);

        Ok(Self {
            configuration,
            constants,
            track,
            gesture,
            binding,
            progress,
        })
    }

    pub fn configuration(&self) -> &SliderConfiguration {
        &self.configuration
    }

    pub fn constants(&self) -> &SliderConstants {
        &self.constants
    }

    pub fn track(&self) -> &TrackGeometry {
        &self.track
    }

    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    pub fn binding(&self) -> &SharedProgress {
        self.binding.binding()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn visual_scale(&self) -> f32 {
        scale_factor(self.progress, self.constants.scalieness)
    }

    pub fn scale_anchor(&self) -> Edge {
        scale_anchor(self.progress, self.configuration.axis)
    }

    pub fn scale_effect(&self) -> ScaleEffect {
        ScaleEffect::compute(
            self.progress,
            self.configuration.axis,
            self.constants.scalieness,
        )
    }

    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            progress: self.progress,
            is_dragging: self.is_dragging(),
            visual_scale: self.visual_scale(),
            scale_anchor: self.scale_anchor(),
            axis: self.configuration.axis,
            fill_type: self.configuration.fill_type,
        }
    }

    /// Pending deactivation deadline, for `WaitUntil`-style event loops.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.gesture.deactivation_deadline()
    }

    /// Accepts a new layout snapshot of the control's size.
    pub fn set_track_size(&mut self, size: Size) -> Result<(), ConfigError> {
        let track = TrackGeometry::from_size(size, self.configuration.axis)?;
        self.apply_track(track);
        Ok(())
    }

    /// Accepts a new track length. Invalid lengths keep the old geometry.
    pub fn set_track_length(&mut self, length: f32) -> Result<(), ConfigError> {
        let track = TrackGeometry::new(length, self.configuration.axis)?;
        self.apply_track(track);
        Ok(())
    }

    fn apply_track(&mut self, track: TrackGeometry) {
        if track == self.track {
            return;
        }
        self.track = track;
        // Mid-drag the offsets stay put; the next move maps against the new
        // length.
        if self.gesture.phase() == GesturePhase::Idle {
            self.gesture.reset_offsets(self.progress, &self.track);
        }
        log::debug!("track length now {}", self.track.length());
    }

    pub fn on_pointer_down(&mut self) -> SliderChanges {
        let mut changes = SliderChanges::new();
        self.pull_external(&mut changes);
        let was_active = self.gesture.is_active();
        if self.gesture.pointer_down() && !was_active {
            changes.push(SliderChange::Dragging(true));
        }
        changes
    }

    /// Like [`Slider::on_pointer_down`], but only starts a drag when
    /// `position` falls inside the enlarged hit area around `bounds`.
    pub fn on_pointer_down_in(&mut self, position: Point, bounds: Rect) -> SliderChanges {
        if !hit_area(bounds, &self.constants).contains_point(position) {
            log::trace!(
                "pointer down at ({}, {}) outside hit area",
                position.x,
                position.y
            );
            return SliderChanges::new();
        }
        self.on_pointer_down()
    }

    /// `translation` is the total pointer movement since pointer-down.
    pub fn on_pointer_move(&mut self, translation: Point) -> SliderChanges {
        let mut changes = SliderChanges::new();
        self.pull_external(&mut changes);
        if let Some(progress) = self.gesture.pointer_move(translation, &self.track) {
            self.apply_gesture_progress(progress, &mut changes);
        }
        changes
    }

    pub fn on_pointer_up(&mut self) -> SliderChanges {
        self.on_pointer_up_at(Instant::now())
    }

    /// Commits the gesture and schedules the drag flag to clear at
    /// `now + RELEASE_LINGER`.
    pub fn on_pointer_up_at(&mut self, now: Instant) -> SliderChanges {
        let mut changes = SliderChanges::new();
        self.pull_external(&mut changes);
        if let Some(progress) = self.gesture.pointer_up(&self.track, now) {
            self.apply_gesture_progress(progress, &mut changes);
        }
        changes
    }

    /// Hard commit of the current offset without ending the gesture.
    pub fn commit(&mut self) -> SliderChanges {
        let mut changes = SliderChanges::new();
        self.pull_external(&mut changes);
        let progress = self.gesture.commit(&self.track);
        self.apply_gesture_progress(progress, &mut changes);
        changes
    }

    /// Applies a due drag-flag deactivation.
    pub fn tick(&mut self, now: Instant) -> SliderChanges {
        let mut changes = SliderChanges::new();
        if self.gesture.tick(now) {
            changes.push(SliderChange::Dragging(false));
        }
        changes
    }

    /// Writes `value` to the binding on behalf of outside code and runs the
    /// inward rule.
    pub fn on_external_progress_set(&mut self, value: f32) -> SliderChanges {
        self.binding.binding().set(value);
        self.sync_external()
    }

    /// Picks up writes other code made directly on the shared binding.
    pub fn sync_external(&mut self) -> SliderChanges {
        let mut changes = SliderChanges::new();
        self.pull_external(&mut changes);
        changes
    }

    fn pull_external(&mut self, changes: &mut SliderChanges) {
        if let Some(progress) = self.binding.pull_inward(self.progress) {
            self.progress = progress;
            self.gesture.reset_offsets(progress, &self.track);
            changes.push(SliderChange::Progress(progress));
        }
    }

    fn apply_gesture_progress(&mut self, progress: f32, changes: &mut SliderChanges) {
        if progress == self.progress {
            return;
        }
        self.progress = progress;
        changes.push(SliderChange::Progress(progress));
        let written = self.binding.push_outward(progress);
        changes.push(SliderChange::BindingWritten(written));
    }
}
