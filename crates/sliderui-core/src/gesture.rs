//! Drag gesture state machine.
//!
//! `Idle --down--> Dragging --move*--> Dragging --up--> Idle`
//!
//! Every move recomputes progress through the elastic mapper. Release
//! clamps the offset rigidly onto the track (no elasticity) and commits it;
//! the drag-active flag then lingers for [`RELEASE_LINGER`] before turning
//! off, unless a new press arrives first.
//!
//! [`RELEASE_LINGER`]: crate::gesture_constants::RELEASE_LINGER

use sliderui_graphics::Point;
use web_time::Instant;

use crate::{ElasticProgressMapper, ReleaseTimer, SliderConstants, TrackGeometry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
}

/// Offsets of the current (or last) pointer interaction, along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    /// Live offset: committed offset plus the projected gesture translation.
    pub cumulative_offset: f32,
    /// Offset at the last commit, or as re-derived from external progress.
    pub committed_offset: f32,
    /// Drag-active flag seen by the presentation layer.
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct GestureController {
    mapper: ElasticProgressMapper,
    session: DragSession,
    phase: GesturePhase,
    release_timer: ReleaseTimer,
}

impl GestureController {
    pub fn new(constants: &SliderConstants) -> Self {
        Self {
            mapper: ElasticProgressMapper::new(constants),
            session: DragSession::default(),
            phase: GesturePhase::Idle,
            release_timer: ReleaseTimer::new(),
        }
    }

    pub fn with_release_timer(mut self, release_timer: ReleaseTimer) -> Self {
        self.release_timer = release_timer;
        self
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active
    }

    pub fn mapper(&self) -> &ElasticProgressMapper {
        &self.mapper
    }

    /// Pending deactivation deadline, if a release is lingering.
    pub fn deactivation_deadline(&self) -> Option<Instant> {
        self.release_timer.deadline()
    }

    /// Starts a drag. Returns `false` if one is already in progress.
    pub fn pointer_down(&mut self) -> bool {
        if self.phase == GesturePhase::Dragging {
            log::warn!("pointer down while already dragging; ignoring");
            return false;
        }
        if self.release_timer.cancel() {
            log::debug!("pending release deactivation superseded by new press");
        }
        self.phase = GesturePhase::Dragging;
        self.session.is_active = true;
        self.session.cumulative_offset = self.session.committed_offset;
        log::debug!(
            "drag started at committed offset {}",
            self.session.committed_offset
        );
        true
    }

    /// Applies the gesture's total translation since pointer-down.
    ///
    /// Returns the new elastic progress, or `None` when no drag is active.
    pub fn pointer_move(&mut self, translation: Point, track: &TrackGeometry) -> Option<f32> {
        if self.phase != GesturePhase::Dragging {
            log::warn!("pointer move without an active drag; ignoring");
            return None;
        }
        let displacement = track.axis().project(translation);
        if displacement.is_nan() {
            log::warn!("pointer move with NaN translation; ignoring");
            return None;
        }
        if displacement.is_infinite() {
            log::warn!("pointer move with infinite translation; saturating");
        }
        let displacement = displacement.clamp(-f32::MAX, f32::MAX);
        self.session.cumulative_offset = self.session.committed_offset + displacement;
        log::trace!(
            "drag move: translation=({}, {}) offset={}",
            translation.x,
            translation.y,
            self.session.cumulative_offset
        );
        Some(self.mapper.map(self.session.cumulative_offset, track))
    }

    /// Ends the drag: commits and schedules the drag-active flag to turn off.
    ///
    /// Returns the committed progress, or `None` when no drag was active.
    pub fn pointer_up(&mut self, track: &TrackGeometry, now: Instant) -> Option<f32> {
        if self.phase != GesturePhase::Dragging {
            log::warn!("pointer up without an active drag; ignoring");
            return None;
        }
        self.phase = GesturePhase::Idle;
        let progress = self.commit(track);
        self.release_timer.schedule(now);
        Some(progress)
    }

    /// Rigidly clamps the live offset onto the track and records it as the
    /// committed offset. Always lands in `[0, 1]` and is idempotent.
    pub fn commit(&mut self, track: &TrackGeometry) -> f32 {
        let offset = track.clamp_offset(self.session.cumulative_offset);
        self.session.cumulative_offset = offset;
        self.session.committed_offset = offset;
        let progress = self.mapper.map(offset, track);
        log::debug!("committed offset {} -> progress {}", offset, progress);
        progress
    }

    /// Turns the drag-active flag off once the release delay has elapsed.
    /// Returns `true` if the flag changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.release_timer.tick(now) && self.session.is_active {
            self.session.is_active = false;
            log::debug!("release linger elapsed; drag flag cleared");
            return true;
        }
        false
    }

    /// Re-derives both offsets from a progress value set from outside the
    /// gesture (external binding write or layout change).
    pub fn reset_offsets(&mut self, progress: f32, track: &TrackGeometry) {
        let offset = progress * track.length();
        self.session.committed_offset = offset;
        self.session.cumulative_offset = offset;
    }
}
