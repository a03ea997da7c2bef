//! Rubber-band mapping from drag offset to progress.
//!
//! Inside the track, offset maps linearly onto `[0, 1]`. Past either end the
//! excess is scaled by `stretchiness`, and the result is hard-clamped to
//! `[-limitation, 1 + limitation]` so huge gestures cannot run away.

use crate::{SliderConstants, TrackGeometry};

/// Pure mapping from a cumulative drag offset to a bounded progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticProgressMapper {
    stretchiness: f32,
    limitation: f32,
}

impl ElasticProgressMapper {
    pub fn new(constants: &SliderConstants) -> Self {
        Self {
            stretchiness: constants.stretchiness,
            limitation: constants.limitation,
        }
    }

    /// Offset after resistance has been applied to the part beyond the track.
    ///
    /// Infinite offsets saturate to `±f32::MAX` first, so a rigid
    /// `stretchiness` of 0 never meets `inf * 0`. NaN counts as offset 0.
    pub fn effective_offset(&self, cumulative_offset: f32, track: &TrackGeometry) -> f32 {
        let cumulative_offset = finite_offset(cumulative_offset);
        let length = track.length();
        if cumulative_offset > length {
            length + (cumulative_offset - length) * self.stretchiness
        } else if cumulative_offset < 0.0 {
            cumulative_offset * self.stretchiness
        } else {
            cumulative_offset
        }
    }

    /// Maps `cumulative_offset` to progress in `[-limitation, 1 + limitation]`.
    pub fn map(&self, cumulative_offset: f32, track: &TrackGeometry) -> f32 {
        debug_assert!(track.length() > 0.0);
        let raw = self.effective_offset(cumulative_offset, track) / track.length();
        let progress = raw.clamp(-self.limitation, 1.0 + self.limitation);
        log::trace!(
            "elastic map: offset={} length={} raw={} progress={}",
            cumulative_offset,
            track.length(),
            raw,
            progress
        );
        progress
    }

    /// Bounds every mapped value falls within.
    pub fn range(&self) -> (f32, f32) {
        (-self.limitation, 1.0 + self.limitation)
    }
}

fn finite_offset(offset: f32) -> f32 {
    if offset.is_nan() {
        0.0
    } else {
        offset.clamp(-f32::MAX, f32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sliderui_layout::Axis;

    fn track(length: f32) -> TrackGeometry {
        TrackGeometry::new(length, Axis::Horizontal).unwrap()
    }

    fn mapper() -> ElasticProgressMapper {
        ElasticProgressMapper::new(&SliderConstants::default())
    }

    #[test]
    fn linear_inside_track() {
        let mapper = mapper();
        let track = track(200.0);
        assert_eq!(mapper.map(0.0, &track), 0.0);
        assert_eq!(mapper.map(50.0, &track), 0.25);
        assert_eq!(mapper.map(200.0, &track), 1.0);
    }

    #[test]
    fn overshoot_past_end_is_resisted() {
        // 200 + 50 * 0.15 = 207.5 -> 1.0375
        let progress = mapper().map(250.0, &track(200.0));
        assert!((progress - 1.0375).abs() < 1e-5, "got {progress}");
    }

    #[test]
    fn overshoot_past_start_is_clamped_to_limitation() {
        // -500 * 0.15 = -75 -> -0.375, beyond the 0.1 limit
        let mapper = mapper();
        let track = track(200.0);
        assert!((mapper.effective_offset(-500.0, &track) + 75.0).abs() < 1e-4);
        assert_eq!(mapper.map(-500.0, &track), -0.1);
    }

    #[test]
    fn rigid_stretchiness_pins_to_ends() {
        let mapper =
            ElasticProgressMapper::new(&SliderConstants::default().with_stretchiness(0.0));
        let track = track(120.0);
        assert_eq!(mapper.map(400.0, &track), 1.0);
        assert_eq!(mapper.map(-400.0, &track), 0.0);
    }

    #[test]
    fn stays_within_range_for_any_offset() {
        let mapper = mapper();
        let (low, high) = mapper.range();
        for length in [1.0, 37.5, 200.0, 4096.0] {
            let track = track(length);
            let mut offset = -100_000.0f32;
            while offset <= 100_000.0 {
                let progress = mapper.map(offset, &track);
                assert!(
                    progress >= low && progress <= high,
                    "offset {offset} on {length} gave {progress}"
                );
                offset += 997.0;
            }
        }
    }

    #[test]
    fn non_finite_offsets_stay_in_range() {
        let rigid =
            ElasticProgressMapper::new(&SliderConstants::default().with_stretchiness(0.0));
        let track = track(200.0);
        assert_eq!(rigid.map(f32::INFINITY, &track), 1.0);
        assert_eq!(rigid.map(f32::NEG_INFINITY, &track), 0.0);
        assert_eq!(rigid.map(f32::NAN, &track), 0.0);

        let mapper = mapper();
        assert_eq!(mapper.map(f32::INFINITY, &track), 1.1);
        assert_eq!(mapper.map(f32::NEG_INFINITY, &track), -0.1);
    }

    #[test]
    fn monotonic_in_offset() {
        let mapper = mapper();
        let track = track(200.0);
        let mut previous = mapper.map(-1_000.0, &track);
        for step in -999..=1_000 {
            let progress = mapper.map(step as f32, &track);
            assert!(progress >= previous);
            previous = progress;
        }
    }
}
