use crate::ConfigError;

/// Immutable tunables for the elastic behavior and hit area.
///
/// Start from [`Default`] and override with the `with_*` setters, then run
/// [`SliderConstants::validate`] (the [`Slider`](crate::Slider) constructor
/// does this for you).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConstants {
    /// Hit-area multiplier along x. Must be `>= 1`.
    pub width_scale: f32,
    /// Hit-area multiplier along y. Must be `>= 1`.
    pub height_scale: f32,
    /// Maximum elastic overshoot, as a fraction of the track. Must be `>= 0`.
    pub limitation: f32,
    /// Resistance beyond the track ends: 0 is a rigid stop, 1 no resistance.
    pub stretchiness: f32,
    /// How strongly overshoot shrinks the cross axis. Must be `>= 0`.
    pub scalieness: f32,
    /// Collapsed cross-axis thickness. Must be `>= 0`.
    pub compact_size: f32,
}

impl SliderConstants {
    pub fn with_hit_scale(mut self, width_scale: f32, height_scale: f32) -> Self {
        self.width_scale = width_scale;
        self.height_scale = height_scale;
        self
    }

    pub fn with_limitation(mut self, limitation: f32) -> Self {
        self.limitation = limitation;
        self
    }

    pub fn with_stretchiness(mut self, stretchiness: f32) -> Self {
        self.stretchiness = stretchiness;
        self
    }

    pub fn with_scalieness(mut self, scalieness: f32) -> Self {
        self.scalieness = scalieness;
        self
    }

    pub fn with_compact_size(mut self, compact_size: f32) -> Self {
        self.compact_size = compact_size;
        self
    }

    /// Checks every tunable against its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        at_least("width_scale", self.width_scale, 1.0, ">= 1")?;
        at_least("height_scale", self.height_scale, 1.0, ">= 1")?;
        at_least("limitation", self.limitation, 0.0, ">= 0")?;
        at_least("scalieness", self.scalieness, 0.0, ">= 0")?;
        at_least("compact_size", self.compact_size, 0.0, ">= 0")?;
        if !(0.0..=1.0).contains(&self.stretchiness) {
            return Err(ConfigError::OutOfRange {
                name: "stretchiness",
                value: self.stretchiness,
                expected: "0 ..= 1",
            });
        }
        Ok(())
    }
}

fn at_least(
    name: &'static str,
    value: f32,
    min: f32,
    expected: &'static str,
) -> Result<(), ConfigError> {
    // NaN fails the comparison, infinities are rejected explicitly.
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            expected,
        })
    }
}

impl Default for SliderConstants {
    fn default() -> Self {
        Self {
            width_scale: 2.0,
            height_scale: 1.5,
            limitation: 0.1,
            stretchiness: 0.15,
            scalieness: 0.25,
            compact_size: 8.0,
        }
    }
}
