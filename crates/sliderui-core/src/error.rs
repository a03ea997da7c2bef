use std::fmt;

/// Configuration defects detected while building or re-laying out a slider.
///
/// These indicate a bug upstream (bad layout or bad constants); pointer
/// input itself never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The track has no usable extent along its axis.
    NonPositiveTrackLength(f32),
    /// A tunable lies outside its documented range.
    OutOfRange {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveTrackLength(length) => {
                write!(f, "track length must be positive and finite, got {length}")
            }
            ConfigError::OutOfRange {
                name,
                value,
                expected,
            } => write!(f, "{name} = {value} is out of range, expected {expected}"),
        }
    }
}

impl std::error::Error for ConfigError {}
