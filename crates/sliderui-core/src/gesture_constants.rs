//! Shared gesture timing for slider interaction.
//!
//! The presentation layer keys its expanded/compact transition off the
//! drag-active flag, so these values are part of the public contract.

use web_time::Duration;

/// Delay between pointer release and the drag-active flag turning off, in
/// milliseconds.
///
/// The slider stays in its expanded visual state for this long after the
/// finger lifts, then collapses back to its compact form. A new press
/// before the delay elapses keeps the slider expanded.
pub const RELEASE_LINGER_MS: u64 = 1_250;

/// [`RELEASE_LINGER_MS`] as a [`Duration`].
pub const RELEASE_LINGER: Duration = Duration::from_millis(RELEASE_LINGER_MS);
