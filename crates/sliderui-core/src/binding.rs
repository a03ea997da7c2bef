//! Two-way synchronization with an externally owned progress value.
//!
//! Outward: every progress change from a drag or commit is written to the
//! binding as `clamp(progress, 0, 1)`, so observers see live feedback.
//!
//! Inward: a foreign write is adopted only if it differs from the internal
//! progress and lies strictly inside `(0, 1)`. Exact `0` and `1` are
//! ignored so an outside reset cannot fight a drag pinned at a boundary.
//!
//! Each write is tagged with its [`Writer`]. The inward path skips writes
//! tagged [`Writer::Slider`], so the slider never reacts to its own echo.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Who performed the most recent write to a [`SharedProgress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Writer {
    Slider,
    External,
}

struct SharedProgressInner {
    value: Cell<f32>,
    version: Cell<u64>,
    last_writer: Cell<Writer>,
}

/// Cloneable handle to an externally owned progress value.
///
/// All clones observe the same value. Access is confined to one thread,
/// matching the single event loop the slider runs on.
#[derive(Clone)]
pub struct SharedProgress {
    inner: Rc<SharedProgressInner>,
}

impl SharedProgress {
    pub fn new(value: f32) -> Self {
        Self {
            inner: Rc::new(SharedProgressInner {
                value: Cell::new(value),
                version: Cell::new(0),
                last_writer: Cell::new(Writer::External),
            }),
        }
    }

    pub fn get(&self) -> f32 {
        self.inner.value.get()
    }

    /// Writes a new value on behalf of code outside the slider.
    pub fn set(&self, value: f32) {
        self.write(value, Writer::External);
    }

    /// Incremented on every write, including writes of an unchanged value.
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    pub fn last_writer(&self) -> Writer {
        self.inner.last_writer.get()
    }

    fn write(&self, value: f32, writer: Writer) {
        self.inner.value.set(value);
        self.inner.last_writer.set(writer);
        self.inner.version.set(self.inner.version.get().wrapping_add(1));
    }
}

impl fmt::Debug for SharedProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedProgress")
            .field("value", &self.get())
            .field("version", &self.version())
            .field("last_writer", &self.last_writer())
            .finish()
    }
}

impl Default for SharedProgress {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Inward rule: the internal progress to adopt for an external `value`, or
/// `None` if the write must be ignored.
pub fn accept_external(value: f32, current: f32) -> Option<f32> {
    if value != current && value > 0.0 && value < 1.0 {
        Some(value.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Keeps a [`SharedProgress`] and the slider's internal progress in step.
#[derive(Debug)]
pub struct BindingSynchronizer {
    binding: SharedProgress,
    seen_version: u64,
}

impl BindingSynchronizer {
    pub fn new(binding: SharedProgress) -> Self {
        let seen_version = binding.version();
        Self {
            binding,
            seen_version,
        }
    }

    pub fn binding(&self) -> &SharedProgress {
        &self.binding
    }

    /// Seed for the internal progress, clamped to the at-rest range.
    pub fn initial_progress(&self) -> f32 {
        let value = self.binding.get();
        if value.is_nan() {
            log::warn!("external progress is NaN; seeding with 0");
            return 0.0;
        }
        value.clamp(0.0, 1.0)
    }

    /// Outward rule. Writes `clamp(progress, 0, 1)` tagged as the slider's
    /// own write and returns the value written.
    pub fn push_outward(&mut self, progress: f32) -> f32 {
        let value = progress.clamp(0.0, 1.0);
        self.binding.write(value, Writer::Slider);
        self.seen_version = self.binding.version();
        log::trace!("binding <- {}", value);
        value
    }

    /// Inward rule. Looks for foreign writes since the last check and
    /// returns the progress to adopt, if any.
    pub fn pull_inward(&mut self, current: f32) -> Option<f32> {
        let version = self.binding.version();
        if version == self.seen_version {
            return None;
        }
        self.seen_version = version;
        if self.binding.last_writer() == Writer::Slider {
            return None;
        }
        let value = self.binding.get();
        let accepted = accept_external(value, current);
        match accepted {
            Some(progress) => log::debug!("external progress {} adopted", progress),
            None => log::debug!(
                "external progress {} ignored (internal {})",
                value,
                current
            ),
        }
        accepted
    }
}
