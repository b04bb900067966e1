//! Slider configuration and validation.
//!
//! Plain serde-derived data with an explicit `validate` step, so hosts can
//! persist slider setups alongside the rest of their settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quantize;

/// Drag axis of a slider.
///
/// The axis also fixes the visual inversion rule: horizontal tracks originate
/// at their left edge, vertical tracks at their bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Immutable per-instance slider configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Lower bound of the value range
    pub min: f64,
    /// Upper bound of the value range
    pub max: f64,
    /// Quantization granularity
    pub step: f64,
    /// Drag axis
    pub orientation: Orientation,
    /// Whether one visual tick per step should be rendered
    pub marks: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            orientation: Orientation::Horizontal,
            marks: false,
        }
    }
}

impl SliderConfig {
    /// Create the default configuration: `[0, 100]` in steps of 1, horizontal,
    /// no marks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Set the upper bound.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Set the quantization step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Set the drag axis.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enable or disable step marks.
    pub fn with_marks(mut self, marks: bool) -> Self {
        self.marks = marks;
        self
    }

    /// Check bounds and step.
    ///
    /// A step that does not evenly divide `max - min` is accepted; it degrades
    /// mark alignment and boundary snapping but is not an error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max <= self.min {
            return Err(ConfigError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(ConfigError::NonPositiveStep { step: self.step });
        }
        if self.step > self.span() {
            return Err(ConfigError::OversizedStep {
                step: self.step,
                span: self.span(),
            });
        }
        Ok(())
    }

    /// Width of the value range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// One step expressed as a percentage of the track.
    pub fn step_percent(&self) -> f64 {
        100.0 * self.step / self.span()
    }

    /// Value at a progress percentage, rounded for display.
    pub fn value_at(&self, progress: f64) -> f64 {
        quantize::round_display(progress / 100.0 * self.span() + self.min)
    }

    /// Progress percentage of a value.
    pub fn progress_at(&self, value: f64) -> f64 {
        (value - self.min) / self.span() * 100.0
    }

    /// Whether a value lies within the configured bounds, ends included.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Percent offsets of the visual step marks, one per step index from the
    /// track start.
    ///
    /// Empty unless `marks` is enabled. A step that does not evenly divide the
    /// span leaves the top of the track without a mark.
    pub fn mark_offsets(&self) -> Vec<f64> {
        if !self.marks {
            return Vec::new();
        }
        let count = (self.span() / self.step).floor() as usize + 1;
        (0..count)
            .map(|index| self.step / self.span() * 100.0 * index as f64)
            .collect()
    }
}

/// Errors reported when a slider is constructed from an invalid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// `max` does not exceed `min`
    #[error("max ({max}) must be greater than min ({min})")]
    InvertedRange { min: f64, max: f64 },

    /// `step` is zero or negative
    #[error("step ({step}) must be positive")]
    NonPositiveStep { step: f64 },

    /// `step` is wider than the whole value range
    #[error("step ({step}) exceeds the value span ({span})")]
    OversizedStep { step: f64, span: f64 },
}
