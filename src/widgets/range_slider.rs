//! Dual-handle range slider with a non-crossing constraint.

use crate::callback::Callback;
use crate::config::{ConfigError, Orientation, SliderConfig};
use crate::quantize;
use crate::state::{Handle, RangeDrag, RangeSliderState};
use crate::track::{Track, Zone};

/// A min/max range slider.
///
/// Two handles share one track and their values never cross: dragging one
/// handle onto the other shoves the other along by exactly one step, which
/// keeps `value_min < value_max` strict and gives the gesture a push feel
/// instead of a hard stop.
///
/// The drag protocol matches [`SingleSlider`](crate::SingleSlider) except that
/// [`begin_drag`](Self::begin_drag) names the handle the gesture targets.
#[derive(Debug)]
pub struct RangeSlider {
    config: SliderConfig,
    state: RangeSliderState,
    on_change: Callback<(f64, f64)>,
}

impl RangeSlider {
    /// Create a range slider starting at `[min, min + step]`.
    pub fn new<F>(config: SliderConfig, on_change: F) -> Result<Self, ConfigError>
    where
        F: Fn(f64, f64) + 'static,
    {
        Self::build(config, None, on_change)
    }

    /// Create a range slider with initial value overrides.
    ///
    /// The pair is applied only when `default_max > default_min` and both lie
    /// within `[min, max]`; anything else falls back to the standard initial
    /// values, never partially.
    pub fn with_defaults<F>(
        config: SliderConfig,
        default_min: f64,
        default_max: f64,
        on_change: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(f64, f64) + 'static,
    {
        Self::build(config, Some((default_min, default_max)), on_change)
    }

    fn build<F>(
        config: SliderConfig,
        defaults: Option<(f64, f64)>,
        on_change: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(f64, f64) + 'static,
    {
        config.validate()?;
        let mut state = RangeSliderState {
            value_min: config.min,
            value_max: quantize::round_display(config.min + config.step),
            progress_min: 0.0,
            progress_max: config.step_percent(),
            drag: RangeDrag::Idle,
        };
        match defaults {
            Some((lo, hi)) if hi > lo && config.contains(lo) && config.contains(hi) => {
                state.value_min = lo;
                state.value_max = hi;
                state.progress_min = config.progress_at(lo);
                state.progress_max = config.progress_at(hi);
            }
            Some((lo, hi)) => {
                log::debug!(
                    "ignoring default range {lo}..{hi}: unordered or outside [{}, {}]",
                    config.min,
                    config.max
                );
            }
            None => {}
        }
        let slider = Self {
            config,
            state,
            on_change: Callback::new(move |(lo, hi)| on_change(lo, hi)),
        };
        slider
            .on_change
            .emit((slider.state.value_min, slider.state.value_max));
        Ok(slider)
    }

    /// The configuration this slider was built with.
    pub fn config(&self) -> SliderConfig {
        self.config
    }

    /// Current state snapshot.
    pub fn state(&self) -> RangeSliderState {
        self.state
    }

    /// Current committed `(min, max)` value pair.
    pub fn values(&self) -> (f64, f64) {
        (self.state.value_min, self.state.value_max)
    }

    /// Start a drag on `handle`.
    ///
    /// Only an idle gesture can start one; a drag-start while the other handle
    /// is live is ignored.
    pub fn begin_drag(&mut self, handle: Handle) -> RangeSliderState {
        if self.state.drag.start(handle) {
            log::trace!("range slider: drag started on {handle:?}");
        } else {
            log::trace!("range slider: drag-start on {handle:?} ignored, gesture already live");
        }
        self.state
    }

    /// End the drag gesture, whichever handle holds it.
    ///
    /// Legal from anywhere on the interaction surface, including outside the
    /// track bounds.
    pub fn end_drag(&mut self) -> RangeSliderState {
        self.state.drag.stop();
        log::trace!("range slider: drag ended");
        self.state
    }

    /// Process a pointer coordinate along the drag axis. No-op while idle.
    pub fn pointer_moved(&mut self, position: f64, track: Track) -> RangeSliderState {
        let Some(handle) = self.state.drag.handle() else {
            return self.state;
        };
        let previous = self.values();
        match track.zone(position) {
            Zone::Within => {
                let raw = track.percent_of(position, self.config.orientation);
                let progress = quantize::snap_to_step(raw, self.config.step_percent())
                    .clamp(0.0, 100.0);
                self.move_within(handle, progress);
            }
            // Out-of-track clamps. Which orientation reaches which helper is
            // deliberately asymmetric, preserving the behavior of the control
            // this one replaces; see DESIGN.md.
            Zone::Before => match (handle, self.config.orientation) {
                (Handle::Min, Orientation::Horizontal) => self.set_min(0.0, self.config.min),
                (Handle::Min, Orientation::Vertical) => self.clamp_min_to_high_end(),
                (Handle::Max, Orientation::Horizontal) => self.clamp_max_to_low_end(),
                (Handle::Max, Orientation::Vertical) => self.set_max(100.0, self.config.max),
            },
            Zone::Beyond => match (handle, self.config.orientation) {
                (Handle::Min, Orientation::Horizontal) => self.clamp_min_to_high_end(),
                (Handle::Min, Orientation::Vertical) => self.set_min(0.0, self.config.min),
                (Handle::Max, Orientation::Horizontal) => self.set_max(100.0, self.config.max),
                (Handle::Max, Orientation::Vertical) => self.clamp_max_to_low_end(),
            },
        }
        let current = self.values();
        if current != previous {
            log::trace!("range slider: {previous:?} -> {current:?}");
            self.on_change.emit(current);
        }
        self.state
    }

    fn move_within(&mut self, handle: Handle, progress: f64) {
        let step_pct = self.config.step_percent();
        let curr_min = self.state.value_min;
        let curr_max = self.state.value_max;
        match handle {
            // The min handle never lands on the far end itself; the last step
            // of track is reserved for the max handle (and vice versa below).
            Handle::Min => {
                if quantize::approx_eq(progress, 100.0) {
                    return;
                }
                let value = self.config.value_at(progress);
                self.set_min(progress, value);
                if value >= curr_max && curr_max != self.config.max {
                    let shoved = quantize::round_display(value + self.config.step);
                    log::debug!("range slider: min reached {value}, shoving max to {shoved}");
                    self.set_max(progress + step_pct, shoved);
                }
            }
            Handle::Max => {
                if quantize::approx_eq(progress, 0.0) {
                    return;
                }
                let value = self.config.value_at(progress);
                self.set_max(progress, value);
                if value <= curr_min && curr_min != self.config.min {
                    let shoved = quantize::round_display(value - self.config.step);
                    log::debug!("range slider: max reached {value}, shoving min to {shoved}");
                    self.set_min(progress - step_pct, shoved);
                }
            }
        }
    }

    /// Pin the min handle one step short of the track top and force the max
    /// handle onto the top itself.
    fn clamp_min_to_high_end(&mut self) {
        self.set_min(
            100.0 - self.config.step_percent(),
            quantize::round_display(self.config.max - self.config.step),
        );
        self.set_max(100.0, self.config.max);
    }

    /// Pin the max handle one step past the track start and force the min
    /// handle onto the start itself.
    fn clamp_max_to_low_end(&mut self) {
        self.set_max(
            self.config.step_percent(),
            quantize::round_display(self.config.min + self.config.step),
        );
        self.set_min(0.0, self.config.min);
    }

    fn set_min(&mut self, progress: f64, value: f64) {
        self.state.progress_min = progress;
        self.state.value_min = value;
    }

    fn set_max(&mut self, progress: f64, value: f64) {
        self.state.progress_max = progress;
        self.state.value_max = value;
    }
}
