//! Single-value slider: one draggable handle on a quantized track.

use crate::callback::Callback;
use crate::config::{ConfigError, Orientation, SliderConfig};
use crate::quantize;
use crate::state::SingleSliderState;
use crate::track::{Track, Zone};

/// A single-value slider.
///
/// The host forwards drag gestures through [`begin_drag`](Self::begin_drag),
/// [`pointer_moved`](Self::pointer_moved) and [`end_drag`](Self::end_drag);
/// committed values reach the host through the change handler, which fires
/// once at construction and once per processed move that changes the value.
#[derive(Debug)]
pub struct SingleSlider {
    config: SliderConfig,
    state: SingleSliderState,
    on_change: Callback<f64>,
}

impl SingleSlider {
    /// Create a slider starting at the configured minimum.
    pub fn new<F>(config: SliderConfig, on_change: F) -> Result<Self, ConfigError>
    where
        F: Fn(f64) + 'static,
    {
        Self::build(config, None, on_change)
    }

    /// Create a slider with an initial value override.
    ///
    /// A default outside `[min, max]` is silently ignored and the slider
    /// starts at the minimum instead.
    pub fn with_default<F>(
        config: SliderConfig,
        default_value: f64,
        on_change: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(f64) + 'static,
    {
        Self::build(config, Some(default_value), on_change)
    }

    fn build<F>(
        config: SliderConfig,
        default_value: Option<f64>,
        on_change: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(f64) + 'static,
    {
        config.validate()?;
        let mut state = SingleSliderState {
            value: config.min,
            progress: 0.0,
            dragging: false,
        };
        match default_value {
            Some(value) if config.contains(value) => {
                state.value = value;
                state.progress = config.progress_at(value);
            }
            Some(value) => {
                log::debug!(
                    "ignoring default value {value} outside [{}, {}]",
                    config.min,
                    config.max
                );
            }
            None => {}
        }
        let slider = Self {
            config,
            state,
            on_change: Callback::new(on_change),
        };
        slider.on_change.emit(slider.state.value);
        Ok(slider)
    }

    /// The configuration this slider was built with.
    pub fn config(&self) -> SliderConfig {
        self.config
    }

    /// Current state snapshot.
    pub fn state(&self) -> SingleSliderState {
        self.state
    }

    /// Current committed value.
    pub fn value(&self) -> f64 {
        self.state.value
    }

    /// Current handle position as a percentage of track length.
    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    /// Start a drag gesture on the handle.
    pub fn begin_drag(&mut self) -> SingleSliderState {
        self.state.dragging = true;
        log::trace!("single slider: drag started");
        self.state
    }

    /// End the drag gesture.
    ///
    /// Legal from anywhere on the interaction surface, including outside the
    /// track bounds, so a drag can always be terminated.
    pub fn end_drag(&mut self) -> SingleSliderState {
        self.state.dragging = false;
        log::trace!("single slider: drag ended");
        self.state
    }

    /// Process a pointer coordinate along the drag axis. No-op unless a drag
    /// is live.
    pub fn pointer_moved(&mut self, position: f64, track: Track) -> SingleSliderState {
        if !self.state.dragging {
            return self.state;
        }
        let previous = self.state.value;
        match track.zone(position) {
            Zone::Within => {
                let raw = track.percent_of(position, self.config.orientation);
                let progress = quantize::snap_to_step(raw, self.config.step_percent())
                    .clamp(0.0, 100.0);
                self.state.progress = progress;
                self.state.value = self.config.value_at(progress);
            }
            // Out-of-track pointers clamp to the extreme the zone maps to
            // under the axis inversion rule.
            Zone::Before => match self.config.orientation {
                Orientation::Horizontal => self.clamp_to(0.0, self.config.min),
                Orientation::Vertical => self.clamp_to(100.0, self.config.max),
            },
            Zone::Beyond => match self.config.orientation {
                Orientation::Horizontal => self.clamp_to(100.0, self.config.max),
                Orientation::Vertical => self.clamp_to(0.0, self.config.min),
            },
        }
        if self.state.value != previous {
            log::trace!("single slider: {} -> {}", previous, self.state.value);
            self.on_change.emit(self.state.value);
        }
        self.state
    }

    fn clamp_to(&mut self, progress: f64, value: f64) {
        self.state.progress = progress;
        self.state.value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording() -> (Rc<RefCell<Vec<f64>>>, impl Fn(f64) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |v| sink.borrow_mut().push(v))
    }

    const TRACK: Track = Track {
        origin: 100.0,
        length: 400.0,
    };

    #[test]
    fn fires_once_at_construction_with_min() {
        let (seen, on_change) = recording();
        let slider = SingleSlider::new(SliderConfig::new(), on_change).unwrap();
        assert_eq!(*seen.borrow(), vec![0.0]);
        assert_eq!(slider.value(), 0.0);
        assert_eq!(slider.progress(), 0.0);
        assert!(!slider.state().dragging);
    }

    #[test]
    fn valid_default_overrides_initial_value() {
        let (seen, on_change) = recording();
        let slider = SingleSlider::with_default(SliderConfig::new(), 67.0, on_change).unwrap();
        assert_eq!(*seen.borrow(), vec![67.0]);
        assert_eq!(slider.value(), 67.0);
        assert!((slider.progress() - 67.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_default_falls_back_to_min() {
        let (seen, on_change) = recording();
        let config = SliderConfig::new().with_min(20.0).with_max(60.0).with_step(5.0);
        let slider = SingleSlider::with_default(config, 61.0, on_change).unwrap();
        assert_eq!(*seen.borrow(), vec![20.0]);
        assert_eq!(slider.value(), 20.0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SliderConfig::new().with_min(5.0).with_max(5.0);
        assert!(SingleSlider::new(config, |_| {}).is_err());
    }

    #[test]
    fn move_snaps_to_step_grid() {
        let (seen, on_change) = recording();
        let mut slider = SingleSlider::new(SliderConfig::new(), on_change).unwrap();
        slider.begin_drag();
        // 283 of [100, 500] is 45.75%, snapping to 46
        slider.pointer_moved(283.0, TRACK);
        assert_eq!(slider.value(), 46.0);
        assert!((slider.progress() - 46.0).abs() < 1e-9);
        assert_eq!(*seen.borrow(), vec![0.0, 46.0]);
    }

    #[test]
    fn move_without_drag_is_a_no_op() {
        let (seen, on_change) = recording();
        let mut slider = SingleSlider::new(SliderConfig::new(), on_change).unwrap();
        let before = slider.state();
        let after = slider.pointer_moved(300.0, TRACK);
        assert_eq!(after, before);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn repeated_move_fires_once() {
        let (seen, on_change) = recording();
        let mut slider = SingleSlider::new(SliderConfig::new(), on_change).unwrap();
        slider.begin_drag();
        let first = slider.pointer_moved(283.0, TRACK);
        let second = slider.pointer_moved(283.0, TRACK);
        assert_eq!(first, second);
        assert_eq!(*seen.borrow(), vec![0.0, 46.0]);
    }

    #[test]
    fn pointer_below_horizontal_track_clamps_to_min() {
        let (seen, on_change) = recording();
        let config = SliderConfig::new().with_min(20.0).with_max(60.0).with_step(5.0);
        let mut slider = SingleSlider::with_default(config, 40.0, on_change).unwrap();
        slider.begin_drag();
        slider.pointer_moved(42.0, TRACK);
        assert_eq!(slider.value(), 20.0);
        assert_eq!(slider.progress(), 0.0);
        assert_eq!(*seen.borrow(), vec![40.0, 20.0]);
    }

    #[test]
    fn pointer_past_horizontal_track_clamps_to_max() {
        let (_, on_change) = recording();
        let mut slider = SingleSlider::new(SliderConfig::new(), on_change).unwrap();
        slider.begin_drag();
        slider.pointer_moved(512.0, TRACK);
        assert_eq!(slider.value(), 100.0);
        assert_eq!(slider.progress(), 100.0);
    }

    #[test]
    fn vertical_clamps_are_axis_inverted() {
        let (_, on_change) = recording();
        let config = SliderConfig::new().with_orientation(Orientation::Vertical);
        let mut slider = SingleSlider::new(config, on_change).unwrap();
        slider.begin_drag();

        // past the track end (below it on screen) is the low extreme
        slider.pointer_moved(640.0, TRACK);
        assert_eq!(slider.progress(), 0.0);
        assert_eq!(slider.value(), 0.0);

        // before the track start (above it on screen) is the high extreme
        slider.pointer_moved(3.0, TRACK);
        assert_eq!(slider.progress(), 100.0);
        assert_eq!(slider.value(), 100.0);
    }

    #[test]
    fn vertical_in_track_motion_is_inverted() {
        let (_, on_change) = recording();
        let config = SliderConfig::new().with_orientation(Orientation::Vertical);
        let mut slider = SingleSlider::new(config, on_change).unwrap();
        slider.begin_drag();
        // 25% down the track is 75% progress
        slider.pointer_moved(200.0, TRACK);
        assert_eq!(slider.value(), 75.0);
    }

    #[test]
    fn track_start_itself_is_in_track() {
        let (_, on_change) = recording();
        let mut slider = SingleSlider::new(SliderConfig::new(), on_change).unwrap();
        slider.begin_drag();
        slider.pointer_moved(TRACK.origin, TRACK);
        assert_eq!(slider.value(), 0.0);
        assert_eq!(slider.progress(), 0.0);
    }

    #[test]
    fn end_drag_stops_processing() {
        let (seen, on_change) = recording();
        let mut slider = SingleSlider::new(SliderConfig::new(), on_change).unwrap();
        slider.begin_drag();
        slider.pointer_moved(300.0, TRACK);
        slider.end_drag();
        slider.pointer_moved(400.0, TRACK);
        assert_eq!(slider.value(), 50.0);
        assert_eq!(seen.borrow().len(), 2);
    }
}
