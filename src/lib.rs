//! slider_ui - drag-to-value slider cores with a platform-free contract
//!
//! This crate implements the interaction logic of two range-input controls: a
//! single-value slider ([`SingleSlider`]) and a dual-handle min/max range
//! slider ([`RangeSlider`]). The host owns the platform (pointer/touch event
//! subscription, rendering); the core consumes pre-extracted scalar
//! coordinates plus [`Track`] geometry through explicit drag methods, and
//! reports committed values through a mandatory change handler.
//!
//! Pointer positions are quantized to the configured step grid, out-of-track
//! positions clamp to the axis-appropriate extreme, and the range variant
//! keeps its handles strictly ordered by shoving the non-dragged handle one
//! step when the dragged one would otherwise cross it.

mod callback;
mod config;
mod quantize;
mod state;
mod track;
mod widgets;

pub use callback::Callback;
pub use config::{ConfigError, Orientation, SliderConfig};
pub use quantize::{round_display, snap_to_step};
pub use state::{Handle, RangeDrag, RangeSliderState, SingleSliderState};
pub use track::{Track, Zone};
pub use widgets::{RangeSlider, SingleSlider};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, Orientation, SliderConfig};
    pub use crate::state::{Handle, RangeDrag, RangeSliderState, SingleSliderState};
    pub use crate::track::{Track, Zone};
    pub use crate::widgets::{RangeSlider, SingleSlider};
}
