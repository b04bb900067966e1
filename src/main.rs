//! slider_ui example application
//!
//! Builds the demo roster of sliders and drives each one with a scripted drag
//! gesture, logging every committed change. A real host would forward its
//! pointer events instead of the scripted positions used here.

use std::cell::RefCell;
use std::rc::Rc;

use slider_ui::prelude::*;

/// Shared track geometry for the scripted gestures: 400 units long, starting
/// at offset 100 along the drag axis.
const TRACK: Track = Track {
    origin: 100.0,
    length: 400.0,
};

fn watch(label: &'static str, store: &Rc<RefCell<f64>>) -> impl Fn(f64) + 'static {
    let store = Rc::clone(store);
    move |value| {
        *store.borrow_mut() = value;
        log::info!("{label}: {value}");
    }
}

fn watch_range(label: &'static str, store: &Rc<RefCell<(f64, f64)>>) -> impl Fn(f64, f64) + 'static {
    let store = Rc::clone(store);
    move |lo, hi| {
        *store.borrow_mut() = (lo, hi);
        log::info!("{label}: {lo} - {hi}");
    }
}

/// Drag the single handle through a few positions.
fn drive(slider: &mut SingleSlider, positions: &[f64]) {
    slider.begin_drag();
    for &position in positions {
        slider.pointer_moved(position, TRACK);
    }
    slider.end_drag();
}

/// Drag one range handle through a few positions.
fn drive_range(slider: &mut RangeSlider, handle: Handle, positions: &[f64]) {
    slider.begin_drag(handle);
    for &position in positions {
        slider.pointer_moved(position, TRACK);
    }
    slider.end_drag();
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let value1 = Rc::new(RefCell::new(0.0));
    let value2 = Rc::new(RefCell::new(0.0));
    let value3 = Rc::new(RefCell::new(0.0));
    let value4 = Rc::new(RefCell::new(0.0));
    let value5 = Rc::new(RefCell::new(0.0));
    let range1 = Rc::new(RefCell::new((0.0, 0.0)));
    let range2 = Rc::new(RefCell::new((0.0, 0.0)));
    let range3 = Rc::new(RefCell::new((0.0, 0.0)));
    let range4 = Rc::new(RefCell::new((0.0, 0.0)));

    // 1. min: 0, max: 100, step: 1
    let mut slider1 = SingleSlider::new(SliderConfig::new(), watch("value 1", &value1))?;

    // 2. min: 20, max: 60, step: 5
    let config2 = SliderConfig::new().with_min(20.0).with_max(60.0).with_step(5.0);
    let mut slider2 = SingleSlider::new(config2, watch("value 2", &value2))?;

    // 3. min: 100, max: 600, step: 50, with marks
    let config3 = SliderConfig::new()
        .with_min(100.0)
        .with_max(600.0)
        .with_step(50.0)
        .with_marks(true);
    let mut slider3 = SingleSlider::new(config3, watch("value 3", &value3))?;
    log::info!("slider 3 mark offsets: {:?}", slider3.config().mark_offsets());

    // 4. min: 0, max: 100, step: 1, with default value 67
    let mut slider4 =
        SingleSlider::with_default(SliderConfig::new(), 67.0, watch("value 4", &value4))?;

    // 5. min: 0, max: 100, step: 1, orientation vertical
    let config5 = SliderConfig::new().with_orientation(Orientation::Vertical);
    let mut slider5 = SingleSlider::new(config5, watch("value 5", &value5))?;

    // Range 1. min: 0, max: 100, step: 1
    let mut range_slider1 = RangeSlider::new(SliderConfig::new(), watch_range("range 1", &range1))?;

    // Range 2. min: 20, max: 60, step: 2
    let config_r2 = SliderConfig::new().with_min(20.0).with_max(60.0).with_step(2.0);
    let mut range_slider2 = RangeSlider::new(config_r2, watch_range("range 2", &range2))?;

    // Range 3. min: 50, max: 450, step: 25, defaults 150 / 350
    let config_r3 = SliderConfig::new().with_min(50.0).with_max(450.0).with_step(25.0);
    let mut range_slider3 =
        RangeSlider::with_defaults(config_r3, 150.0, 350.0, watch_range("range 3", &range3))?;

    // Range 4. min: 0, max: 100, step: 1, vertical, defaults 23 / 78
    let config_r4 = SliderConfig::new().with_orientation(Orientation::Vertical);
    let mut range_slider4 =
        RangeSlider::with_defaults(config_r4, 23.0, 78.0, watch_range("range 4", &range4))?;

    // Scripted gestures standing in for a user.
    drive(&mut slider1, &[220.0, 340.0, 383.0]);
    drive(&mut slider2, &[50.0, 250.0]);
    drive(&mut slider3, &[460.0, 700.0]);
    drive(&mut slider4, &[260.0]);
    drive(&mut slider5, &[200.0]);
    drive_range(&mut range_slider1, Handle::Min, &[380.0]);
    drive_range(&mut range_slider1, Handle::Max, &[360.0]);
    drive_range(&mut range_slider2, Handle::Max, &[300.0, 480.0]);
    drive_range(&mut range_slider3, Handle::Min, &[90.0]);
    drive_range(&mut range_slider4, Handle::Max, &[150.0]);

    // The submit summary of the original demo page.
    println!("value 1: {}", value1.borrow());
    println!("value 2: {}", value2.borrow());
    println!("value 3: {}", value3.borrow());
    println!("value 4: {}", value4.borrow());
    println!("value 5: {}", value5.borrow());
    for (label, range) in [
        ("range 1", &range1),
        ("range 2", &range2),
        ("range 3", &range3),
        ("range 4", &range4),
    ] {
        let (lo, hi) = *range.borrow();
        println!("{label}: {lo} - {hi}");
    }

    Ok(())
}
