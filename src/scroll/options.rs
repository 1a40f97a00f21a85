/// Scroll axis driven by the emulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

pub type Easing = fn(f64) -> f64;

/// Exponential ease-out, nudged so it reaches exactly 1.
pub fn expo_out(t: f64) -> f64 {
    (1.001 - (2.0f64).powf(-10.0 * t)).min(1.0)
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollOptions {
    /// Seconds an eased scroll takes to reach its target.
    pub duration: f64,
    pub easing: Easing,
    pub orientation: Orientation,
    pub smooth_wheel: bool,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        scroll_options(false)
    }
}

pub const SMOOTH_DURATION_SECS: f64 = 1.2;

pub fn scroll_options(reduced_motion: bool) -> ScrollOptions {
    ScrollOptions {
        duration: if reduced_motion { 0.0 } else { SMOOTH_DURATION_SECS },
        easing: expo_out,
        orientation: Orientation::Vertical,
        smooth_wheel: !reduced_motion,
        wheel_multiplier: 1.0,
        touch_multiplier: 2.0,
    }
}

/// Ticker time is in seconds; the emulator counts milliseconds.
pub fn frame_time_ms(seconds: f64) -> f64 {
    seconds * 1000.0
}
