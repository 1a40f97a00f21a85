//! Input decisions made by the browser driver, kept free of DOM types.

use super::smooth::SmoothScroll;

/// `WheelEvent.deltaMode` values.
pub const DELTA_PIXEL: u32 = 0;
pub const DELTA_LINE: u32 = 1;
pub const DELTA_PAGE: u32 = 2;

/// Pixels per line for line-mode wheels.
pub const LINE_HEIGHT_PX: f64 = 16.0;

/// Wheel delta in pixels, or `None` when the event must stay with the
/// browser. Ctrl/meta + wheel is zoom (and trackpad pinch), never scrolled.
pub fn wheel_delta(delta: f64, mode: u32, viewport: f64, zoom_modifier: bool) -> Option<f64> {
    if zoom_modifier {
        return None;
    }
    let scale = match mode {
        DELTA_LINE => LINE_HEIGHT_PX,
        DELTA_PAGE => viewport,
        _ => 1.0,
    };
    Some(delta * scale)
}

/// Scroll delta for a finger moving from `last_y` to `y`. Dragging up
/// scrolls the page down.
pub fn touch_delta(last_y: f64, y: f64) -> f64 {
    last_y - y
}

/// Picks up a scroll the emulator did not drive. The limit is refreshed
/// first so a page that grew since the last measurement is not pulled back.
pub fn sync_native_scroll(scroll: &mut SmoothScroll, limit: f64, position: f64) {
    scroll.set_limit(limit);
    scroll.on_native_scroll(position);
}
