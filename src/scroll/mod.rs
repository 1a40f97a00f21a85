//! Scroll-driven animation: a smooth-scroll emulator advanced by a frame
//! ticker, feeding a registry of scroll-position triggers.

#[cfg(target_arch = "wasm32")]
mod browser;
mod input;
mod options;
mod smooth;
mod ticker;
mod timeline;
mod trigger;

use std::cell::RefCell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
pub use browser::{
    current_scroll,
    page_limit,
    prefers_reduced_motion,
    viewport_height,
    BrowserTimeline,
};
pub use input::{
    sync_native_scroll,
    touch_delta,
    wheel_delta,
    DELTA_LINE,
    DELTA_PAGE,
    DELTA_PIXEL,
    LINE_HEIGHT_PX,
};
pub use options::{
    expo_out,
    frame_time_ms,
    scroll_options,
    Easing,
    Orientation,
    ScrollOptions,
    SMOOTH_DURATION_SECS,
};
pub use smooth::{ ListenerId, ScrollEvent, SmoothScroll };
pub use ticker::{ FrameTicker, LagSmoothing, TickerHandle };
pub use timeline::ScrollTimeline;
pub use trigger::{ TriggerId, TriggerRegistry, TriggerSpec, TriggerState };

thread_local! {
    static TICKER: Rc<RefCell<FrameTicker>> = Rc::new(RefCell::new(FrameTicker::new()));
    static TRIGGERS: Rc<RefCell<TriggerRegistry>> = Rc::new(RefCell::new(TriggerRegistry::new()));
}

/// Page-wide frame ticker.
pub fn global_ticker() -> Rc<RefCell<FrameTicker>> {
    TICKER.with(|t| t.clone())
}

/// Page-wide trigger registry.
pub fn global_triggers() -> Rc<RefCell<TriggerRegistry>> {
    TRIGGERS.with(|t| t.clone())
}

#[cfg(target_arch = "wasm32")]
pub type PageTimeline = BrowserTimeline;

#[cfg(not(target_arch = "wasm32"))]
pub type PageTimeline = ScrollTimeline;

/// Mounts the timeline for the current page. Native builds have no frame
/// source, so the timeline is registered but never ticked.
pub fn mount_page_timeline() -> Option<PageTimeline> {
    #[cfg(target_arch = "wasm32")]
    {
        match BrowserTimeline::mount() {
            Ok(timeline) => Some(timeline),
            Err(e) => {
                log::warn!("Scroll timeline unavailable: {:?}", e);
                None
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("No frame source on this target, scroll timeline stays idle");
        Some(ScrollTimeline::mount(false, global_ticker(), global_triggers()))
    }
}
