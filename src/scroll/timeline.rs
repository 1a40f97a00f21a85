use std::cell::RefCell;
use std::rc::Rc;

use super::options::{ frame_time_ms, scroll_options };
use super::smooth::SmoothScroll;
use super::ticker::{ FrameTicker, TickerHandle };
use super::trigger::TriggerRegistry;

/// Binds a [`SmoothScroll`] to the frame ticker and the trigger registry for
/// as long as a page view is mounted.
pub struct ScrollTimeline {
    emulator: Rc<RefCell<SmoothScroll>>,
    ticker: Rc<RefCell<FrameTicker>>,
    triggers: Rc<RefCell<TriggerRegistry>>,
    handle: Option<TickerHandle>,
}

impl ScrollTimeline {
    pub fn mount(
        reduced_motion: bool,
        ticker: Rc<RefCell<FrameTicker>>,
        triggers: Rc<RefCell<TriggerRegistry>>
    ) -> Self {
        let emulator = Rc::new(RefCell::new(SmoothScroll::new(scroll_options(reduced_motion))));

        let registry = triggers.clone();
        emulator.borrow_mut().on_scroll(move |event| {
            registry.borrow_mut().update(event.scroll);
        });

        let driven = emulator.clone();
        let handle = {
            let mut ticker = ticker.borrow_mut();
            ticker.lag_smoothing(None);
            ticker.add(move |time| {
                driven.borrow_mut().raf(frame_time_ms(time));
            })
        };

        log::info!("Scroll timeline mounted (reduced motion: {})", reduced_motion);
        Self {
            emulator,
            ticker,
            triggers,
            handle: Some(handle),
        }
    }

    pub fn emulator(&self) -> Rc<RefCell<SmoothScroll>> {
        self.emulator.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        self.emulator.borrow_mut().destroy();
        self.triggers.borrow_mut().kill_all();
        self.ticker.borrow_mut().remove(handle);
        log::info!("Scroll timeline unmounted");
    }
}

impl Drop for ScrollTimeline {
    fn drop(&mut self) {
        self.teardown();
    }
}
