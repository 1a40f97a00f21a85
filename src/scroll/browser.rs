//! Browser frame source and input wiring for the scroll timeline.

use std::cell::{ Cell, RefCell };
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ AddEventListenerOptions, Event, TouchEvent, WheelEvent, Window };

use super::input::{ sync_native_scroll, touch_delta, wheel_delta };
use super::options::Orientation;
use super::ticker::FrameTicker;
use super::timeline::ScrollTimeline;
use super::{ global_ticker, global_triggers };

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches())
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Furthest the document can scroll vertically.
pub fn page_limit(window: &Window) -> f64 {
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map_or(0, |el| el.scroll_height()) as f64;
    (scroll_height - viewport_height(window)).max(0.0)
}

pub fn current_scroll(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

struct FrameLoop {
    id: Cell<Option<i32>>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    fn start(window: &Window, ticker: Rc<RefCell<FrameTicker>>) -> Rc<Self> {
        let frame = Rc::new(FrameLoop {
            id: Cell::new(None),
            closure: RefCell::new(None),
        });

        let weak = Rc::downgrade(&frame);
        let win = window.clone();
        let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(frame) = weak.upgrade() else {
                return;
            };
            ticker.borrow_mut().tick(timestamp);
            frame.request(&win);
        });
        *frame.closure.borrow_mut() = Some(closure);
        frame.request(window);
        frame
    }

    fn request(&self, window: &Window) {
        let closure = self.closure.borrow();
        let Some(closure) = closure.as_ref() else {
            return;
        };
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => self.id.set(Some(id)),
            Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&self, window: &Window) {
        if let Some(id) = self.id.take() {
            if let Err(e) = window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        self.closure.borrow_mut().take();
    }
}

struct Listener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

/// A [`ScrollTimeline`] attached to the real window.
pub struct BrowserTimeline {
    timeline: ScrollTimeline,
    window: Window,
    listeners: Vec<Listener>,
    frame: Rc<FrameLoop>,
}

impl BrowserTimeline {
    pub fn mount() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let reduced_motion = prefers_reduced_motion(&window);
        let timeline = ScrollTimeline::mount(reduced_motion, global_ticker(), global_triggers());

        let emulator = timeline.emulator();
        {
            let mut scroll = emulator.borrow_mut();
            scroll.set_limit(page_limit(&window));
            let win = window.clone();
            let orientation = scroll.options().orientation;
            scroll.on_scroll(move |event| {
                match orientation {
                    Orientation::Vertical => win.scroll_to_with_x_and_y(0.0, event.scroll),
                    Orientation::Horizontal => win.scroll_to_with_x_and_y(event.scroll, 0.0),
                }
            });
            scroll.on_native_scroll(current_scroll(&window));
        }

        let mut mounted = Self {
            timeline,
            frame: FrameLoop::start(&window, global_ticker()),
            window,
            listeners: Vec::new(),
        };
        if let Err(e) = mounted.install_listeners() {
            mounted.unmount();
            return Err(e);
        }
        Ok(mounted)
    }

    fn install_listeners(&mut self) -> Result<(), JsValue> {
        let emulator = self.timeline.emulator();

        let wheel_emulator = emulator.clone();
        let win = self.window.clone();
        self.listen("wheel", move |event: Event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            let mut scroll = wheel_emulator.borrow_mut();
            let raw = match scroll.options().orientation {
                Orientation::Vertical => wheel.delta_y(),
                Orientation::Horizontal => wheel.delta_x(),
            };
            let Some(delta) = wheel_delta(
                raw,
                wheel.delta_mode(),
                viewport_height(&win),
                wheel.ctrl_key() || wheel.meta_key()
            ) else {
                return;
            };
            scroll.set_limit(page_limit(&win));
            if scroll.on_wheel(delta) {
                event.prevent_default();
            }
        })?;

        let last_touch = Rc::new(Cell::new(None::<f64>));
        let start_touch = last_touch.clone();
        self.listen("touchstart", move |event: Event| {
            let y = event
                .dyn_ref::<TouchEvent>()
                .and_then(|t| t.touches().get(0))
                .map(|t| t.client_y() as f64);
            start_touch.set(y);
        })?;

        let move_touch = last_touch.clone();
        let touch_emulator = emulator.clone();
        let win = self.window.clone();
        self.listen("touchmove", move |event: Event| {
            let Some(y) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|t| t.touches().get(0))
                .map(|t| t.client_y() as f64) else {
                return;
            };
            let Some(last) = move_touch.replace(Some(y)) else {
                return;
            };
            let mut scroll = touch_emulator.borrow_mut();
            scroll.set_limit(page_limit(&win));
            if scroll.on_touch(touch_delta(last, y)) {
                event.prevent_default();
            }
        })?;

        let end_touch = last_touch;
        self.listen("touchend", move |_| end_touch.set(None))?;

        let native_emulator = emulator;
        let win = self.window.clone();
        self.listen("scroll", move |_| {
            sync_native_scroll(
                &mut native_emulator.borrow_mut(),
                page_limit(&win),
                current_scroll(&win)
            );
        })?;

        let resize_emulator = self.timeline.emulator();
        let win = self.window.clone();
        self.listen("resize", move |_| {
            sync_native_scroll(
                &mut resize_emulator.borrow_mut(),
                page_limit(&win),
                current_scroll(&win)
            );
        })?;

        Ok(())
    }

    fn listen(
        &mut self,
        event: &'static str,
        handler: impl FnMut(Event) + 'static
    ) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        self.window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            &options
        )?;
        self.listeners.push(Listener { event, closure });
        Ok(())
    }

    pub fn unmount(self) {
        let BrowserTimeline { timeline, window, listeners, frame } = self;
        for listener in listeners {
            if
                let Err(e) = window.remove_event_listener_with_callback(
                    listener.event,
                    listener.closure.as_ref().unchecked_ref::<js_sys::Function>()
                )
            {
                log::warn!("Failed to remove {} listener: {:?}", listener.event, e);
            }
        }
        frame.cancel(&window);
        timeline.unmount();
    }
}
