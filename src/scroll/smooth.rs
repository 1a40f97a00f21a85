//! Smooth-scroll emulator.
//!
//! Wheel and touch input move a target position; each animation frame eases
//! the emulated position toward it and reports the result to scroll
//! listeners, which write it back to the page and update scroll triggers.

use super::options::ScrollOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub scroll: f64,
    pub limit: f64,
    pub velocity: f64,
    /// `1` moving forward, `-1` backward, `0` at rest.
    pub direction: i8,
    pub progress: f64,
}

#[derive(Clone, Copy, Debug)]
struct Animation {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
}

type ScrollListener = Box<dyn FnMut(&ScrollEvent)>;

pub struct SmoothScroll {
    options: ScrollOptions,
    animated: f64,
    target: f64,
    limit: f64,
    velocity: f64,
    direction: i8,
    animation: Option<Animation>,
    last_time_ms: Option<f64>,
    listeners: Vec<(ListenerId, ScrollListener)>,
    next_listener: u64,
    destroyed: bool,
}

impl SmoothScroll {
    pub fn new(options: ScrollOptions) -> Self {
        log::debug!(
            "Smooth scroll created (duration {}s, smooth wheel {})",
            options.duration,
            options.smooth_wheel
        );
        Self {
            options,
            animated: 0.0,
            target: 0.0,
            limit: 0.0,
            velocity: 0.0,
            direction: 0,
            animation: None,
            last_time_ms: None,
            listeners: Vec::new(),
            next_listener: 0,
            destroyed: false,
        }
    }

    pub fn options(&self) -> &ScrollOptions {
        &self.options
    }

    /// Largest reachable position. Positions beyond it are pulled back.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.clamp(self.target);
        self.animated = self.clamp(self.animated);
    }

    pub fn on_scroll(&mut self, listener: impl FnMut(&ScrollEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn off_scroll(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(l, _)| *l != id);
        before != self.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` when the wheel delta was taken over, meaning the
    /// native scroll must be prevented.
    pub fn on_wheel(&mut self, delta: f64) -> bool {
        if self.destroyed || !self.options.smooth_wheel {
            return false;
        }
        let target = self.target + delta * self.options.wheel_multiplier;
        self.animate_to(target);
        true
    }

    /// Same contract as [`SmoothScroll::on_wheel`] for touch drag deltas.
    pub fn on_touch(&mut self, delta: f64) -> bool {
        if self.destroyed || !self.options.smooth_wheel {
            return false;
        }
        let target = self.target + delta * self.options.touch_multiplier;
        self.animate_to(target);
        true
    }

    /// Follows a scroll the emulator did not drive (keyboard, scrollbar,
    /// native wheel when smoothing is off). Ignored while animating.
    pub fn on_native_scroll(&mut self, position: f64) {
        if self.destroyed || self.animation.is_some() {
            return;
        }
        let position = self.clamp(position);
        if position == self.animated {
            return;
        }
        self.set_position(position);
        self.target = position;
        self.emit();
    }

    pub fn scroll_to(&mut self, target: f64, immediate: bool) {
        if self.destroyed {
            return;
        }
        if immediate {
            self.animation = None;
            self.target = self.clamp(target);
            self.set_position(self.target);
            self.emit();
        } else {
            self.animate_to(target);
        }
    }

    /// Advances the running animation to `time_ms`, a monotonic frame clock.
    pub fn raf(&mut self, time_ms: f64) {
        if self.destroyed {
            return;
        }
        let delta_ms = self.last_time_ms.map_or(0.0, |last| (time_ms - last).max(0.0));
        self.last_time_ms = Some(time_ms);
        self.advance(delta_ms / 1000.0);
    }

    /// Stops the animation and drops every listener. Input is ignored afterwards.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.animation = None;
        self.listeners.clear();
        log::debug!("Smooth scroll destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_scrolling(&self) -> bool {
        self.animation.is_some()
    }

    pub fn scroll(&self) -> f64 {
        self.animated
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn progress(&self) -> f64 {
        if self.limit <= 0.0 {
            0.0
        } else {
            self.animated / self.limit
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(0.0, self.limit)
    }

    fn animate_to(&mut self, target: f64) {
        self.target = self.clamp(target);
        self.animation = Some(Animation {
            from: self.animated,
            to: self.target,
            elapsed: 0.0,
            duration: self.options.duration,
        });
    }

    fn advance(&mut self, delta_secs: f64) {
        let Some(mut anim) = self.animation else {
            return;
        };
        anim.elapsed += delta_secs;

        let done = anim.duration <= 0.0 || anim.elapsed >= anim.duration;
        let value = if done {
            anim.to
        } else {
            let eased = (self.options.easing)(anim.elapsed / anim.duration);
            anim.from + (anim.to - anim.from) * eased
        };

        self.animation = if done { None } else { Some(anim) };
        self.set_position(value);
        self.emit();
    }

    fn set_position(&mut self, value: f64) {
        self.velocity = value - self.animated;
        self.direction = if self.velocity > 0.0 {
            1
        } else if self.velocity < 0.0 {
            -1
        } else {
            0
        };
        self.animated = value;
    }

    fn emit(&mut self) {
        let event = ScrollEvent {
            scroll: self.animated,
            limit: self.limit,
            velocity: self.velocity,
            direction: self.direction,
            progress: self.progress(),
        };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
