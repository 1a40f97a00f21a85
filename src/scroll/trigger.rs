#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(u64);

/// Scroll range a trigger watches, in emulated scroll pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerSpec {
    pub start: f64,
    pub end: f64,
    /// Kill the trigger once it becomes active or is scrolled past.
    pub once: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerState {
    pub progress: f64,
    pub active: bool,
}

impl TriggerSpec {
    pub fn state_at(&self, scroll: f64) -> TriggerState {
        let span = self.end - self.start;
        let progress = if span <= 0.0 {
            if scroll >= self.start { 1.0 } else { 0.0 }
        } else {
            ((scroll - self.start) / span).clamp(0.0, 1.0)
        };
        TriggerState {
            progress,
            active: scroll >= self.start && scroll <= self.end,
        }
    }
}

type TriggerCallback = Box<dyn FnMut(TriggerState)>;

struct Trigger {
    id: TriggerId,
    spec: TriggerSpec,
    state: Option<TriggerState>,
    callback: TriggerCallback,
}

/// Scroll-position triggers shared by everything on the page.
#[derive(Default)]
pub struct TriggerRegistry {
    triggers: Vec<Trigger>,
    next_id: u64,
    last_scroll: f64,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(
        &mut self,
        spec: TriggerSpec,
        callback: impl FnMut(TriggerState) + 'static
    ) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.triggers.push(Trigger {
            id,
            spec,
            state: None,
            callback: Box::new(callback),
        });
        id
    }

    /// Recomputes every trigger at `scroll`, calling back those whose state changed.
    pub fn update(&mut self, scroll: f64) {
        self.last_scroll = scroll;
        let mut finished = Vec::new();

        for trigger in self.triggers.iter_mut() {
            let state = trigger.spec.state_at(scroll);
            if trigger.state == Some(state) {
                continue;
            }
            trigger.state = Some(state);
            (trigger.callback)(state);
            if trigger.spec.once && (state.active || state.progress >= 1.0) {
                finished.push(trigger.id);
            }
        }

        for id in finished {
            self.kill(id);
        }
    }

    /// Re-evaluates against the last known position, e.g. after layout changes.
    pub fn refresh(&mut self) {
        for trigger in self.triggers.iter_mut() {
            trigger.state = None;
        }
        self.update(self.last_scroll);
    }

    pub fn kill(&mut self, id: TriggerId) -> bool {
        let before = self.triggers.len();
        self.triggers.retain(|t| t.id != id);
        before != self.triggers.len()
    }

    pub fn kill_all(&mut self) {
        if !self.triggers.is_empty() {
            log::debug!("Killing {} scroll triggers", self.triggers.len());
        }
        self.triggers.clear();
        self.last_scroll = 0.0;
    }

    pub fn get(&self, id: TriggerId) -> Option<TriggerState> {
        self.triggers
            .iter()
            .find(|t| t.id == id)
            .and_then(|t| t.state)
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn spec(start: f64, end: f64) -> TriggerSpec {
        TriggerSpec { start, end, once: false }
    }

    #[test]
    fn progress_clamps_to_range() {
        let s = spec(100.0, 300.0);
        assert_eq!(s.state_at(0.0), TriggerState { progress: 0.0, active: false });
        assert_eq!(s.state_at(200.0), TriggerState { progress: 0.5, active: true });
        assert_eq!(s.state_at(900.0), TriggerState { progress: 1.0, active: false });
    }

    #[test]
    fn callbacks_fire_on_change_only() {
        let mut registry = TriggerRegistry::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let id = registry.create(spec(100.0, 300.0), move |s| sink.borrow_mut().push(s.active));

        registry.update(0.0);
        registry.update(0.0);
        registry.update(150.0);
        registry.update(500.0);
        assert_eq!(*calls.borrow(), vec![false, true, false]);
        assert_eq!(registry.get(id).map(|s| s.progress), Some(1.0));
    }

    #[test]
    fn once_triggers_retire_after_activation() {
        let mut registry = TriggerRegistry::new();
        registry.create(TriggerSpec { start: 50.0, end: 60.0, once: true }, |_| {});
        registry.update(0.0);
        assert_eq!(registry.len(), 1);
        registry.update(55.0);
        assert!(registry.is_empty());
    }

    #[test]
    fn once_triggers_retire_when_jumped_past() {
        let mut registry = TriggerRegistry::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        registry.create(TriggerSpec { start: 50.0, end: 60.0, once: true }, move |s| {
            sink.borrow_mut().push(s);
        });
        registry.update(500.0);
        assert!(registry.is_empty());
        assert_eq!(*seen.borrow(), vec![TriggerState { progress: 1.0, active: false }]);
    }

    #[test]
    fn kill_all_forgets_last_position() {
        let mut registry = TriggerRegistry::new();
        registry.update(800.0);
        registry.kill_all();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        registry.create(spec(100.0, 200.0), move |s| sink.borrow_mut().push(s.progress));
        registry.refresh();
        assert_eq!(*seen.borrow(), vec![0.0]);
    }

    #[test]
    fn refresh_replays_last_position() {
        let mut registry = TriggerRegistry::new();
        let calls = Rc::new(RefCell::new(0));
        let sink = calls.clone();
        registry.create(spec(0.0, 100.0), move |_| *sink.borrow_mut() += 1);
        registry.update(10.0);
        registry.refresh();
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn kill_all_empties_registry() {
        let mut registry = TriggerRegistry::new();
        let a = registry.create(spec(0.0, 1.0), |_| {});
        registry.create(spec(0.0, 1.0), |_| {});
        assert!(registry.kill(a));
        assert!(!registry.kill(a));
        registry.kill_all();
        assert_eq!(registry.len(), 0);
    }
}
