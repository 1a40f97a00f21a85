/// Identifies a callback registered on a [`FrameTicker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickerHandle(u64);

/// Caps how far time may jump after a stalled frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LagSmoothing {
    pub threshold_ms: f64,
    pub adjusted_lag_ms: f64,
}

impl Default for LagSmoothing {
    fn default() -> Self {
        Self {
            threshold_ms: 500.0,
            adjusted_lag_ms: 33.0,
        }
    }
}

type TickCallback = Box<dyn FnMut(f64)>;

/// Per-frame scheduler. The frame source calls [`FrameTicker::tick`] with a
/// millisecond timestamp; callbacks receive seconds elapsed since the first tick.
pub struct FrameTicker {
    callbacks: Vec<(TickerHandle, TickCallback)>,
    next_id: u64,
    start_ms: Option<f64>,
    last_ms: Option<f64>,
    time: f64,
    frame: u64,
    lag: Option<LagSmoothing>,
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTicker {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
            next_id: 0,
            start_ms: None,
            last_ms: None,
            time: 0.0,
            frame: 0,
            lag: Some(LagSmoothing::default()),
        }
    }

    pub fn add(&mut self, callback: impl FnMut(f64) + 'static) -> TickerHandle {
        let handle = TickerHandle(self.next_id);
        self.next_id += 1;
        self.callbacks.push((handle, Box::new(callback)));
        handle
    }

    pub fn remove(&mut self, handle: TickerHandle) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(h, _)| *h != handle);
        before != self.callbacks.len()
    }

    /// `None` lets time follow the frame source exactly.
    pub fn lag_smoothing(&mut self, lag: Option<LagSmoothing>) {
        self.lag = lag;
    }

    pub fn lag(&self) -> Option<LagSmoothing> {
        self.lag
    }

    pub fn tick(&mut self, now_ms: f64) {
        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed = self.last_ms.map_or(0.0, |last| now_ms - last);
        self.last_ms = Some(now_ms);

        let mut start = start;
        if let Some(lag) = self.lag {
            if elapsed > lag.threshold_ms {
                start += elapsed - lag.adjusted_lag_ms;
                self.start_ms = Some(start);
            }
        }

        self.time = ((now_ms - start) / 1000.0).max(0.0);
        self.frame += 1;

        let time = self.time;
        for (_, callback) in self.callbacks.iter_mut() {
            callback(time);
        }
    }

    /// Seconds reported to callbacks on the latest tick.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(ticker: &mut FrameTicker) -> (TickerHandle, Rc<RefCell<Vec<f64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let handle = ticker.add(move |t| sink.borrow_mut().push(t));
        (handle, seen)
    }

    #[test]
    fn reports_seconds_since_first_tick() {
        let mut ticker = FrameTicker::new();
        let (_, seen) = recorder(&mut ticker);
        ticker.tick(1000.0);
        ticker.tick(1016.0);
        ticker.tick(1250.0);
        assert_eq!(*seen.borrow(), vec![0.0, 0.016, 0.25]);
        assert_eq!(ticker.frame(), 3);
    }

    #[test]
    fn lag_smoothing_caps_stalls() {
        let mut ticker = FrameTicker::new();
        ticker.tick(0.0);
        ticker.tick(100.0);
        ticker.tick(2100.0);
        assert!((ticker.time() - 0.133).abs() < 1e-9);
    }

    #[test]
    fn disabled_lag_smoothing_follows_the_clock() {
        let mut ticker = FrameTicker::new();
        ticker.lag_smoothing(None);
        ticker.tick(0.0);
        ticker.tick(100.0);
        ticker.tick(2100.0);
        assert_eq!(ticker.time(), 2.1);
    }

    #[test]
    fn removed_callbacks_stop_firing() {
        let mut ticker = FrameTicker::new();
        let (first, first_seen) = recorder(&mut ticker);
        let (_, second_seen) = recorder(&mut ticker);
        ticker.tick(0.0);
        assert!(ticker.remove(first));
        assert!(!ticker.remove(first));
        ticker.tick(10.0);
        assert_eq!(first_seen.borrow().len(), 1);
        assert_eq!(second_seen.borrow().len(), 2);
        assert_eq!(ticker.len(), 1);
    }
}
