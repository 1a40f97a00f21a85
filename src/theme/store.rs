use futures::channel::mpsc::{ unbounded, UnboundedReceiver, UnboundedSender };

use super::{ KeyValueStorage, Theme, THEME_STORAGE_KEY };

/// Owns the theme preference: reads it from storage once, writes every
/// change back, and notifies subscribers.
pub struct ThemeStore {
    storage: Box<dyn KeyValueStorage>,
    current: Option<Theme>,
    subscribers: Vec<UnboundedSender<Theme>>,
}

impl ThemeStore {
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            current: None,
            subscribers: Vec::new(),
        }
    }

    /// Theme once resolved, `None` before the first `resolve`.
    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    pub fn is_resolved(&self) -> bool {
        self.current.is_some()
    }

    /// Reads the persisted preference on the first call and caches it.
    /// Missing, unreadable or unknown values resolve to the default theme.
    pub fn resolve(&mut self) -> Theme {
        if let Some(theme) = self.current {
            return theme;
        }

        let theme = match self.storage.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) =>
                raw.parse::<Theme>().unwrap_or_else(|e| {
                    log::warn!("Ignoring stored theme preference: {}", e);
                    Theme::default()
                }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        };

        log::info!("Resolved theme: {}", theme);
        self.current = Some(theme);
        self.notify(theme);
        theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = Some(theme);
        if let Err(e) = self.storage.set(THEME_STORAGE_KEY, theme.as_str()) {
            log::error!("Failed to persist theme preference: {}", e);
        }
        self.notify(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.resolve().toggled();
        self.set(next);
        next
    }

    /// Receives every theme the store settles on after subscribing.
    pub fn subscribe(&mut self) -> UnboundedReceiver<Theme> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, theme: Theme) {
        self.subscribers.retain(|tx| tx.unbounded_send(theme).is_ok());
    }
}
