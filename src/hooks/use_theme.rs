use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;

use crate::theme::{ apply_theme_attribute, default_storage, Theme, ThemeStore };

/// Theme state shared through the component tree.
#[derive(Clone)]
pub struct ThemeContext {
    store: Rc<RefCell<ThemeStore>>,
    theme: Signal<Option<Theme>>,
}

impl ThemeContext {
    /// `None` until the stored preference has been read on the client.
    pub fn theme(&self) -> Option<Theme> {
        *self.theme.read()
    }

    pub fn set(&self, theme: Theme) {
        self.store.borrow_mut().set(theme);
        let mut signal = self.theme;
        signal.set(Some(theme));
    }

    pub fn toggle(&self) -> Theme {
        let next = self.store.borrow_mut().toggle();
        let mut signal = self.theme;
        signal.set(Some(next));
        next
    }
}

/// Creates the theme store and provides it to descendants. The preference
/// is resolved after the first render and every change is mirrored onto the
/// document root.
pub fn use_theme_provider() -> ThemeContext {
    let store = use_hook(|| Rc::new(RefCell::new(ThemeStore::new(default_storage()))));
    let theme = use_signal(|| None::<Theme>);

    use_hook({
        let store = store.clone();
        move || {
            let mut changes = store.borrow_mut().subscribe();
            spawn(async move {
                while let Some(theme) = changes.next().await {
                    apply_theme_attribute(theme);
                }
            });
        }
    });

    let resolve_store = store.clone();
    let mut resolved = theme;
    use_effect(move || {
        let theme = resolve_store.borrow_mut().resolve();
        resolved.set(Some(theme));
    });

    use_context_provider(|| ThemeContext { store, theme })
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
