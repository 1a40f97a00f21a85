//! The two-valued Pokémon skin theme and its persisted preference.

mod storage;
mod store;

use std::fmt::{ Display, Formatter };
use std::str::FromStr;
use serde::{ Deserialize, Serialize };

pub use storage::{ default_storage, FileStorage, KeyValueStorage, MemoryStorage };
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use store::ThemeStore;

/// Key under which the theme preference is persisted.
pub const THEME_STORAGE_KEY: &str = "pokemon-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Fire,
    Leaf,
}

/// Display data for one theme entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeMeta {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

const FIRE_META: ThemeMeta = ThemeMeta {
    icon: "🔥",
    label: "Hệ Lửa",
    color: "#f97316",
};

const LEAF_META: ThemeMeta = ThemeMeta {
    icon: "🍃",
    label: "Hệ Lá",
    color: "#22c55e",
};

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Fire, Theme::Leaf];

    pub fn toggled(self) -> Self {
        match self {
            Theme::Fire => Theme::Leaf,
            Theme::Leaf => Theme::Fire,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Fire => "fire",
            Theme::Leaf => "leaf",
        }
    }

    pub fn meta(self) -> ThemeMeta {
        match self {
            Theme::Fire => FIRE_META,
            Theme::Leaf => LEAF_META,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fire" => Ok(Theme::Fire),
            "leaf" => Ok(Theme::Leaf),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// What the toggle button shows: the active theme and the one a click switches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleView {
    pub current: Theme,
    pub current_meta: ThemeMeta,
    pub next: Theme,
    pub next_meta: ThemeMeta,
}

/// Returns `None` until the theme has been resolved, so nothing is drawn
/// with a guessed theme on first paint.
pub fn toggle_view(resolved: Option<Theme>) -> Option<ToggleView> {
    let current = resolved?;
    let next = current.toggled();
    Some(ToggleView {
        current,
        current_meta: current.meta(),
        next,
        next_meta: next.meta(),
    })
}

/// Sets `data-theme` on the document root so the stylesheet can switch palettes.
pub fn apply_theme_attribute(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("Failed to apply theme attribute: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("Theme attribute now {}", theme);
    }
}
