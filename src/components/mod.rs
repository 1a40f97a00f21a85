mod reveal;
mod theme_toggle;

pub use reveal::{ reveal_spec, Reveal, REVEAL_OFFSET };
pub use theme_toggle::ThemeToggle;
