mod use_scroll_timeline;
mod use_theme;

pub use use_scroll_timeline::use_scroll_timeline;
pub use use_theme::{ use_theme, use_theme_provider, ThemeContext };
