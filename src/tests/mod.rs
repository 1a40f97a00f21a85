// Cross-module tests; unit tests live beside their modules.
pub mod common;
mod metadata;
mod scroll_timeline;
mod theme_persistence;
