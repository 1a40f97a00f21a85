pub mod components;
pub mod configs;
pub mod error;
pub mod hooks;
pub mod scroll;
pub mod theme;
pub mod utils;
pub mod views;
mod routes;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::error::StorageError;
pub use crate::hooks::{ use_theme_provider, ThemeContext };
