use std::path::PathBuf;

pub const THEME_FILE_ENV: &str = "GRAD_INVITE_THEME_FILE";
const DEFAULT_THEME_FILE: &str = ".grad-invite-theme.json";

/// Where native builds keep the theme preference.
pub fn theme_file_path() -> PathBuf {
    match std::env::var(THEME_FILE_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            log::info!("Using theme preference file: {}", path);
            PathBuf::from(path)
        }
        _ => {
            log::warn!("{} not set, using {}", THEME_FILE_ENV, DEFAULT_THEME_FILE);
            PathBuf::from(DEFAULT_THEME_FILE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_file_path_from_env() {
        std::env::set_var(THEME_FILE_ENV, "/tmp/theme-test.json");
        assert_eq!(theme_file_path(), PathBuf::from("/tmp/theme-test.json"));
        std::env::remove_var(THEME_FILE_ENV);
        assert_eq!(theme_file_path(), PathBuf::from(DEFAULT_THEME_FILE));
    }
}
