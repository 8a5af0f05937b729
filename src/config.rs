use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Dantika";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info,dantika=debug"
}

/// Get the application data directory
/// ~/Dantika/ on all platforms (user-visible)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Dantika")
}

/// Location of the persisted session mirror (the "remembered login").
pub fn session_file() -> PathBuf {
    app_data_dir().join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Dantika"));
    }

    #[test]
    fn session_file_under_app_data() {
        let file = session_file();
        assert!(file.starts_with(app_data_dir()));
        assert!(file.ends_with("session.json"));
    }

    #[test]
    fn app_name_is_dantika() {
        assert_eq!(APP_NAME, "Dantika");
    }
}
