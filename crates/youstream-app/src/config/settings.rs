//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use youstream_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "youstream";

/// Environment variable overriding `api.base_url`
pub const API_URL_ENV_VAR: &str = "YOUSTREAM_API_URL";

const DEFAULT_CONFIG: &str = r#"# YouStream Configuration

[api]
# Backend the client talks to
base_url = "http://localhost:5001"
timeout_secs = 15
connect_timeout_secs = 5

[feed]
# Videos requested per popular/search call
page_size = 20

[timing]
username_debounce_ms = 500
loader_fade_ms = 600
registration_return_ms = 1200

[ui]
show_descriptions = true
"#;

/// `<config_dir>/youstream/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`.
///
/// A missing file yields defaults; a file that cannot be read or parsed is
/// logged and also yields defaults.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Apply environment overrides (`YOUSTREAM_API_URL`)
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
        let url = url.trim();
        if !url.is_empty() {
            debug!("{} overrides api.base_url", API_URL_ENV_VAR);
            settings.api.base_url = url.to_string();
        }
    }
}

/// Resolve the final settings: file, then environment, then `--api-url`
pub fn resolve_settings(config_path: Option<&Path>, api_url: Option<&str>) -> Settings {
    let mut settings = match config_path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
    {
        Some(path) => load_settings(&path),
        None => {
            warn!("No config directory available, using defaults");
            Settings::default()
        }
    };

    apply_env_overrides(&mut settings);

    if let Some(url) = api_url {
        settings.api.base_url = url.to_string();
    }

    info!("Using backend at {}", settings.api.base_url);
    settings
}

/// Write the default config file to `path` unless one already exists
pub fn init_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        debug!("Config file {:?} already exists, leaving it alone", path);
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", path, e)))?;
    info!("Created config file {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[api]
base_url = "http://10.0.0.2:5001"

[feed]
page_size = 5
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.api.base_url, "http://10.0.0.2:5001");
        assert_eq!(settings.feed.page_size, 5);
        assert_eq!(settings.timing.loader_fade_ms, 600);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).expect("default config should parse");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_file_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[feed]\npage_size = 3\n").unwrap();

        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("page_size = 3"));
    }

    #[test]
    #[serial]
    fn test_env_override_replaces_base_url() {
        std::env::set_var(API_URL_ENV_VAR, "http://env-host:9000");
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);
        std::env::remove_var(API_URL_ENV_VAR);

        assert_eq!(settings.api.base_url, "http://env-host:9000");
    }

    #[test]
    #[serial]
    fn test_cli_url_beats_env_and_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[api]\nbase_url = \"http://file-host\"\n").unwrap();
        std::env::set_var(API_URL_ENV_VAR, "http://env-host");

        let settings = resolve_settings(Some(&path), Some("http://cli-host"));
        std::env::remove_var(API_URL_ENV_VAR);

        assert_eq!(settings.api.base_url, "http://cli-host");
    }

    #[test]
    #[serial]
    fn test_blank_env_value_is_ignored() {
        std::env::set_var(API_URL_ENV_VAR, "   ");
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);
        std::env::remove_var(API_URL_ENV_VAR);

        assert_eq!(settings.api.base_url, "http://localhost:5001");
    }
}
