//! Configuration file parsing for YouStream
//!
//! Settings come from `<config_dir>/youstream/config.toml` (or `--config`),
//! then `YOUSTREAM_API_URL`, then `--api-url`.

pub mod settings;
pub mod types;

pub use settings::{
    apply_env_overrides, default_config_path, init_config_file, load_settings, resolve_settings,
    API_URL_ENV_VAR,
};
pub use types::*;
