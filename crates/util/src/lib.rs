//! Shared helpers for the Starling binaries: rating config files, user
//! preferences and path handling.

pub mod config;
mod path_processing;
pub mod preferences;

pub use config::{CONFIG_PATH_ENV, ConfigError, RatingConfig, load_config, resolve_config_path};
pub use path_processing::{expand_tilde, path_from_env};
pub use preferences::{PreferencesError, UserPreferences};
