//! Rating configuration files.
//!
//! A config file is a YAML or JSON document whose keys are the snake_case
//! fields of [`RatingProps`] plus an optional `theme`. Missing keys fall back
//! to the documented defaults; the loaded props are validated before use.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use starling_rating::{PropsError, RatingProps};
use thiserror::Error;
use tracing::debug;

use crate::path_processing::{expand_tilde, path_from_env};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_PATH_ENV: &str = "STARLING_CONFIG";

/// Error surfaced when a config file cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid rating config: {0}")]
    Invalid(#[from] PropsError),
}

/// Contents of a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingConfig {
    #[serde(flatten)]
    pub props: RatingProps,
    /// Theme identifier, e.g. `dracula` or `nord`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

impl RatingConfig {
    /// Parses `contents` in the given format without touching the filesystem.
    fn parse(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let config: RatingConfig = match format {
            ConfigFormat::Json => serde_json::from_str(contents)?,
            ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        config.props.validate()?;
        Ok(config)
    }
}

/// Picks the config path: explicit argument first, then `$STARLING_CONFIG`.
pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    explicit
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(expand_tilde)
        .or_else(|| path_from_env(CONFIG_PATH_ENV))
}

/// Loads and validates the config file at `path`.
pub fn load_config(path: &Path) -> Result<RatingConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = ConfigFormat::for_path(path);
    debug!(path = %path.display(), ?format, "loading rating config");
    RatingConfig::parse(&contents, format)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use starling_rating::{Direction, TabBehavior};

    use super::*;

    #[test]
    fn yaml_config_overrides_selected_fields() {
        let yaml = r#"
count: 3
value: 2
direction: vertical
show_tooltip: true
tooltip_labels: [Bad, OK, Good]
tab_behavior: release
theme: nord
"#;
        let config = RatingConfig::parse(yaml, ConfigFormat::Yaml).expect("config parses");
        assert_eq!(config.props.count, 3);
        assert_eq!(config.props.value, 2);
        assert_eq!(config.props.direction, Direction::Vertical);
        assert_eq!(config.props.tab_behavior, TabBehavior::Release);
        assert_eq!(config.props.tooltip_labels, ["Bad", "OK", "Good"]);
        assert_eq!(config.props.size, 24);
        assert_eq!(config.theme.as_deref(), Some("nord"));
    }

    #[test]
    fn json_file_is_loaded_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().expect("temp file");
        write!(file, r##"{{ "count": 4, "active_color": "#ff0000" }}"##).expect("write config");
        let config = load_config(file.path()).expect("config loads");
        assert_eq!(config.props.count, 4);
        assert_eq!(config.props.active_color, "#ff0000");
        assert!(config.theme.is_none());
    }

    #[test]
    fn invalid_props_are_rejected() {
        let error = RatingConfig::parse("count: 2\nvalue: 5\n", ConfigFormat::Yaml).expect_err("value out of range");
        assert!(matches!(
            error,
            ConfigError::Invalid(PropsError::ValueOutOfRange { value: 5, count: 2 })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let error = load_config(Path::new("/definitely/not/here.yaml")).expect_err("missing file");
        assert!(error.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn env_var_is_used_without_explicit_path() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/tmp/starling.yaml"), || {
            assert_eq!(resolve_config_path(None), Some(PathBuf::from("/tmp/starling.yaml")));
            assert_eq!(resolve_config_path(Some("/etc/rating.json")), Some(PathBuf::from("/etc/rating.json")));
        });
        temp_env::with_var_unset(CONFIG_PATH_ENV, || {
            assert_eq!(resolve_config_path(None), None);
        });
    }
}
