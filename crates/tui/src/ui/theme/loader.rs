//! Theme selection and terminal capability detection.

use std::env;

use tracing::debug;

use super::{Theme, ThemeDefinition, catalog};

/// Environment override naming a theme; wins over config and preferences.
pub const THEME_ENV: &str = "TUI_THEME";

/// Loaded theme plus the definition that produced it.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl LoadedTheme {
    pub fn from_definition(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi256,
}

/// Selects a theme from the environment override, the caller's preference
/// and terminal capability, in that order.
pub fn load(preferred_theme: Option<&str>) -> LoadedTheme {
    let from_env = env::var(THEME_ENV).ok();
    let requested = from_env.as_deref().or(preferred_theme);
    if let Some(definition) = requested.and_then(catalog::resolve) {
        return LoadedTheme::from_definition(definition);
    }

    if matches!(detect_color_capability(), ColorCapability::Ansi256) {
        debug!("ANSI-only terminal detected; using fallback palette.");
        return LoadedTheme::from_definition(catalog::default_ansi());
    }
    LoadedTheme::from_definition(catalog::default_truecolor())
}

fn detect_color_capability() -> ColorCapability {
    if let Some(mode) = env::var("TUI_COLOR_MODE").ok().and_then(|value| parse_color_mode(value.trim())) {
        return mode;
    }

    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }

    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") || term.contains("direct") {
        return ColorCapability::Truecolor;
    }

    ColorCapability::Ansi256
}

fn parse_color_mode(value: &str) -> Option<ColorCapability> {
    match value.to_ascii_lowercase().as_str() {
        "truecolor" | "24bit" => Some(ColorCapability::Truecolor),
        "ansi256" | "256" | "8bit" => Some(ColorCapability::Ansi256),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preference_wins_over_capability() {
        temp_env::with_vars([(THEME_ENV, None::<&str>), ("TUI_COLOR_MODE", Some("ansi256"))], || {
            assert_eq!(load(Some("nord")).definition.id, "nord");
        });
    }

    #[test]
    fn env_override_wins_over_preference() {
        temp_env::with_var(THEME_ENV, Some("dracula"), || {
            assert_eq!(load(Some("nord")).definition.id, "dracula");
        });
    }

    #[test]
    fn capability_picks_default_palette() {
        temp_env::with_vars([(THEME_ENV, None::<&str>), ("TUI_COLOR_MODE", Some("256"))], || {
            assert_eq!(load(None).definition.id, "ansi256");
        });
        temp_env::with_vars([(THEME_ENV, None::<&str>), ("TUI_COLOR_MODE", Some("truecolor"))], || {
            assert_eq!(load(Some("unknown")).definition.id, "dracula");
        });
    }
}
