use super::{Ansi256Theme, DraculaTheme, NordTheme, Theme};

/// Describes a selectable theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeDefinition {
    /// Canonical identifier used for persistence.
    pub id: &'static str,
    /// Human-friendly display name.
    pub label: &'static str,
    /// Names (e.g., env overrides) that map back to this definition.
    pub aliases: &'static [&'static str],
    factory: fn() -> Box<dyn Theme>,
}

impl ThemeDefinition {
    /// Instantiate the theme represented by this definition.
    pub fn build(&self) -> Box<dyn Theme> {
        (self.factory)()
    }
}

/// Ordered list of selectable themes; `t` in the demo cycles through it.
pub const THEME_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        aliases: &["dracula", "default"],
        factory: || Box::new(DraculaTheme::new()),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        aliases: &["nord"],
        factory: || Box::new(NordTheme::new()),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        aliases: &["ansi256", "ansi", "256"],
        factory: || Box::new(Ansi256Theme::new()),
    },
];

/// Locate a definition by id or alias (case-insensitive).
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let name = name.trim();
    THEME_DEFINITIONS.iter().find(|definition| {
        definition.id.eq_ignore_ascii_case(name) || definition.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Preferred default for truecolor terminals.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[0]
}

/// Preferred default for ANSI-only terminals.
pub fn default_ansi() -> &'static ThemeDefinition {
    &THEME_DEFINITIONS[2]
}

/// Definition after `id` in catalog order, wrapping to the first.
pub fn next_after(id: &str) -> &'static ThemeDefinition {
    let position = THEME_DEFINITIONS
        .iter()
        .position(|definition| definition.id.eq_ignore_ascii_case(id))
        .map_or(0, |index| (index + 1) % THEME_DEFINITIONS.len());
    &THEME_DEFINITIONS[position]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_aliases_case_insensitively() {
        assert_eq!(resolve("NORD").map(|definition| definition.id), Some("nord"));
        assert_eq!(resolve(" 256 ").map(|definition| definition.id), Some("ansi256"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn next_after_wraps() {
        assert_eq!(next_after("dracula").id, "nord");
        assert_eq!(next_after("ansi256").id, "dracula");
        assert_eq!(next_after("unknown").id, "dracula");
    }
}
