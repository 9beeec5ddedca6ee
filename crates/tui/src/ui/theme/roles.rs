use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used by the rating host.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub border: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,

    /// Fallback fill for active stars when the configured color does not parse.
    pub star_active: Color,
    /// Fallback fill for inactive stars when the configured color does not parse.
    pub star_inactive: Color,

    pub selection_bg: Color,
    pub focus: Color,

    pub tooltip_bg: Color,
    pub tooltip_fg: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    /// Highlight behind the item that holds keyboard focus.
    fn focused_item_style(&self) -> Style {
        Style::default()
            .bg(self.roles().selection_bg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    fn tooltip_style(&self) -> Style {
        Style::default().fg(self.roles().tooltip_fg).bg(self.roles().tooltip_bg)
    }

    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent_primary).add_modifier(Modifier::BOLD)
    }
}
