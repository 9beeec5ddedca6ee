//! ANSI 256-color fallback for terminals without truecolor support.
//!
//! Approximates the Dracula palette with indexed colors so the control stays
//! legible inside 8-bit terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Indexed(236),
                surface: Color::Indexed(236),
                border: Color::Indexed(239),

                text: Color::Indexed(255),
                text_secondary: Color::Indexed(250),
                text_muted: Color::Indexed(247),

                accent_primary: Color::Indexed(212),
                star_active: Color::Indexed(220),
                star_inactive: Color::Indexed(252),

                selection_bg: Color::Indexed(239),
                focus: Color::Indexed(117),

                tooltip_bg: Color::Indexed(232),
                tooltip_fg: Color::Indexed(255),
            },
        }
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
