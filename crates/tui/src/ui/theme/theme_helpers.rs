use std::str::FromStr;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Secondary button style (outline-like, rely on border color in Block).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, enabled: bool, focused: bool) -> Style {
    if !enabled {
        return theme.text_muted_style();
    }
    let style = Style::default().fg(theme.roles().accent_primary);
    if focused { style.bg(theme.roles().selection_bg) } else { style }
}

/// Renders a one-row bracketed button, e.g. `[ Clear ]`.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, enabled: bool, focused: bool) {
    let mut style = button_secondary_style(theme, enabled, focused);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    frame.render_widget(Paragraph::new(format!("[ {label} ]")).centered().style(style), area);
}

/// Builds `key description` pairs for the hint bar.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}

/// Parses a CSS-like color string (`#RRGGBB`, named colors, indexed).
pub fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value.trim()).ok()
}
