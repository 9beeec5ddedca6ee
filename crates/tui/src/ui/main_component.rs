//! Top-level view of the demo: the rating control, a Clear button, the last
//! announced change and the hint bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use starling_rating::TabBehavior;

use super::components::{Component, RatingComponent};
use super::theme::theme_helpers as th;
use crate::app::{App, Effect, FocusTarget};

const CLEAR_LABEL: &str = "Clear";

#[derive(Debug, Default)]
pub struct MainView {
    pub rating_view: RatingComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self {
            rating_view: RatingComponent::new(),
        }
    }

    /// Puts focus back on the rating control when nothing holds it.
    pub fn restore_focus(&mut self, app: &mut App) {
        if app.focused_target().is_none() {
            app.focus_rating();
        }
    }

    /// True when Tab moves focus to another stop instead of cycling stars.
    fn tab_leaves_focused_stop(app: &App) -> bool {
        match app.focused_target() {
            Some(FocusTarget::Rating) => {
                let props = app.rating.props();
                props.tab_behavior == TabBehavior::Release || props.is_inert()
            }
            Some(FocusTarget::ClearButton) | None => true,
        }
    }

    fn handle_clear_button_key(key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => vec![Effect::ClearRating],
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => vec![Effect::FocusPrevious(FocusTarget::ClearButton)],
            KeyCode::Tab => vec![Effect::FocusNext(FocusTarget::ClearButton)],
            KeyCode::BackTab => vec![Effect::FocusPrevious(FocusTarget::ClearButton)],
            _ => Vec::new(),
        }
    }

    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let rating_height = RatingComponent::preferred_height(&app.rating);
        let rating_width = RatingComponent::preferred_width(&app.rating).min(area.width.saturating_sub(2));
        let [body, hints] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let [rating_row, button, message] = Layout::vertical([
            Constraint::Length(rating_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .areas(body);
        let [rating] = Layout::horizontal([Constraint::Length(rating_width)]).flex(Flex::Start).areas(rating_row);
        let button_width = u16::try_from(CLEAR_LABEL.len() + 4).unwrap_or(u16::MAX);
        let [button] = Layout::horizontal([Constraint::Length(button_width)]).flex(Flex::Start).areas(button);
        vec![rating, button, message, hints]
    }
}

impl Component for MainView {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return vec![Effect::Quit],
            KeyCode::Char('q') | KeyCode::Esc => return vec![Effect::Quit],
            KeyCode::Char('t') => return vec![Effect::CycleTheme],
            _ => {}
        }

        match app.focused_target() {
            Some(FocusTarget::Rating) => self.rating_view.handle_key_events(app, key),
            Some(FocusTarget::ClearButton) => Self::handle_clear_button_key(key),
            None => {
                if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
                    app.focus_rating();
                }
                Vec::new()
            }
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let position = Position::new(mouse.column, mouse.row);
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && app.clear_button.area.contains(position) {
            app.focus_clear_button();
            return vec![Effect::ClearRating];
        }
        self.rating_view.handle_mouse_events(app, mouse)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let background = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(background, area);

        let layout = self.get_preferred_layout(app, area);
        self.rating_view.render(frame, layout[0], app);

        let theme = &*app.ctx.theme;
        let clear_enabled = app.rating.props().value > 0;
        th::render_button(frame, layout[1], CLEAR_LABEL, theme, clear_enabled, app.clear_button.focus.get());
        app.clear_button.area = layout[1];

        if let Some(message) = app.last_change.as_deref() {
            frame.render_widget(Paragraph::new(message).style(theme.text_secondary_style()), layout[2]);
        }

        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints, layout[3]);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        let theme = &*app.ctx.theme;
        let mut spans = vec![Span::styled("Hints: ", theme.text_muted_style())];
        match app.focused_target() {
            Some(FocusTarget::Rating) => spans.extend(self.rating_view.get_hint_spans(app)),
            Some(FocusTarget::ClearButton) => spans.extend(th::build_hint_spans(theme, &[(" Enter", " Clear")])),
            None => {}
        }
        if Self::tab_leaves_focused_stop(app) {
            spans.extend(th::build_hint_spans(theme, &[(" Tab", " Focus")]));
        }
        spans.extend(th::build_hint_spans(theme, &[(" t", " Theme")]));
        spans.push(Span::styled(format!(" ({})", app.ctx.active_theme.label), theme.text_muted_style()));
        spans.extend(th::build_hint_spans(theme, &[(" q", " Quit")]));
        spans
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventKind;
    use starling_rating::RatingProps;
    use starling_util::UserPreferences;

    use super::*;
    use crate::app::AppCtx;
    use crate::ui::theme::{LoadedTheme, catalog};

    fn app(props: RatingProps) -> App {
        let ctx = AppCtx::new(LoadedTheme::from_definition(catalog::default_truecolor()), UserPreferences::ephemeral());
        App::new(props, ctx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn global_keys_win_over_focused_component() {
        let mut app = app(RatingProps::new(5));
        let mut view = MainView::new();
        assert_eq!(view.handle_key_events(&mut app, press(KeyCode::Char('q'))), vec![Effect::Quit]);
        assert_eq!(view.handle_key_events(&mut app, press(KeyCode::Char('t'))), vec![Effect::CycleTheme]);
    }

    #[test]
    fn keys_reach_the_focused_rating_item() {
        let mut app = app(RatingProps::new(5));
        let mut view = MainView::new();
        assert!(view.handle_key_events(&mut app, press(KeyCode::Right)).is_empty());
        assert_eq!(view.handle_key_events(&mut app, press(KeyCode::Enter)), vec![Effect::RatingChanged(2)]);
    }

    #[test]
    fn clear_button_takes_enter_and_tab() {
        let mut app = app(RatingProps::new(5).with_value(2));
        let mut view = MainView::new();
        app.focus_clear_button();
        assert_eq!(view.handle_key_events(&mut app, press(KeyCode::Enter)), vec![Effect::ClearRating]);
        assert_eq!(view.handle_key_events(&mut app, press(KeyCode::BackTab)), vec![Effect::FocusPrevious(FocusTarget::ClearButton)]);
    }

    #[test]
    fn released_tab_moves_between_rating_and_clear_button() {
        let mut app = app(RatingProps::new(3).with_tab_behavior(TabBehavior::Release));
        let mut view = MainView::new();

        let effects = view.handle_key_events(&mut app, press(KeyCode::Tab));
        app.apply_effects(effects);
        assert_eq!(app.focused_target(), Some(FocusTarget::ClearButton));
        assert!(!app.rating.is_focused());

        let effects = view.handle_key_events(&mut app, press(KeyCode::Tab));
        app.apply_effects(effects);
        assert_eq!(app.focused_target(), Some(FocusTarget::Rating));
        assert_eq!(app.rating.control().state().focused_index, Some(0));
    }

    fn hint_text(view: &MainView, app: &App) -> String {
        view.get_hint_spans(app).iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn tab_hint_only_when_tab_leaves_the_stop() {
        let view = MainView::new();
        let trapped = app(RatingProps::new(5));
        assert!(!hint_text(&view, &trapped).contains("Tab"));
        assert!(hint_text(&view, &trapped).contains("(Dracula)"));

        let released = app(RatingProps::new(5).with_tab_behavior(TabBehavior::Release));
        assert!(hint_text(&view, &released).contains(" Tab Focus"));

        let mut on_button = app(RatingProps::new(5));
        on_button.focus_clear_button();
        assert!(hint_text(&view, &on_button).contains(" Tab Focus"));
    }
}
