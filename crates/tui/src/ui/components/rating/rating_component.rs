use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};
use starling_rating::{Direction, Effect as RatingEffect, FocusDirection, Key, a11y};
use unicode_width::UnicodeWidthStr;

use super::icon::IconRequest;
use super::input::map_key;
use super::layout::{CellMetrics, control_areas, inner_height, item_rects, tooltip_rect};
use super::state::RatingState;
use crate::app::{App, Effect, FocusTarget};
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Draws a [`RatingState`] and routes terminal input into it.
///
/// Rating changes are handed to the host as [`Effect::RatingChanged`]; the
/// host owns `value` and writes it back through [`RatingState::set_value`].
#[derive(Debug, Default)]
pub struct RatingComponent;

impl RatingComponent {
    pub fn new() -> Self {
        Self
    }

    /// Rows needed to draw `state`, borders included.
    pub fn preferred_height(state: &RatingState) -> u16 {
        let props = state.props();
        let metrics = CellMetrics::new(props.size, props.gap, props.direction);
        inner_height(props.count, props.direction, metrics).saturating_add(2)
    }

    /// Columns needed to draw `state`, borders included.
    pub fn preferred_width(state: &RatingState) -> u16 {
        let props = state.props();
        let metrics = CellMetrics::new(props.size, props.gap, props.direction);
        let longest_label = props
            .tooltip_labels
            .iter()
            .map(|label| u16::try_from(label.width()).unwrap_or(u16::MAX))
            .max()
            .unwrap_or(0);
        let body = match props.direction {
            Direction::Horizontal => metrics.run_length(props.count, props.direction).max(longest_label.saturating_add(2)),
            Direction::Vertical => metrics.item_width.saturating_add(longest_label).saturating_add(3),
        };
        let title = u16::try_from(a11y::GROUP_LABEL.len()).unwrap_or(u16::MAX).saturating_add(2);
        let status = u16::try_from(a11y::status_text(props.count).len()).unwrap_or(u16::MAX);
        body.max(title).max(status).saturating_add(2)
    }

    /// Translates control effects into host effects, applying focus moves
    /// directly to the item flags.
    fn forward_effects(app: &mut App, effects: Vec<RatingEffect>) -> Vec<Effect> {
        let mut forwarded = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                RatingEffect::RatingChanged(rating) => forwarded.push(Effect::RatingChanged(rating)),
                RatingEffect::FocusItem(index) => app.focus_rating_item(index),
                RatingEffect::ReleaseFocus(FocusDirection::Forward) => forwarded.push(Effect::FocusNext(FocusTarget::Rating)),
                RatingEffect::ReleaseFocus(FocusDirection::Backward) => {
                    forwarded.push(Effect::FocusPrevious(FocusTarget::Rating))
                }
            }
        }
        forwarded
    }
}

impl Component for RatingComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let mapped = map_key(key);
        let outcome = app.rating.key_down(mapped);
        let mut effects = Self::forward_effects(app, outcome.effects);
        if !outcome.handled
            && let Key::Tab { shift } = mapped
        {
            // Inert controls leave Tab to the host's focus order.
            effects.push(if shift {
                Effect::FocusPrevious(FocusTarget::Rating)
            } else {
                Effect::FocusNext(FocusTarget::Rating)
            });
        }
        app.dirty = true;
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if app.rating.pointer_moved(x, y) {
                    app.dirty = true;
                }
                Vec::new()
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let target = app.rating.item_at(x, y);
                let effects = app.rating.click_at(x, y);
                if let Some(index) = target
                    && app.rating.control().state().focused_index == Some(index)
                {
                    app.focus_rating_item(index);
                }
                app.dirty = true;
                Self::forward_effects(app, effects)
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let state = &mut app.rating;
        let view = state.view();

        let mut block = th::block(theme, Some(view.label), state.is_focused());
        if view.disabled {
            block = block.border_style(theme.text_muted_style());
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let metrics = CellMetrics::new(view.size, view.gap, view.direction);
        let areas = control_areas(inner, view.items.len(), view.direction, metrics);
        let rects = item_rects(areas.items, view.items.len(), view.direction, metrics);

        let (active, inactive) = state.fill_colors();
        let roles = theme.roles();
        for (item, rect) in view.items.iter().zip(rects.iter().copied()) {
            let color = if item.is_active() {
                active.unwrap_or(roles.star_active)
            } else {
                inactive.unwrap_or(roles.star_inactive)
            };
            let request = IconRequest {
                index: item.index,
                size: view.size,
                area: rect,
                color,
                shape: &item.icon,
                label: &item.label,
            };
            let icon = state.icon().render_icon(&request);

            let mut style = Style::default();
            if item.focused {
                style = style.patch(theme.focused_item_style());
            }
            if view.disabled {
                style = style.add_modifier(Modifier::DIM);
            }
            frame.render_widget(Paragraph::new(Line::from(icon)).centered().style(style), rect);
        }

        if let Some((item, tooltip)) = view.visible_tooltip()
            && let Some(anchor) = rects.get(item.index).copied()
        {
            let width = u16::try_from(tooltip.text.width()).unwrap_or(u16::MAX);
            let tip_area = tooltip_rect(anchor, width, view.direction, areas.tooltip_lane).intersection(frame.area());
            if !tip_area.is_empty() {
                frame.render_widget(Clear, tip_area);
                let text = Span::raw(format!(" {} ", tooltip.text));
                frame.render_widget(Paragraph::new(Line::from(text)).style(theme.tooltip_style()), tip_area);
            }
        }

        frame.render_widget(Paragraph::new(view.status.as_str()).style(theme.text_muted_style()), areas.status);

        state.last_area = area;
        state.per_item_areas = rects;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" Enter/Space", " Select"), (" ←/→", " Navigate")])
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use starling_rating::{RatingProps, TabBehavior};
    use starling_util::UserPreferences;

    use super::*;
    use crate::app::AppCtx;
    use crate::ui::runtime::{render_to_buffer, render_to_lines};
    use crate::ui::theme::{LoadedTheme, catalog};

    fn app(props: RatingProps) -> App {
        let ctx = AppCtx::new(LoadedTheme::from_definition(catalog::default_truecolor()), UserPreferences::ephemeral());
        App::new(props, ctx)
    }

    fn mouse(kind: MouseEventKind, rect: Rect) -> MouseEvent {
        MouseEvent {
            kind,
            column: rect.x,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn hovered_tooltip_is_drawn_in_the_lane_above() {
        let mut app = app(RatingProps::new(3).with_tooltips(["Bad", "OK", "Good"], true));
        render_to_lines(&mut app, 40, 12).expect("first render");
        let item = app.rating.per_item_areas[1];

        let mut component = RatingComponent::new();
        component.handle_mouse_events(&mut app, mouse(MouseEventKind::Moved, item));
        assert_eq!(app.rating.control().state().hovered, 2);

        let lines = render_to_lines(&mut app, 40, 12).expect("second render");
        assert!(lines[usize::from(item.y) - 1].contains(" OK "));
        assert!(!lines.iter().any(|line| line.contains("Good")));
    }

    #[test]
    fn click_focuses_the_item_and_requests_its_rating() {
        let mut app = app(RatingProps::new(5));
        render_to_lines(&mut app, 40, 12).expect("render");
        let item = app.rating.per_item_areas[3];

        let mut component = RatingComponent::new();
        let effects = component.handle_mouse_events(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), item));
        assert_eq!(effects, vec![Effect::RatingChanged(4)]);
        assert!(app.rating.item_focus_flags[3].get());
    }

    #[test]
    fn readonly_items_ignore_the_pointer() {
        let mut app = app(RatingProps::new(5).with_readonly(true).with_value(2));
        render_to_lines(&mut app, 40, 12).expect("render");
        let item = app.rating.per_item_areas[4];

        let mut component = RatingComponent::new();
        component.handle_mouse_events(&mut app, mouse(MouseEventKind::Moved, item));
        let effects = component.handle_mouse_events(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), item));
        assert!(effects.is_empty());
        assert_eq!(app.rating.view().active_count(), 2);
    }

    #[test]
    fn released_tab_hands_focus_to_the_host() {
        let mut app = app(RatingProps::new(3).with_tab_behavior(TabBehavior::Release));
        let mut component = RatingComponent::new();
        let effects = component.handle_key_events(&mut app, KeyEvent::from(KeyCode::Tab));
        assert_eq!(effects, vec![Effect::FocusNext(FocusTarget::Rating)]);
        assert!(!app.rating.is_focused());

        app.apply_effects(effects);
        assert_eq!(app.focused_target(), Some(FocusTarget::ClearButton));
        assert_eq!(app.rating.control().state().focused_index, None);
    }

    #[test]
    fn inert_control_leaves_tab_to_the_host() {
        let mut app = app(RatingProps::new(3).with_disabled(true));
        let mut component = RatingComponent::new();
        let effects = component.handle_key_events(&mut app, KeyEvent::from(KeyCode::BackTab));
        assert_eq!(effects, vec![Effect::FocusPrevious(FocusTarget::Rating)]);
        app.apply_effects(effects);
        assert_eq!(app.focused_target(), Some(FocusTarget::ClearButton));
    }

    #[test]
    fn trapped_tab_wraps_inside_the_control() {
        let mut app = app(RatingProps::new(3).with_value(3));
        let mut component = RatingComponent::new();
        assert!(component.handle_key_events(&mut app, KeyEvent::from(KeyCode::Tab)).is_empty());
        assert!(app.rating.item_focus_flags[0].get());
    }

    #[test]
    fn focused_item_is_highlighted_and_others_are_not() {
        let mut app = app(RatingProps::new(3));
        render_to_lines(&mut app, 40, 12).expect("render");
        let item = app.rating.per_item_areas[1];
        let mut component = RatingComponent::new();
        component.handle_mouse_events(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), item));

        let buffer = render_to_buffer(&mut app, 40, 12).expect("styled render");
        let roles = app.ctx.theme.roles().clone();
        let focused = &buffer[(item.x, item.y)];
        assert_eq!(focused.bg, roles.selection_bg);
        assert!(focused.modifier.contains(Modifier::BOLD | Modifier::UNDERLINED));

        let other = app.rating.per_item_areas[0];
        let unfocused = &buffer[(other.x, other.y)];
        assert_ne!(unfocused.bg, roles.selection_bg);
        assert!(!unfocused.modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn disabled_control_is_dimmed_with_a_muted_border() {
        let mut app = app(RatingProps::new(3).with_disabled(true));
        let buffer = render_to_buffer(&mut app, 40, 12).expect("styled render");
        let roles = app.ctx.theme.roles().clone();

        for item in &app.rating.per_item_areas {
            assert!(buffer[(item.x, item.y)].modifier.contains(Modifier::DIM));
        }
        let area = app.rating.last_area;
        let corner = &buffer[(area.x, area.bottom() - 1)];
        assert_eq!(corner.fg, roles.text_muted);
    }
}
