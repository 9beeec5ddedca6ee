use std::fmt;
use std::rc::Rc;

use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::{layout::Rect, style::Color};
use starling_rating::{Effect, KeyOutcome, Key, RatingControl, RatingProps, RatingView};
use tracing::warn;

use super::icon::{DefaultIcon, IconRenderer};
use crate::ui::components::find_target_index_by_mouse_position;
use crate::ui::theme::theme_helpers::parse_color;

/// Terminal-side state of a rating control.
///
/// Wraps the core [`RatingControl`] and owns one rat-focus flag per item so
/// that focus moves go straight to the item's handle. The core's
/// `focused_index` stays authoritative; the flags mirror it and are read back
/// when the host focus manager moves focus on its own.
pub struct RatingState {
    control: RatingControl,
    /// Focus flag for the control in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags for each item; kept in sync with `count`.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Last rendered area; used for hit testing.
    pub last_area: Rect,
    /// Last computed per-item areas for hit testing.
    pub per_item_areas: Vec<Rect>,
    icon: Rc<dyn IconRenderer>,
    active_color: Option<Color>,
    inactive_color: Option<Color>,
}

impl fmt::Debug for RatingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingState")
            .field("control", &self.control)
            .field("item_focus_flags", &self.item_focus_flags.len())
            .field("last_area", &self.last_area)
            .field("per_item_areas", &self.per_item_areas)
            .field("active_color", &self.active_color)
            .field("inactive_color", &self.inactive_color)
            .finish_non_exhaustive()
    }
}

impl RatingState {
    pub fn new(props: RatingProps) -> Self {
        let mut state = Self {
            control: RatingControl::new(RatingProps::default()),
            container_focus: FocusFlag::named("rating"),
            item_focus_flags: Vec::new(),
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
            icon: Rc::new(DefaultIcon),
            active_color: None,
            inactive_color: None,
        };
        state.set_props(props);
        state
    }

    /// Replaces the default glyphs with a custom icon factory.
    pub fn with_icon(mut self, icon: impl IconRenderer + 'static) -> Self {
        self.icon = Rc::new(icon);
        self
    }

    pub fn icon(&self) -> &dyn IconRenderer {
        self.icon.as_ref()
    }

    pub fn control(&self) -> &RatingControl {
        &self.control
    }

    pub fn props(&self) -> &RatingProps {
        self.control.props()
    }

    /// Replaces the props; focus flags are rebuilt when the item count changes.
    pub fn set_props(&mut self, props: RatingProps) {
        self.active_color = resolve_color("active_color", &props.active_color);
        self.inactive_color = resolve_color("inactive_color", &props.inactive_color);
        let count_changed = props.count != self.item_focus_flags.len();
        self.control.set_props(props);
        if count_changed {
            self.rebuild_item_focus_flags();
        }
    }

    pub fn set_value(&mut self, value: usize) {
        self.control.set_value(value);
    }

    /// Parsed fill colors; `None` when the prop string is not a color.
    pub fn fill_colors(&self) -> (Option<Color>, Option<Color>) {
        (self.active_color, self.inactive_color)
    }

    /// Recreates one flag per item and re-applies the core focus.
    pub fn rebuild_item_focus_flags(&mut self) {
        let count = self.props().count;
        self.item_focus_flags = (0..count).map(|i| FocusFlag::named(&format!("rating.item.{i}"))).collect();
        self.per_item_areas.clear();
        self.mirror_focus();
    }

    /// Writes the core focus into the item flags.
    pub fn mirror_focus(&self) {
        let focused = self.control.state().focused_index;
        for (index, flag) in self.item_focus_flags.iter().enumerate() {
            flag.set(focused == Some(index));
        }
    }

    /// Reads focus moves made by the host focus manager back into the core.
    pub fn sync_focus_from_flags(&mut self) {
        let flagged = self.item_focus_flags.iter().position(|flag| flag.get());
        if flagged == self.control.state().focused_index {
            return;
        }
        match flagged {
            Some(index) => self.control.focus(index),
            None => self.control.blur(),
        }
    }

    /// True when any item holds focus.
    pub fn is_focused(&self) -> bool {
        self.control.state().focused_index.is_some()
    }

    /// Item that receives focus when the control is entered by Tab.
    pub fn tab_stop_index(&self) -> usize {
        self.view().tab_stop().map_or(0, |item| item.index)
    }

    /// Focuses item `index` in the core and mirrors it to the flags.
    pub fn focus_item(&mut self, index: usize) {
        self.control.focus(index);
        self.mirror_focus();
    }

    pub fn key_down(&mut self, key: Key) -> KeyOutcome {
        self.sync_focus_from_flags();
        let outcome = self.control.key_down(key);
        self.mirror_focus();
        outcome
    }

    /// Item index under the terminal cell `(x, y)`.
    pub fn item_at(&self, x: u16, y: u16) -> Option<usize> {
        find_target_index_by_mouse_position(&self.last_area, &self.per_item_areas, x, y)
    }

    /// Pointer moved to `(x, y)`; enters the item under it or leaves them all.
    ///
    /// Returns true when the hover state changed.
    pub fn pointer_moved(&mut self, x: u16, y: u16) -> bool {
        let before = self.control.state().hovered;
        match self.item_at(x, y) {
            Some(index) if before != index + 1 => self.control.pointer_enter(index),
            None if before != 0 => self.control.pointer_leave(),
            _ => return false,
        }
        self.control.state().hovered != before
    }

    /// Primary-button press at `(x, y)`.
    pub fn click_at(&mut self, x: u16, y: u16) -> Vec<Effect> {
        let Some(index) = self.item_at(x, y) else {
            return Vec::new();
        };
        let effects = self.control.click(index);
        self.mirror_focus();
        effects
    }

    pub fn view(&self) -> RatingView {
        self.control.view()
    }
}

fn resolve_color(field: &'static str, value: &str) -> Option<Color> {
    let color = parse_color(value);
    if color.is_none() {
        warn!(field, value, "unparsable rating color; using theme color");
    }
    color
}

impl HasFocus for RatingState {
    /// Each item is a leaf under the container flag.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.item_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
