//! Application state for the Starling demo host.
//!
//! The host owns the rating `value`: the control only reports requests through
//! [`Effect::RatingChanged`], and [`App::apply_effects`] writes the accepted
//! value back into the control. Focus is a small ring of two stops (the
//! rating control and the Clear button) managed through rat-focus.
//!
//! Theme switching and the saved theme preference belong to this demo host
//! only. `starling-rating` keeps no state beyond one mounted control and
//! persists nothing; its colors come from props.

use std::rc::Rc;

use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use starling_rating::{RatingProps, a11y};
use starling_util::UserPreferences;
use tracing::{debug, info, warn};

use crate::ui::components::rating::RatingState;
use crate::ui::theme::{LoadedTheme, Theme, ThemeDefinition, catalog};

/// Side effects requested by components and applied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The user picked this 1-based rating.
    RatingChanged(usize),
    /// Move focus to the stop after the one named, which is the stop focus
    /// is leaving. Components may have dropped their own focus already.
    FocusNext(FocusTarget),
    /// Move focus to the stop before the one named.
    FocusPrevious(FocusTarget),
    /// Reset the rating to unset.
    ClearRating,
    /// Switch to the next theme in the catalog and remember it.
    CycleTheme,
    Quit,
}

/// Cross-cutting context shared by every component.
#[derive(Debug)]
pub struct AppCtx {
    pub theme: Box<dyn Theme>,
    pub active_theme: &'static ThemeDefinition,
    pub preferences: UserPreferences,
}

impl AppCtx {
    pub fn new(loaded: LoadedTheme, preferences: UserPreferences) -> Self {
        Self {
            theme: loaded.theme,
            active_theme: loaded.definition,
            preferences,
        }
    }
}

/// Focusable one-row button.
#[derive(Debug, Default, Clone)]
pub struct ButtonState {
    pub focus: FocusFlag,
    /// Last rendered area for hit testing.
    pub area: Rect,
}

impl ButtonState {
    pub fn named(name: &str) -> Self {
        Self {
            focus: FocusFlag::named(name),
            area: Rect::default(),
        }
    }
}

impl HasFocus for ButtonState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.area
    }
}

/// Stops in the host's Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Rating,
    ClearButton,
}

/// Top-level application state.
#[derive(Debug)]
pub struct App {
    pub ctx: AppCtx,
    pub rating: RatingState,
    pub clear_button: ButtonState,
    pub focus: Rc<Focus>,
    /// Announcement of the last accepted change, shown under the control.
    pub last_change: Option<String>,
    pub should_exit: bool,
    /// Set when state changed and a redraw is due.
    pub dirty: bool,
    container_focus: FocusFlag,
}

impl App {
    pub fn new(props: RatingProps, ctx: AppCtx) -> Self {
        let mut app = Self {
            ctx,
            rating: RatingState::new(props),
            clear_button: ButtonState::named("clear"),
            focus: Rc::new(Focus::default()),
            last_change: None,
            should_exit: false,
            dirty: true,
            container_focus: FocusFlag::named("app"),
        };
        app.rebuild_focus();
        app.focus_rating();
        app
    }

    /// Rebuilds the focus tree, keeping the currently focused widget.
    pub fn rebuild_focus(&mut self) {
        let old_focus = std::mem::take(&mut self.focus);
        self.focus = Rc::new(FocusBuilder::rebuild_for(&*self, Some(Rc::unwrap_or_clone(old_focus))));
    }

    pub fn focused_target(&self) -> Option<FocusTarget> {
        if self.rating.item_focus_flags.iter().any(|flag| flag.get()) {
            Some(FocusTarget::Rating)
        } else if self.clear_button.focus.get() {
            Some(FocusTarget::ClearButton)
        } else {
            None
        }
    }

    /// Focuses the rating control on its current tab stop.
    pub fn focus_rating(&mut self) {
        let index = self.rating.tab_stop_index();
        self.focus_rating_item(index);
    }

    /// Moves keyboard focus to item `index` through its own focus handle.
    pub fn focus_rating_item(&mut self, index: usize) {
        if let Some(flag) = self.rating.item_focus_flags.get(index) {
            self.focus.focus(flag);
        }
        self.rating.sync_focus_from_flags();
        self.dirty = true;
    }

    pub fn focus_clear_button(&mut self) {
        self.focus.focus(&self.clear_button.focus);
        self.rating.sync_focus_from_flags();
        self.dirty = true;
    }

    /// Moves off `from` to the other stop of the two-stop ring.
    fn cycle_focus_from(&mut self, from: FocusTarget) {
        match from {
            FocusTarget::Rating => self.focus_clear_button(),
            FocusTarget::ClearButton => self.focus_rating(),
        }
    }

    /// Applies effects in order.
    pub fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            debug!(?effect, "applying effect");
            match effect {
                Effect::RatingChanged(rating) => self.accept_rating(rating),
                Effect::ClearRating => {
                    self.rating.set_value(0);
                    self.last_change = Some("Rating cleared".to_string());
                    info!("rating cleared");
                }
                // Two stops: forward and backward land on the same target.
                Effect::FocusNext(from) | Effect::FocusPrevious(from) => self.cycle_focus_from(from),
                Effect::CycleTheme => self.cycle_theme(),
                Effect::Quit => self.should_exit = true,
            }
            self.dirty = true;
        }
    }

    fn accept_rating(&mut self, rating: usize) {
        if rating == 0 || rating > self.rating.props().count {
            warn!(rating, "ignoring out-of-range rating");
            return;
        }
        self.rating.set_value(rating);
        self.last_change = Some(a11y::status_text(rating));
        info!(rating, "rating changed");
    }

    fn cycle_theme(&mut self) {
        let next = catalog::next_after(self.ctx.active_theme.id);
        let loaded = LoadedTheme::from_definition(next);
        self.ctx.theme = loaded.theme;
        self.ctx.active_theme = next;
        if let Err(error) = self.ctx.preferences.set_preferred_theme(Some(next.id.to_string())) {
            warn!(%error, "failed to persist theme preference");
        }
        info!(theme = next.id, "theme switched");
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.widget(&self.rating);
        builder.widget(&self.clear_button);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
