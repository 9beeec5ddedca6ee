//! # Starling TUI
//!
//! Terminal host for the star rating control, built on ratatui, crossterm and
//! rat-focus.
//!
//! - [`run`] starts the interactive demo: the host owns the rating value and
//!   writes accepted changes back into the control.
//! - [`render_snapshot`] draws one frame off screen and returns plain text,
//!   which the `starling render` command prints.
//!
//! Hosts embedding the control in their own UI use [`RatingState`] and
//! [`RatingComponent`] directly; custom icons implement [`IconRenderer`].

mod app;
mod ui;

use anyhow::Result;
use starling_rating::RatingProps;
use starling_util::UserPreferences;
use tracing::warn;

pub use app::{App, AppCtx, Effect};
pub use ui::components::rating::{
    CellMetrics, DefaultIcon, IconRenderer, IconRequest, PATH_GLYPH, RatingComponent, RatingState, STAR_GLYPH, map_key,
};
pub use ui::components::Component;
pub use ui::theme::{LoadedTheme, Theme, catalog};

/// Options for an interactive session.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub props: RatingProps,
    /// Theme id from the command line or config; `TUI_THEME` still wins.
    pub theme: Option<String>,
}

/// Runs the interactive demo until the user quits.
pub async fn run(options: RunOptions) -> Result<()> {
    let preferences = UserPreferences::new().unwrap_or_else(|error| {
        warn!(%error, "preferences unavailable; theme choice will not be saved");
        UserPreferences::ephemeral()
    });
    let preferred = options.theme.or_else(|| preferences.preferred_theme());
    let loaded = ui::theme::load(preferred.as_deref());
    let app = App::new(options.props, AppCtx::new(loaded, preferences));
    ui::runtime::run_app(app).await
}

/// Draws a single frame of the control at `width` x `height` cells and
/// returns its rows as text, trailing spaces trimmed.
pub fn render_snapshot(props: RatingProps, theme: Option<&str>, width: u16, height: u16) -> Result<Vec<String>> {
    let loaded = ui::theme::load(theme);
    let mut app = App::new(props, AppCtx::new(loaded, UserPreferences::ephemeral()));
    ui::runtime::render_to_lines(&mut app, width, height)
}
