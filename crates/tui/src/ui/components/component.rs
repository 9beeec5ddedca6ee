//! Component system for the Starling TUI.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while integrating with the host through a consistent
//! interface. They report side effects back to the host as [`Effect`]s
//! instead of mutating host-level state directly.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::{App, Effect};

/// A UI component with its own behavior, rendered into a provided `Rect`.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: input arrives through `handle_key_events()` and
///    `handle_mouse_events()`
/// 2. **Effects**: handlers return effects the host applies afterwards
/// 3. **Rendering**: `render()` draws the component into the frame area
pub trait Component {
    /// Handle key events when this component has focus.
    ///
    /// Components should only act on keys that are meaningful to them and
    /// leave everything else to the host.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations may cache layout on the app state for hit testing but
    /// must not change interaction state here.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the hint bar while this component is focused.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}
