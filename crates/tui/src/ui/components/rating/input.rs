use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use starling_rating::Key;

/// Translates a crossterm key event into the control's key set.
///
/// Terminals report Shift+Tab either as `BackTab` or as `Tab` with SHIFT.
pub fn map_key(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Tab => Key::Tab {
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
        },
        KeyCode::BackTab => Key::Tab { shift: true },
        _ => Key::Other,
    }
}
