//! Host-independent key input and its meaning for the rating control.

use crate::props::TabBehavior;

/// A key press as seen by the control, already translated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    ArrowLeft,
    ArrowRight,
    Tab { shift: bool },
    /// Any other key; carries no meaning for the control.
    Other,
}

/// Direction of a focus move requested by the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusDirection {
    Forward,
    Backward,
}

/// What a key asks the control to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Select the focused item.
    Activate,
    /// Move focus to the next item, wrapping at the end.
    Next,
    /// Move focus to the previous item, wrapping at the start.
    Previous,
    /// Leave the control in the given direction.
    Release(FocusDirection),
    Ignore,
}

impl Key {
    /// Resolves the key to an intent under the given Tab policy.
    pub fn intent(self, tab_behavior: TabBehavior) -> KeyIntent {
        match (self, tab_behavior) {
            (Key::Enter | Key::Space, _) => KeyIntent::Activate,
            (Key::ArrowRight, _) | (Key::Tab { shift: false }, TabBehavior::Trap) => KeyIntent::Next,
            (Key::ArrowLeft, _) | (Key::Tab { shift: true }, TabBehavior::Trap) => KeyIntent::Previous,
            (Key::Tab { shift: false }, TabBehavior::Release) => KeyIntent::Release(FocusDirection::Forward),
            (Key::Tab { shift: true }, TabBehavior::Release) => KeyIntent::Release(FocusDirection::Backward),
            (Key::Other, _) => KeyIntent::Ignore,
        }
    }
}

/// Index after `index` in a ring of `count` items.
pub fn next_index(index: usize, count: usize) -> usize {
    if count == 0 { 0 } else { (index + 1) % count }
}

/// Index before `index` in a ring of `count` items.
pub fn previous_index(index: usize, count: usize) -> usize {
    if index == 0 { count.saturating_sub(1) } else { index - 1 }
}
