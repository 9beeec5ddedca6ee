use serde::Serialize;

/// Transient interaction state owned by one control instance.
///
/// Created on mount and dropped on unmount; nothing outside the control's
/// own event handlers writes to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InteractionState {
    /// 1-based index of the hovered item, `0` when nothing is hovered.
    pub hovered: usize,
    /// Item currently holding keyboard focus.
    pub focused_index: Option<usize>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the 1-based `rating` is covered by the hover highlight.
    pub fn highlights(&self, rating: usize) -> bool {
        self.hovered >= rating
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused_index == Some(index)
    }

    /// Drops state that points past the last item after `count` shrinks.
    pub fn clamp_to(&mut self, count: usize) {
        if self.hovered > count {
            self.hovered = 0;
        }
        if self.focused_index.is_some_and(|index| index >= count) {
            self.focused_index = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InteractionState;

    #[test]
    fn clamp_drops_out_of_range_state() {
        let mut state = InteractionState {
            hovered: 5,
            focused_index: Some(4),
        };
        state.clamp_to(3);
        assert_eq!(state, InteractionState::default());

        let mut kept = InteractionState {
            hovered: 2,
            focused_index: Some(1),
        };
        kept.clamp_to(3);
        assert_eq!(kept.hovered, 2);
        assert_eq!(kept.focused_index, Some(1));
    }
}
