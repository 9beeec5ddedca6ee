//! The rating control: event handlers over props and interaction state.
//!
//! The control is fully controlled. Activation reports the requested rating
//! through the change callback and an [`Effect::RatingChanged`]; `value` only
//! changes when the caller hands in new props.

use tracing::debug;

use crate::a11y::{self, Politeness, Role, SemanticsNode};
use crate::keys::{FocusDirection, Key, KeyIntent, next_index, previous_index};
use crate::props::RatingProps;
use crate::state::InteractionState;
use crate::view::RatingView;

/// Side effects requested by the control for its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Effect {
    /// The user picked this 1-based rating.
    RatingChanged(usize),
    /// Move the host's focus handle to this item.
    FocusItem(usize),
    /// Move the host's focus out of the control.
    ReleaseFocus(FocusDirection),
}

/// Result of a key press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    pub effects: Vec<Effect>,
    /// The control consumed the key; the host must not apply its default.
    pub handled: bool,
}

impl KeyOutcome {
    fn handled(effects: Vec<Effect>) -> Self {
        Self { effects, handled: true }
    }
}

/// A star rating control instance.
#[derive(Debug, Clone)]
pub struct RatingControl {
    props: RatingProps,
    state: InteractionState,
}

impl RatingControl {
    /// Mounts a control with fresh interaction state.
    pub fn new(props: RatingProps) -> Self {
        Self {
            props,
            state: InteractionState::new(),
        }
    }

    pub fn props(&self) -> &RatingProps {
        &self.props
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Replaces the props, keeping interaction state that is still in range.
    pub fn set_props(&mut self, props: RatingProps) {
        self.state.clamp_to(props.count);
        self.props = props;
    }

    /// Updates only the controlled value.
    pub fn set_value(&mut self, value: usize) {
        self.props.value = value;
    }

    pub fn pointer_enter(&mut self, index: usize) {
        if self.props.is_inert() || index >= self.props.count {
            return;
        }
        self.state.hovered = index + 1;
        debug!(hovered = self.state.hovered, "rating hover");
    }

    pub fn pointer_leave(&mut self) {
        if self.props.is_inert() {
            return;
        }
        self.state.hovered = 0;
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.props.count {
            self.state.focused_index = Some(index);
        }
    }

    pub fn blur(&mut self) {
        self.state.focused_index = None;
    }

    /// Requests the rating selected by item `index`.
    pub fn activate(&mut self, index: usize) -> Vec<Effect> {
        if self.props.is_inert() || index >= self.props.count {
            return Vec::new();
        }
        let rating = index + 1;
        debug!(rating, "rating activated");
        if let Some(handler) = &self.props.on_change {
            handler(rating);
        }
        vec![Effect::RatingChanged(rating)]
    }

    /// Primary-button click on item `index`.
    ///
    /// Readonly items do not receive pointer events at all. Otherwise the
    /// item takes focus before activation is attempted.
    pub fn click(&mut self, index: usize) -> Vec<Effect> {
        if self.props.readonly || index >= self.props.count {
            return Vec::new();
        }
        self.focus(index);
        self.activate(index)
    }

    /// Handles a key press delivered to the focused item.
    pub fn key_down(&mut self, key: Key) -> KeyOutcome {
        let Some(index) = self.state.focused_index else {
            return KeyOutcome::default();
        };
        if self.props.is_inert() {
            return KeyOutcome::default();
        }

        let count = self.props.count;
        match key.intent(self.props.tab_behavior) {
            KeyIntent::Activate => KeyOutcome::handled(self.activate(index)),
            KeyIntent::Next => KeyOutcome::handled(self.move_focus(next_index(index, count))),
            KeyIntent::Previous => KeyOutcome::handled(self.move_focus(previous_index(index, count))),
            KeyIntent::Release(direction) => {
                self.blur();
                KeyOutcome::handled(vec![Effect::ReleaseFocus(direction)])
            }
            KeyIntent::Ignore => KeyOutcome::default(),
        }
    }

    fn move_focus(&mut self, index: usize) -> Vec<Effect> {
        self.state.focused_index = Some(index);
        debug!(focused = index, "rating focus moved");
        vec![Effect::FocusItem(index)]
    }

    /// Derives the current view.
    pub fn view(&self) -> RatingView {
        RatingView::derive(&self.props, &self.state)
    }

    /// Builds the accessibility tree for the current view.
    pub fn semantics(&self) -> SemanticsNode {
        let view = self.view();
        let enabled = !view.disabled;

        let mut group = SemanticsNode::new(Role::RadioGroup);
        group.label = Some(view.label.to_string());
        group.enabled = enabled;

        for item in &view.items {
            let mut radio = SemanticsNode::new(Role::Radio);
            radio.label = Some(item.name.clone());
            radio.checked = Some(item.checked);
            radio.focused = item.focused;
            radio.enabled = enabled;
            radio.tab_index = Some(if item.tab_stop { 0 } else { -1 });
            radio.described_by = item.described_by.clone();

            if let Some(tooltip) = &item.tooltip {
                let mut tip = SemanticsNode::new(Role::Tooltip);
                tip.id = Some(tooltip.id.clone());
                tip.text = Some(tooltip.text.clone());
                tip.hidden = !tooltip.visible;
                radio.children.push(tip);
            }

            let mut img = SemanticsNode::new(Role::Img);
            img.label = Some(item.label.clone());
            radio.children.push(img);

            group.children.push(radio);
        }

        let mut status = SemanticsNode::new(Role::Status);
        status.live = Some(Politeness::Polite);
        status.text = Some(a11y::status_text(self.props.value));
        group.children.push(status);

        group
    }
}
