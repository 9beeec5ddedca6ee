//! Caller-supplied configuration for a rating control.
//!
//! `RatingProps` is immutable from the control's point of view: the control
//! reads it on every render and event, but only the caller replaces it (for
//! example after receiving a `RatingChanged` effect).

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default item size in pixels.
pub const DEFAULT_SIZE: u16 = 24;
/// Default spacing between items in pixels.
pub const DEFAULT_GAP: u16 = 4;
/// Fill color of items at or below the current (or hovered) rating.
pub const DEFAULT_ACTIVE_COLOR: &str = "#FFC107";
/// Fill color of the remaining items.
pub const DEFAULT_INACTIVE_COLOR: &str = "#E0E0E0";

/// Callback invoked with the 1-based rating when an item is activated.
pub type ChangeHandler = Rc<dyn Fn(usize)>;

/// Layout axis of the items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

/// How Tab and Shift+Tab behave while an item holds focus.
///
/// Arrow keys always rove between items. `Trap` also routes Tab through the
/// items with wraparound, so Tab never leaves the control. `Release` lets Tab
/// leave the control and asks the host to move focus onward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabBehavior {
    #[default]
    Trap,
    Release,
}

/// Rejected configuration reported by [`RatingProps::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropsError {
    /// A rating control needs at least one item.
    #[error("rating count must be at least 1")]
    EmptyCount,
    /// The current value points past the last item.
    #[error("rating value {value} exceeds item count {count}")]
    ValueOutOfRange { value: usize, count: usize },
}

/// Configuration for one rating control.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingProps {
    /// Number of items.
    pub count: usize,
    /// Current rating; `0` means unset.
    pub value: usize,
    /// Item size in pixels.
    pub size: u16,
    /// Spacing between items in pixels.
    pub gap: u16,
    /// Keeps the displayed value but ignores hover and activation.
    pub readonly: bool,
    /// Ignores all pointer and keyboard mutation.
    pub disabled: bool,
    pub active_color: String,
    pub inactive_color: String,
    pub direction: Direction,
    /// Shows the hovered item's tooltip label.
    pub show_tooltip: bool,
    /// Tooltip text per item, index aligned. Missing or empty entries render
    /// no tooltip.
    pub tooltip_labels: Vec<String>,
    /// Path data replacing the default star shape.
    pub custom_svg_path: Option<String>,
    /// Extra styling hook appended to the container classes.
    pub class_name: String,
    pub tab_behavior: TabBehavior,
    #[serde(skip)]
    pub on_change: Option<ChangeHandler>,
}

impl Default for RatingProps {
    fn default() -> Self {
        Self {
            count: 5,
            value: 0,
            size: DEFAULT_SIZE,
            gap: DEFAULT_GAP,
            readonly: false,
            disabled: false,
            active_color: DEFAULT_ACTIVE_COLOR.to_string(),
            inactive_color: DEFAULT_INACTIVE_COLOR.to_string(),
            direction: Direction::default(),
            show_tooltip: false,
            tooltip_labels: Vec::new(),
            custom_svg_path: None,
            class_name: String::new(),
            tab_behavior: TabBehavior::default(),
            on_change: None,
        }
    }
}

impl fmt::Debug for RatingProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingProps")
            .field("count", &self.count)
            .field("value", &self.value)
            .field("size", &self.size)
            .field("gap", &self.gap)
            .field("readonly", &self.readonly)
            .field("disabled", &self.disabled)
            .field("active_color", &self.active_color)
            .field("inactive_color", &self.inactive_color)
            .field("direction", &self.direction)
            .field("show_tooltip", &self.show_tooltip)
            .field("tooltip_labels", &self.tooltip_labels)
            .field("custom_svg_path", &self.custom_svg_path)
            .field("class_name", &self.class_name)
            .field("tab_behavior", &self.tab_behavior)
            .field("on_change", &self.on_change.as_ref().map(|_| "Fn(usize)"))
            .finish()
    }
}

impl RatingProps {
    /// Creates props for `count` items with every other field defaulted.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: usize) -> Self {
        self.value = value;
        self
    }

    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_tab_behavior(mut self, tab_behavior: TabBehavior) -> Self {
        self.tab_behavior = tab_behavior;
        self
    }

    /// Sets the tooltip labels and turns tooltip display on or off.
    pub fn with_tooltips<I, S>(mut self, labels: I, show: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tooltip_labels = labels.into_iter().map(Into::into).collect();
        self.show_tooltip = show;
        self
    }

    pub fn with_colors(mut self, active: impl Into<String>, inactive: impl Into<String>) -> Self {
        self.active_color = active.into();
        self.inactive_color = inactive.into();
        self
    }

    pub fn with_custom_svg_path(mut self, path: impl Into<String>) -> Self {
        self.custom_svg_path = Some(path.into());
        self
    }

    /// Registers the change callback.
    pub fn on_change(mut self, handler: impl Fn(usize) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    /// True when hover feedback and activation are suppressed.
    pub fn is_inert(&self) -> bool {
        self.readonly || self.disabled
    }

    /// Tooltip text for the item at `index`, if a non-empty label exists.
    pub fn tooltip_label(&self, index: usize) -> Option<&str> {
        self.tooltip_labels
            .get(index)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    /// Checks the invariants a caller is expected to uphold.
    ///
    /// Rendering never calls this; out-of-range values still render.
    pub fn validate(&self) -> Result<(), PropsError> {
        if self.count == 0 {
            return Err(PropsError::EmptyCount);
        }
        if self.value > self.count {
            return Err(PropsError::ValueOutOfRange {
                value: self.value,
                count: self.count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_documented_defaults() {
        let props: RatingProps = serde_json::from_str(r#"{ "count": 3 }"#).expect("props parse");
        assert_eq!(props.count, 3);
        assert_eq!(props.value, 0);
        assert_eq!(props.size, 24);
        assert_eq!(props.gap, 4);
        assert_eq!(props.active_color, "#FFC107");
        assert_eq!(props.inactive_color, "#E0E0E0");
        assert_eq!(props.direction, Direction::Horizontal);
        assert_eq!(props.tab_behavior, TabBehavior::Trap);
        assert!(!props.readonly && !props.disabled && !props.show_tooltip);
    }

    #[test]
    fn direction_and_tab_behavior_use_lowercase_names() {
        let props: RatingProps =
            serde_json::from_str(r#"{ "count": 2, "direction": "vertical", "tab_behavior": "release" }"#).expect("props parse");
        assert_eq!(props.direction, Direction::Vertical);
        assert_eq!(props.tab_behavior, TabBehavior::Release);
    }

    #[test]
    fn validate_rejects_empty_and_out_of_range() {
        assert_eq!(RatingProps::new(0).validate(), Err(PropsError::EmptyCount));
        assert_eq!(
            RatingProps::new(3).with_value(4).validate(),
            Err(PropsError::ValueOutOfRange { value: 4, count: 3 })
        );
        assert!(RatingProps::new(3).with_value(3).validate().is_ok());
    }

    #[test]
    fn empty_tooltip_labels_are_treated_as_missing() {
        let props = RatingProps::new(3).with_tooltips(["Bad", ""], true);
        assert_eq!(props.tooltip_label(0), Some("Bad"));
        assert_eq!(props.tooltip_label(1), None);
        assert_eq!(props.tooltip_label(2), None);
    }
}
