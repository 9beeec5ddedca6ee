//! Derived per-item view of a rating control.
//!
//! A `RatingView` is a pure function of the props and the interaction state.
//! Deriving it twice from the same inputs yields equal values, so hosts can
//! diff views to decide whether a redraw is needed.

use serde::Serialize;

use crate::a11y;
use crate::props::{Direction, RatingProps};
use crate::state::InteractionState;

/// Path data of the default five-point star inside a 24x24 view box.
pub const DEFAULT_STAR_PATH: &str = "M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z";

/// View box of the default vector shape.
pub const VIEW_BOX: &str = "0 0 24 24";

/// Shape drawn for an item when no icon renderer is supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum IconShape {
    Star,
    Path(String),
}

impl IconShape {
    pub fn path_data(&self) -> &str {
        match self {
            IconShape::Star => DEFAULT_STAR_PATH,
            IconShape::Path(path) => path,
        }
    }
}

/// Tooltip attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipView {
    pub id: String,
    pub text: String,
    pub visible: bool,
}

/// Visual and semantic state of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub index: usize,
    /// 1-based rating this item selects.
    pub rating: usize,
    pub filled: bool,
    pub hovered: bool,
    pub focused: bool,
    /// Resolved fill color string.
    pub color: String,
    pub tab_stop: bool,
    pub checked: bool,
    /// Short accessible name, e.g. "2 stars".
    pub name: String,
    /// Descriptive label of the icon, e.g. "Rate 2 stars".
    pub label: String,
    pub described_by: Option<String>,
    pub tooltip: Option<TooltipView>,
    pub icon: IconShape,
}

impl ItemView {
    /// Filled or hover-highlighted.
    pub fn is_active(&self) -> bool {
        self.filled || self.hovered
    }
}

/// Complete derived view of a control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingView {
    pub direction: Direction,
    pub size: u16,
    pub gap: u16,
    pub readonly: bool,
    pub disabled: bool,
    pub class_name: String,
    pub label: &'static str,
    pub items: Vec<ItemView>,
    /// Live region text.
    pub status: String,
}

impl RatingView {
    /// Derives the view for `props` under `state`.
    pub fn derive(props: &RatingProps, state: &InteractionState) -> Self {
        let icon = props
            .custom_svg_path
            .as_ref()
            .filter(|path| !path.is_empty())
            .map_or(IconShape::Star, |path| IconShape::Path(path.clone()));
        let tab_stop = tab_stop_index(props, state);

        let items = (0..props.count)
            .map(|index| {
                let rating = index + 1;
                let filled = props.value >= rating;
                let hovered = state.highlights(rating);
                let color = if filled || hovered {
                    props.active_color.clone()
                } else {
                    props.inactive_color.clone()
                };
                let tooltip = props.tooltip_label(index).map(|text| TooltipView {
                    id: a11y::tooltip_id(index),
                    text: text.to_string(),
                    visible: props.show_tooltip && state.hovered == rating,
                });
                ItemView {
                    index,
                    rating,
                    filled,
                    hovered,
                    focused: state.is_focused(index),
                    color,
                    tab_stop: index == tab_stop,
                    checked: props.value == rating,
                    name: a11y::star_count(rating),
                    label: a11y::rate_label(rating),
                    described_by: props.show_tooltip.then(|| a11y::tooltip_id(index)),
                    tooltip,
                    icon: icon.clone(),
                }
            })
            .collect();

        Self {
            direction: props.direction,
            size: props.size,
            gap: props.gap,
            readonly: props.readonly,
            disabled: props.disabled,
            class_name: props.class_name.clone(),
            label: a11y::GROUP_LABEL,
            items,
            status: a11y::status_text(props.value),
        }
    }

    /// Number of items rendered as filled.
    pub fn filled_count(&self) -> usize {
        self.items.iter().filter(|item| item.filled).count()
    }

    /// Number of items drawn in the active color.
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_active()).count()
    }

    /// The single item currently in natural tab order.
    pub fn tab_stop(&self) -> Option<&ItemView> {
        self.items.iter().find(|item| item.tab_stop)
    }

    /// The tooltip currently shown, if any.
    pub fn visible_tooltip(&self) -> Option<(&ItemView, &TooltipView)> {
        self.items
            .iter()
            .find_map(|item| item.tooltip.as_ref().filter(|tip| tip.visible).map(|tip| (item, tip)))
    }
}

/// Focused item first, then the item matching `value`, then the first item.
fn tab_stop_index(props: &RatingProps, state: &InteractionState) -> usize {
    if let Some(index) = state.focused_index.filter(|index| *index < props.count) {
        return index;
    }
    if (1..=props.count).contains(&props.value) {
        return props.value - 1;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(props: &RatingProps, hovered: usize, focused_index: Option<usize>) -> RatingView {
        RatingView::derive(props, &InteractionState { hovered, focused_index })
    }

    #[test]
    fn first_value_items_are_filled_for_every_value() {
        for count in 1..=7 {
            for value in 0..=count {
                let v = view(&RatingProps::new(count).with_value(value), 0, None);
                assert_eq!(v.items.len(), count);
                for item in &v.items {
                    assert_eq!(item.filled, item.index < value, "count={count} value={value} index={}", item.index);
                    assert_eq!(item.is_active(), item.filled);
                }
            }
        }
    }

    #[test]
    fn fill_color_follows_filled_or_hovered() {
        let props = RatingProps::new(5).with_value(1).with_colors("gold", "gray");
        let v = view(&props, 3, None);
        let colors: Vec<&str> = v.items.iter().map(|item| item.color.as_str()).collect();
        assert_eq!(colors, ["gold", "gold", "gold", "gray", "gray"]);
    }

    #[test]
    fn tab_stop_prefers_focus_then_value_then_first() {
        let props = RatingProps::new(5).with_value(3);
        assert_eq!(view(&props, 0, Some(1)).tab_stop().map(|item| item.index), Some(1));
        assert_eq!(view(&props, 0, None).tab_stop().map(|item| item.index), Some(2));
        assert_eq!(view(&RatingProps::new(5), 0, None).tab_stop().map(|item| item.index), Some(0));

        let stops = view(&props, 0, Some(4)).items.iter().filter(|item| item.tab_stop).count();
        assert_eq!(stops, 1);
    }

    #[test]
    fn checked_marks_only_the_selected_item() {
        let v = view(&RatingProps::new(4).with_value(2), 0, None);
        let checked: Vec<bool> = v.items.iter().map(|item| item.checked).collect();
        assert_eq!(checked, [false, true, false, false]);
    }

    #[test]
    fn tooltips_exist_only_for_labelled_items() {
        let props = RatingProps::new(5).with_tooltips(["Bad", "OK", "Good"], true);
        let v = view(&props, 2, None);
        assert!(v.items[3].tooltip.is_none());
        assert!(v.items[4].tooltip.is_none());
        let (item, tip) = v.visible_tooltip().expect("tooltip visible");
        assert_eq!(item.index, 1);
        assert_eq!(tip.text, "OK");
        assert_eq!(tip.id, "tooltip-1");
        assert_eq!(v.items[0].described_by.as_deref(), Some("tooltip-0"));
    }

    #[test]
    fn tooltips_stay_hidden_when_display_is_off() {
        let props = RatingProps::new(3).with_tooltips(["Bad", "OK", "Good"], false);
        let v = view(&props, 2, None);
        assert!(v.visible_tooltip().is_none());
        assert!(v.items[1].tooltip.is_some());
        assert!(v.items[1].described_by.is_none());
    }

    #[test]
    fn custom_path_replaces_star_shape() {
        let props = RatingProps::new(2).with_custom_svg_path("M0 0h24v24H0z");
        let v = view(&props, 0, None);
        assert_eq!(v.items[0].icon.path_data(), "M0 0h24v24H0z");
        assert_eq!(view(&RatingProps::new(1), 0, None).items[0].icon.path_data(), DEFAULT_STAR_PATH);
    }

    #[test]
    fn derive_is_idempotent() {
        let props = RatingProps::new(5).with_value(2).with_tooltips(["a", "b"], true);
        let state = InteractionState {
            hovered: 2,
            focused_index: Some(3),
        };
        assert_eq!(RatingView::derive(&props, &state), RatingView::derive(&props, &state));
    }
}
