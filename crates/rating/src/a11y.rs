//! Accessibility labels and the semantics tree exposed by the control.
//!
//! The tree mirrors ARIA: a radio group container, one radio per item and a
//! polite live status region. Hosts that have an accessibility bridge walk
//! it; the terminal host prints it from `starling describe`.

use serde::Serialize;

/// Label of the radio group container.
pub const GROUP_LABEL: &str = "Star rating";

/// "1 star", "3 stars".
pub fn star_count(n: usize) -> String {
    if n == 1 { format!("{n} star") } else { format!("{n} stars") }
}

/// Descriptive label of the item with 1-based `rating`.
pub fn rate_label(rating: usize) -> String {
    format!("Rate {}", star_count(rating))
}

/// Live region text for the current value; empty while unset.
pub fn status_text(value: usize) -> String {
    if value > 0 {
        format!("Selected {}", star_count(value))
    } else {
        String::new()
    }
}

/// Element id of the tooltip attached to item `index`.
pub fn tooltip_id(index: usize) -> String {
    format!("tooltip-{index}")
}

/// High-level semantic role of a node, similar to ARIA roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    RadioGroup,
    Radio,
    Img,
    Tooltip,
    Status,
}

/// How assertively a live region is announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    Polite,
}

/// One node of the semantics tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemanticsNode {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Text content for leaf nodes such as the status region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    pub focused: bool,
    /// Disabled nodes stay in the tree but are marked not enabled.
    pub enabled: bool,
    /// `0` for the roving tab stop, `-1` for items reachable only by keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_index: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub described_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<Politeness>,
    /// Hidden nodes stay in the tree but are not presented visually.
    pub hidden: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SemanticsNode>,
}

impl SemanticsNode {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            id: None,
            label: None,
            text: None,
            checked: None,
            focused: false,
            enabled: true,
            tab_index: None,
            described_by: None,
            live: None,
            hidden: false,
            children: Vec::new(),
        }
    }

    /// Depth-first search for the first node with `role`.
    pub fn find(&self, role: Role) -> Option<&SemanticsNode> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(role))
    }

    /// All direct children with `role`.
    pub fn children_with(&self, role: Role) -> impl Iterator<Item = &SemanticsNode> {
        self.children.iter().filter(move |child| child.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_pluralizes() {
        assert_eq!(status_text(0), "");
        assert_eq!(status_text(1), "Selected 1 star");
        assert_eq!(status_text(3), "Selected 3 stars");
    }

    #[test]
    fn rate_label_pluralizes() {
        assert_eq!(rate_label(1), "Rate 1 star");
        assert_eq!(rate_label(2), "Rate 2 stars");
    }
}
