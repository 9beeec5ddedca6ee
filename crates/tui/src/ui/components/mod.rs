//! UI components: the rating control and the demo host around it.

pub mod component;
pub mod rating;

pub use component::Component;
pub use rating::RatingComponent;

use ratatui::layout::{Position, Rect};

/// Index of the target rect under the pointer, if the pointer is inside
/// `container` at all.
pub fn find_target_index_by_mouse_position(container: &Rect, targets: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    targets.iter().position(|rect| rect.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_testing_respects_container_and_targets() {
        let container = Rect::new(0, 0, 10, 3);
        let targets = [Rect::new(0, 1, 3, 1), Rect::new(4, 1, 3, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &targets, 5, 1), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &targets, 3, 1), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &targets, 5, 5), None);
    }
}
