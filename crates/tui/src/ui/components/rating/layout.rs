//! Cell geometry for the rating control.
//!
//! Props carry pixel sizes; terminals lay out in cells. One column is taken
//! as 8 px and one row as 16 px, rounding up so that any positive size keeps
//! at least one cell.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use starling_rating::Direction;

pub const PIXELS_PER_COLUMN: u16 = 8;
pub const PIXELS_PER_ROW: u16 = 16;

/// Cell sizes derived from the pixel props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    /// Columns per item.
    pub item_width: u16,
    /// Cells between items along the layout axis.
    pub gap: u16,
}

impl CellMetrics {
    pub fn new(size: u16, gap: u16, direction: Direction) -> Self {
        let gap_unit = match direction {
            Direction::Horizontal => PIXELS_PER_COLUMN,
            Direction::Vertical => PIXELS_PER_ROW,
        };
        Self {
            item_width: size.div_ceil(PIXELS_PER_COLUMN).max(1),
            gap: gap.div_ceil(gap_unit),
        }
    }

    /// Cells spanned by `count` items along the layout axis.
    pub fn run_length(&self, count: usize, direction: Direction) -> u16 {
        let count = u16::try_from(count).unwrap_or(u16::MAX);
        let item = match direction {
            Direction::Horizontal => self.item_width,
            Direction::Vertical => 1,
        };
        item.saturating_mul(count)
            .saturating_add(self.gap.saturating_mul(count.saturating_sub(1)))
    }
}

/// Inner regions of the control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlAreas {
    pub items: Rect,
    /// Lane reserved for the tooltip; above the items or to their right.
    pub tooltip_lane: Rect,
    pub status: Rect,
}

/// Rows the control needs inside its block for `count` items.
pub fn inner_height(count: usize, direction: Direction, metrics: CellMetrics) -> u16 {
    match direction {
        // tooltip lane + items + status
        Direction::Horizontal => 3,
        Direction::Vertical => metrics.run_length(count, direction).saturating_add(1),
    }
}

/// Splits the inner area into item, tooltip and status regions.
pub fn control_areas(inner: Rect, count: usize, direction: Direction, metrics: CellMetrics) -> ControlAreas {
    match direction {
        Direction::Horizontal => {
            let [tooltip_lane, items, status] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)]).areas(inner);
            ControlAreas {
                items,
                tooltip_lane,
                status,
            }
        }
        Direction::Vertical => {
            let run = metrics.run_length(count, direction);
            let [body, status] = Layout::vertical([Constraint::Length(run), Constraint::Length(1)]).areas(inner);
            let [items, tooltip_lane] = Layout::horizontal([Constraint::Length(metrics.item_width), Constraint::Min(0)])
                .spacing(1)
                .areas(body);
            ControlAreas {
                items,
                tooltip_lane,
                status,
            }
        }
    }
}

/// One rect per item, packed from the start of `area` with gap spacing.
pub fn item_rects(area: Rect, count: usize, direction: Direction, metrics: CellMetrics) -> Vec<Rect> {
    let layout = match direction {
        Direction::Horizontal => Layout::horizontal(vec![Constraint::Length(metrics.item_width); count]),
        Direction::Vertical => Layout::vertical(vec![Constraint::Length(1); count]),
    };
    layout.spacing(metrics.gap).flex(Flex::Start).split(area).to_vec()
}

/// Tooltip placement for the item at `item`, clipped to `lane`.
pub fn tooltip_rect(item: Rect, text_width: u16, direction: Direction, lane: Rect) -> Rect {
    let width = text_width.saturating_add(2).min(lane.width);
    let placed = match direction {
        Direction::Horizontal => {
            let center = item.x.saturating_add(item.width / 2);
            let max_x = lane.right().saturating_sub(width);
            let x = center.saturating_sub(width / 2).clamp(lane.x, max_x.max(lane.x));
            Rect::new(x, lane.y, width, 1)
        }
        Direction::Vertical => Rect::new(lane.x, item.y, width, 1),
    };
    placed.intersection(lane)
}
