//! Icon rendering for rating items.
//!
//! Hosts override the icon with a factory that receives the item index, the
//! computed size and the computed fill color, and returns the span to draw.
//! No element cloning or prop injection is involved: the factory builds the
//! icon from scratch every frame.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
};
use starling_rating::IconShape;

/// Glyph standing in for the default star path.
pub const STAR_GLYPH: &str = "★";
/// Glyph standing in for caller-supplied path data, which a terminal cannot draw.
pub const PATH_GLYPH: &str = "◆";

/// Everything an icon factory gets to know about the item it draws.
#[derive(Debug, Clone, Copy)]
pub struct IconRequest<'a> {
    pub index: usize,
    /// Item size in pixels, as configured.
    pub size: u16,
    /// Cell area the icon will be centered in.
    pub area: Rect,
    /// Computed fill color.
    pub color: Color,
    pub shape: &'a IconShape,
    /// Accessible label, e.g. "Rate 2 stars".
    pub label: &'a str,
}

/// Render-prop contract for custom icons.
pub trait IconRenderer {
    fn render_icon(&self, request: &IconRequest<'_>) -> Span<'static>;
}

impl<F> IconRenderer for F
where
    F: Fn(&IconRequest<'_>) -> Span<'static>,
{
    fn render_icon(&self, request: &IconRequest<'_>) -> Span<'static> {
        self(request)
    }
}

/// Star glyph, or a diamond when the props carry custom path data.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultIcon;

impl IconRenderer for DefaultIcon {
    fn render_icon(&self, request: &IconRequest<'_>) -> Span<'static> {
        let glyph = match request.shape {
            IconShape::Star => STAR_GLYPH,
            IconShape::Path(_) => PATH_GLYPH,
        };
        Span::styled(glyph, Style::default().fg(request.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(shape: &IconShape) -> IconRequest<'_> {
        IconRequest {
            index: 2,
            size: 24,
            area: Rect::new(0, 0, 3, 1),
            color: Color::Yellow,
            shape,
            label: "Rate 3 stars",
        }
    }

    #[test]
    fn default_icon_picks_glyph_by_shape() {
        let star = DefaultIcon.render_icon(&request(&IconShape::Star));
        assert_eq!(star.content, STAR_GLYPH);
        assert_eq!(star.style.fg, Some(Color::Yellow));

        let path = IconShape::Path("M0 0".into());
        assert_eq!(DefaultIcon.render_icon(&request(&path)).content, PATH_GLYPH);
    }

    #[test]
    fn closures_act_as_icon_factories() {
        let factory = |request: &IconRequest<'_>| Span::raw(format!("{}", request.index + 1));
        assert_eq!(factory.render_icon(&request(&IconShape::Star)).content, "3");
    }
}
