//! Terminal rendering of the star rating control.

mod icon;
mod input;
mod layout;
mod rating_component;
mod state;

pub use icon::{DefaultIcon, IconRenderer, IconRequest, PATH_GLYPH, STAR_GLYPH};
pub use input::map_key;
pub use layout::{CellMetrics, PIXELS_PER_COLUMN, PIXELS_PER_ROW};
pub use rating_component::RatingComponent;
pub use state::RatingState;
