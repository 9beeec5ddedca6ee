//! # Starling rating
//!
//! A framework-agnostic star rating control. It owns only transient
//! interaction state (hovered item, focused item) and derives everything
//! else from caller-supplied [`RatingProps`]:
//!
//! - per-item fill, hover, focus and tab-stop state ([`RatingView`])
//! - an ARIA-style semantics tree with a polite live status region
//! - [`Effect`]s for the host: rating changes and focus moves
//!
//! Hosts translate their input events into [`RatingControl`] calls and draw
//! the derived view. See `starling-tui` for the terminal host.

pub mod a11y;
mod control;
pub mod keys;
mod props;
mod state;
pub mod view;

pub use control::{Effect, KeyOutcome, RatingControl};
pub use keys::{FocusDirection, Key};
pub use props::{
    ChangeHandler, DEFAULT_ACTIVE_COLOR, DEFAULT_GAP, DEFAULT_INACTIVE_COLOR, DEFAULT_SIZE, Direction, PropsError, RatingProps, TabBehavior,
};
pub use state::InteractionState;
pub use view::{IconShape, ItemView, RatingView, TooltipView};
