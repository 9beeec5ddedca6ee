//! Theme styling for the rating host.
//!
//! Palettes (Dracula, Nord, ANSI 256 fallback), semantic roles and helper
//! builders for ratatui widgets. Star fill colors come from the rating props;
//! the theme styles everything around them.

pub mod ansi256;
pub mod catalog;
pub mod dracula;
pub mod loader;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use dracula::DraculaTheme;
pub use loader::{LoadedTheme, load};
pub use nord::NordTheme;
pub use roles::Theme;
