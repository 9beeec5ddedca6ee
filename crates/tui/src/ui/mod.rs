//! User interface: components, the top-level view, themes and the runtime.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
