//! `bindsheet` - keybinding cheatsheet renderer
//!
//! This library decodes a JSON description of keybindings from a hotkey
//! daemon and renders it as a static HTML page with fixed CSS class hooks.

pub mod cli;
pub mod error;
pub mod model;
pub mod observability;
pub mod render;
