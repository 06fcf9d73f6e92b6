//! Terminal User Interface module.
//!
//! This module provides the TUI for the catalog browser, including:
//! - Main event loop (`run`)
//! - Key and mouse input handling
//! - Rendering for the browse screen and its overlays
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Key and mouse input handling
//! - `render` - Screen layout and overlay dispatch
//! - `navbar` - Brand and section bar
//! - `banner` - Hero banner for the active title
//! - `rows` - Category carousels
//! - `player` - Playback overlay
//! - `help` - Keybinding overlay
//! - `status` - Status bar widget

mod banner;
mod help;
mod input;
mod loop_runner;
mod navbar;
mod player;
mod render;
mod rows;
mod status;

// Re-export the public API
pub use loop_runner::{run, Action};
