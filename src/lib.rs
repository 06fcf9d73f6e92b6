//! marquee, a terminal catalog browser.
//!
//! Titles are read from a JSON catalog, grouped into category rows, and
//! browsed through a `(category, title)` selection driven by keys, the mouse
//! wheel and clicks. The active title fills the banner and can be played in
//! an overlay.

pub mod app;
pub mod catalog;
pub mod config;
pub mod keybindings;
pub mod nav;
pub mod playback;
pub mod theme;
pub mod ui;
pub mod util;
