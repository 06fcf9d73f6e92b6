//! Utility functions for common operations.
//!
//! This module provides reusable utilities for:
//!
//! - **Text fitting**: Unicode-aware width calculation, truncation and centering
//!   for fixed-size carousel cells
//! - **Video references**: validation and embed URL construction
//!
//! # Examples
//!
//! ```
//! use marquee::util::{display_width, embed_url, truncate_to_width};
//!
//! let url = embed_url("dQw4w9WgXcQ").unwrap();
//! assert_eq!(url.host_str(), Some("www.youtube.com"));
//!
//! assert_eq!(display_width("Hola"), 4);
//! assert_eq!(truncate_to_width("The Long Goodbye", 10), "The Lon...");
//! ```

mod text;
mod video;

pub use text::{center_to_width, display_width, truncate_to_width};
pub use video::{embed_url, validate_url_for_open, VideoRefError};
