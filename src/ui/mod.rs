//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`render`] - Plain-text commit graph rendering
//! - [`output`] - Output formatting and verbosity handling

pub mod output;
pub mod render;
