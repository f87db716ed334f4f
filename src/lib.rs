//! iconsprite - SVG sprite sheet compiler
//!
//! A library for compiling a directory of individual SVG icons into one
//! sprite sheet of `<symbol>` fragments plus a manifest of the valid icon
//! names for compile-time checking downstream.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod render;

pub use discovery::{scan_directory, IconEntry, ICON_EXTENSION};
pub use error::{Result, SpriteError};
pub use output::{display_path, plural, write_if_changed, Printer};
pub use render::{build_sprite, render_names, to_symbol, transform_icon};
