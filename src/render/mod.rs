//! Artifact rendering for iconsprite.
//!
//! This module turns discovered icons into the two generated artifacts:
//! the sprite sheet of `<symbol>` fragments and the identifier manifest.

mod names;
mod sprite;
mod symbol;

pub use names::render_names;
pub use sprite::{build_sprite, transform_icon};
pub use symbol::to_symbol;
