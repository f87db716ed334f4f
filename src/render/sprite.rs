//! Sprite sheet assembly.
//!
//! Reads every discovered icon, transforms each one into a `<symbol>`
//! fragment and wraps the fragments in a single `<svg><defs>` document.
//! Per-icon work fans out across threads; the join preserves discovery
//! order because fragment order determines the output bytes.

use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::discovery::IconEntry;
use crate::error::{Result, SpriteError};
use crate::render::symbol::to_symbol;

const XML_DECLARATION: &str = "<?xml version='1.0' encoding='UTF-8'?>";
const SPRITE_OPEN: &str = "<svg xmlns='http://www.w3.org/2000/svg' xmlns:xlink='http://www.w3.org/1999/xlink' width='0' height='0'>";
const SPRITE_CLOSE: &str = "</svg>";
// Symbols go in <defs>: they are definitions, not rendered content.
const DEFS_OPEN: &str = "<defs>";
const DEFS_CLOSE: &str = "</defs>";

/// Assemble the sprite document for the given icons, in entry order.
pub fn build_sprite(root: &Path, entries: &[IconEntry]) -> Result<String> {
    let symbols: Vec<String> = entries
        .par_iter()
        .map(|entry| transform_icon(root, entry))
        .collect::<Result<_>>()?;

    let mut lines = Vec::with_capacity(symbols.len() + 5);
    lines.push(XML_DECLARATION.to_string());
    lines.push(SPRITE_OPEN.to_string());
    lines.push(DEFS_OPEN.to_string());
    lines.extend(symbols);
    lines.push(DEFS_CLOSE.to_string());
    lines.push(SPRITE_CLOSE.to_string());

    Ok(lines.join("\n"))
}

/// Read and transform a single icon source.
pub fn transform_icon(root: &Path, entry: &IconEntry) -> Result<String> {
    let path = entry.source_path(root);
    let source = fs::read_to_string(&path).map_err(|e| SpriteError::Io {
        path: path.clone(),
        message: format!("failed to read icon: {e}"),
    })?;

    to_symbol(&source, &entry.name).map_err(|err| match err {
        SpriteError::Parse { message, help } => SpriteError::Parse {
            message: format!("{}: {message}", entry.rel),
            help,
        },
        other => other,
    })
}
