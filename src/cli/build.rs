//! Build command implementation.
//!
//! Runs the full pipeline: discover icons, assemble the sprite sheet,
//! render the identifier manifest and write both artifacts if they changed.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{scan_directory, ICON_EXTENSION};
use crate::error::{Result, SpriteError};
use crate::output::{display_path, plural, write_if_changed, Printer};
use crate::render::{build_sprite, render_names};

/// Compile icons into the sprite sheet and name manifest
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory scanned recursively for .svg icon sources
    #[arg(long, short, default_value = "src/assets/icons")]
    pub input: PathBuf,

    /// Output path for the sprite sheet
    #[arg(long, default_value = "public/sprite.svg")]
    pub sprite: PathBuf,

    /// Output path for the generated identifier type
    #[arg(long, default_value = "src/lib/names.ts")]
    pub types: PathBuf,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let entries = scan_directory(&args.input);

    if entries.is_empty() {
        printer.info(
            "Empty",
            &format!(
                "no .{ICON_EXTENSION} files in {}, nothing to generate",
                display_path(&args.input)
            ),
        );
        return Ok(());
    }

    printer.info(
        "Generating",
        &format!(
            "sprite for {} ({})",
            display_path(&args.input),
            plural(entries.len(), "icon", "icons")
        ),
    );

    let sprite = build_sprite(&args.input, &entries)?;
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    let manifest = render_names(&names);

    write_artifact(&args.sprite, &sprite, printer)?;
    write_artifact(&args.types, &manifest, printer)?;

    printer.status(
        "Finished",
        &format!(
            "{} into {}",
            plural(entries.len(), "icon", "icons"),
            display_path(&args.sprite)
        ),
    );

    Ok(())
}

/// Write one output artifact, creating parent directories as needed.
fn write_artifact(path: &Path, content: &str, printer: &Printer) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| SpriteError::Io {
                path: parent.to_path_buf(),
                message: format!("failed to create output directory: {e}"),
            })?;
        }
    }

    if write_if_changed(path, content)? {
        printer.status("Writing", &display_path(path));
    } else {
        printer.info("Unchanged", &display_path(path));
    }

    Ok(())
}
