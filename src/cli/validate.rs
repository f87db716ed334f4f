//! Validate command implementation.
//!
//! Runs discovery and the per-icon transform without writing any output,
//! reporting every file that fails.

use std::path::PathBuf;

use clap::Args;
use rayon::prelude::*;

use crate::discovery::scan_directory;
use crate::error::{Result, SpriteError};
use crate::output::{display_path, plural, Printer};
use crate::render::transform_icon;

/// Check that every icon parses, without writing output
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Directory scanned recursively for .svg icon sources
    #[arg(long, short, default_value = "src/assets/icons")]
    pub input: PathBuf,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let entries = scan_directory(&args.input);

    if entries.is_empty() {
        printer.info(
            "Empty",
            &format!("no icons in {}", display_path(&args.input)),
        );
        return Ok(());
    }

    let failures: Vec<SpriteError> = entries
        .par_iter()
        .filter_map(|entry| transform_icon(&args.input, entry).err())
        .collect();

    for err in &failures {
        printer.error("Invalid", &err.to_string());
    }

    if !failures.is_empty() {
        return Err(SpriteError::Validation {
            message: format!("{} failed to validate", plural(failures.len(), "icon", "icons")),
            help: Some("fix or remove the listed files and re-run".to_string()),
        });
    }

    printer.status("Validated", &plural(entries.len(), "icon", "icons"));
    Ok(())
}
