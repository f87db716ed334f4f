//! List command implementation.
//!
//! Discovers icons and prints one identifier per line to stdout.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::scan_directory;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// List discovered icon identifiers
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory scanned recursively for .svg icon sources
    #[arg(long, short, default_value = "src/assets/icons")]
    pub input: PathBuf,

    /// Print relative source paths instead of identifiers
    #[arg(long)]
    pub paths: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let entries = scan_directory(&args.input);

    for entry in &entries {
        if args.paths {
            println!("{}", entry.rel);
        } else {
            println!("{}", entry.name);
        }
    }

    printer.info(
        "Icons",
        &format!(
            "{} in {}",
            plural(entries.len(), "icon", "icons"),
            display_path(&args.input)
        ),
    );

    Ok(())
}
