pub mod build;
pub mod completions;
pub mod list;
pub mod validate;

use clap::{Parser, Subcommand};

/// iconsprite - SVG sprite sheet compiler
#[derive(Parser, Debug)]
#[command(name = "iconsprite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile icons into the sprite sheet and name manifest
    Build(build::BuildArgs),

    /// List discovered icon identifiers
    List(list::ListArgs),

    /// Check that every icon parses, without writing output
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
