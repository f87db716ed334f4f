use clap::Parser;
use iconsprite::cli::{Cli, Commands};
use iconsprite::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => iconsprite::cli::build::run(args, &printer)?,
        Commands::List(args) => iconsprite::cli::list::run(args, &printer)?,
        Commands::Validate(args) => iconsprite::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => iconsprite::cli::completions::run(args)?,
    }

    Ok(())
}
