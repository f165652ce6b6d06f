use clap::Parser;
use gltypes::cli::{Cli, Commands};
use gltypes::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => gltypes::cli::generate::run(args, &printer)?,
        Commands::Check(args) => gltypes::cli::check::run(args, &printer)?,
        Commands::List(args) => gltypes::cli::list::run(args, &printer)?,
        Commands::Completions(args) => gltypes::cli::completions::run(args)?,
    }

    Ok(())
}
