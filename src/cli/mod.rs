pub mod check;
pub mod completions;
pub mod generate;
pub mod list;

use clap::{Parser, Subcommand};

/// gltypes - WebGL type registry generator
#[derive(Parser, Debug)]
#[command(name = "gltypes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the TYPE_INFO / TYPE_CODES artifact
    Generate(generate::GenerateArgs),

    /// Check a JSON artifact against constants dumped from a live context
    Check(check::CheckArgs),

    /// Print the registry, one type per line
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
