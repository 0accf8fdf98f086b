//! Command-line entry point for the Pig Latin translator

use clap::Parser;
use piglatin_cli::commands::TranslateArgs;
use piglatin_cli::CliResult;

fn main() -> CliResult<()> {
    TranslateArgs::parse().execute()
}
