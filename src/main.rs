use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tallysort::cli::{Cli, Commands, OutputFormat};
use tallysort::commands::sort::{handle_sort, SortConfig};
use tallysort::formatting::FormattingConfig;

// Main orchestrator function
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort {
            values,
            format,
            output,
            diagram,
            no_diagram,
            plain,
        } => handle_sort(build_sort_config(
            values, format, output, diagram, no_diagram, plain,
        )),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

// Pure function to build the sort configuration
fn build_sort_config(
    values: Vec<String>,
    format: OutputFormat,
    output: Option<PathBuf>,
    diagram: Option<PathBuf>,
    no_diagram: bool,
    plain: bool,
) -> SortConfig {
    SortConfig {
        values,
        format: format.into(),
        output,
        diagram,
        no_diagram,
        formatting: create_formatting_config(plain),
    }
}
