//! countrysearch — Command-line interface for countrysearch-core
//!
//! Usage examples
//! --------------
//!
//! - Show dataset stats
//!   $ countrysearch stats
//!
//! - List all countries
//!   $ countrysearch countries
//!
//! - Print suggestions for a query (matches names and capitals)
//!   $ countrysearch search par
//!
//! - Show details for a country (case-insensitive)
//!   $ countrysearch show france
//!
//! - Interactive autosuggest session
//!   $ countrysearch interactive
//!
//! Data source
//! -----------
//!
//! By default the dataset compiled into `countrysearch-core` is used. Pass
//! `--input <path>` to load a `.json` or `.json.gz` file with the same shape.
mod args;
mod logging;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use countrysearch_cli::{commands, TerminalAutosuggest};
use countrysearch_core::prelude::*;
use std::io;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logging(args.verbose)?;

    let owned;
    let dataset: &Dataset = match &args.input {
        Some(path) => {
            owned = Dataset::load_from_path(path)?;
            &owned
        }
        None => Dataset::load()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::Stats => commands::write_stats(&mut out, dataset)?,

        Commands::Countries => commands::write_countries(&mut out, dataset)?,

        Commands::Search { query } => commands::write_search(&mut out, dataset, &query)?,

        Commands::Show { name } => {
            if !commands::write_show(&mut out, dataset, &name)? {
                eprintln!("No country found for: {name}");
            }
        }

        Commands::Interactive { placeholder } => {
            let mut config = SearchBarConfig::default();
            if let Some(placeholder) = placeholder {
                config.placeholder = placeholder;
            }
            let mut bar = SearchBar::with_config(dataset, config);
            let stdin = io::stdin();
            let mut term = TerminalAutosuggest::new(stdin.lock(), out);
            term.run(&mut bar)?;
        }
    }

    Ok(())
}
