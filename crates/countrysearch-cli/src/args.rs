use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for countrysearch
#[derive(Debug, Parser)]
#[command(
    name = "countrysearch",
    version,
    about = "Search countries by name or capital and inspect their details"
)]
pub struct CliArgs {
    /// Path to a dataset (.json or .json.gz); defaults to the bundled list
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List all countries with their capitals
    Countries,

    /// Print the suggestions for a query (name or capital, case-insensitive)
    Search {
        query: String,
    },

    /// Show the detail panel for a country by name
    Show {
        name: String,
    },

    /// Run an interactive autosuggest session on stdin/stdout
    Interactive {
        /// Placeholder shown while the input is empty
        #[arg(long)]
        placeholder: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let args = CliArgs::try_parse_from(["countrysearch", "search", "par", "-vv", "-i", "x.json"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("x.json")));
        assert!(matches!(args.command, Commands::Search { ref query } if query == "par"));
    }

    #[test]
    fn interactive_placeholder_is_optional() {
        let args = CliArgs::try_parse_from(["countrysearch", "interactive"]).unwrap();
        assert!(matches!(args.command, Commands::Interactive { placeholder: None }));
    }
}
