//! fhevm-scaffold CLI: standalone projects and docs from the FHEVM examples hub.
//!
//! Provides four commands: `generate-example`, `generate-category`,
//! `generate-docs` and `list`. Each command is a thin wrapper over
//! [`fhevm_scaffold_core`]; this crate only parses arguments and prints.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use fhevm_scaffold_core::catalog::Catalog;
use fhevm_scaffold_core::config::{ScaffoldConfig, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "fhevm-scaffold",
    about = "Scaffold standalone FHEVM example projects and generate their documentation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to fhevm-scaffold.config.json (default: ./fhevm-scaffold.config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a standalone project for one example
    GenerateExample {
        /// Example name (prompts when omitted in a terminal)
        name: Option<String>,

        /// Output directory (default: output/<name>)
        output: Option<PathBuf>,
    },

    /// Generate one project containing every example of a category
    GenerateCategory {
        /// Category name
        category: String,

        /// Output directory (default: output/<category>-examples)
        output: Option<PathBuf>,
    },

    /// Generate Markdown documentation and update the docs index
    GenerateDocs {
        /// Example name
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        name: Option<String>,

        /// Generate docs for every example
        #[arg(long)]
        all: bool,
    },

    /// List available categories and examples
    List,
}

/// Build the clap command with the catalog listing appended to every `--help`.
fn command(catalog: &Catalog) -> clap::Command {
    let listing = catalog.listing();
    let mut cmd = Cli::command().after_help(listing.clone());
    let names: Vec<String> = cmd
        .get_subcommands()
        .map(|s| s.get_name().to_string())
        .collect();
    for name in names {
        let listing = listing.clone();
        cmd = cmd.mut_subcommand(name, move |sub| sub.after_help(listing));
    }
    cmd
}

fn main() -> anyhow::Result<()> {
    let catalog = Catalog::builtin();
    let matches = command(&catalog).get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => ScaffoldConfig::load_or_default(path, true)?,
        None => ScaffoldConfig::load_or_default(&PathBuf::from(DEFAULT_CONFIG_FILE), false)?,
    };

    match cli.command {
        Commands::GenerateExample { name, output } => {
            commands::example::run(&config, &catalog, name.as_deref(), output.as_deref())?;
        }
        Commands::GenerateCategory { category, output } => {
            commands::category::run(&config, &catalog, &category, output.as_deref())?;
        }
        Commands::GenerateDocs { name, all } => {
            commands::docs::run(&config, &catalog, name.as_deref(), all)?;
        }
        Commands::List => {
            commands::list::run(&catalog);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        let matches = command(&Catalog::builtin()).try_get_matches_from(args)?;
        Cli::from_arg_matches(&matches)
    }

    #[test]
    fn test_command_is_well_formed() {
        command(&Catalog::builtin()).debug_assert();
    }

    #[test]
    fn test_generate_example_args() {
        let cli = parse(&["fhevm-scaffold", "generate-example", "fhe-counter", "./out/c1"]).unwrap();
        match cli.command {
            Commands::GenerateExample { name, output } => {
                assert_eq!(name.as_deref(), Some("fhe-counter"));
                assert_eq!(output, Some(PathBuf::from("./out/c1")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "fhevm-scaffold",
            "generate-category",
            "basic",
            "-vv",
            "--config",
            "hub.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("hub.json")));
    }

    #[test]
    fn test_generate_docs_requires_name_or_all() {
        assert!(parse(&["fhevm-scaffold", "generate-docs"]).is_err());
        assert!(parse(&["fhevm-scaffold", "generate-docs", "fhe-counter", "--all"]).is_err());

        let cli = parse(&["fhevm-scaffold", "generate-docs", "--all"]).unwrap();
        assert!(matches!(cli.command, Commands::GenerateDocs { name: None, all: true }));
    }

    #[test]
    fn test_help_lists_catalog() {
        let mut cmd = command(&Catalog::builtin());
        let help = cmd
            .find_subcommand_mut("generate-category")
            .unwrap()
            .render_long_help()
            .to_string();
        assert!(help.contains("fhe-counter"));
        assert!(help.contains("Counter, encryption and decryption fundamentals"));
    }
}
