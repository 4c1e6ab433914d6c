//! smellbook CLI - browse the smell and refactoring catalog.
//!
//! ```bash
//! # List the cataloged smells
//! smellbook smells
//!
//! # List refactorings, optionally one group
//! smellbook refactorings
//! smellbook refactorings --group conditionals
//!
//! # Everything a smell knows about itself, as JSON
//! smellbook show data_clumps --format json
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use smellbook::catalog::{
    format_catalog_summary, refactorings, smells, Refactoring, Smell,
};

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Browse the code smell and refactoring catalog.
#[derive(Parser)]
#[command(name = "smellbook", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: Format,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the cataloged smells.
    Smells,
    /// List the cataloged refactorings.
    Refactorings {
        /// Only one group, by module name (e.g. "conditionals")
        #[arg(long)]
        group: Option<String>,
    },
    /// Show one smell in detail: category, summary, remedies.
    Show {
        /// Smell name in snake_case (e.g. "data_clumps")
        name: String,
    },
}

// =============================================================================
// OUTPUT RECORDS
// =============================================================================

#[derive(Serialize)]
struct SmellRecord {
    name: &'static str,
    category: String,
    summary: &'static str,
    remedies: Vec<&'static str>,
}

impl From<&Smell> for SmellRecord {
    fn from(smell: &Smell) -> Self {
        Self {
            name: smell.name(),
            category: smell.category().to_string(),
            summary: smell.summary(),
            remedies: smell.remedies().iter().map(Refactoring::name).collect(),
        }
    }
}

#[derive(Serialize)]
struct RefactoringRecord {
    name: &'static str,
    group: String,
}

impl From<&Refactoring> for RefactoringRecord {
    fn from(refactoring: &Refactoring) -> Self {
        Self {
            name: refactoring.name(),
            group: refactoring.group().module().to_string(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize catalog entry")
}

// =============================================================================
// COMMANDS
// =============================================================================

fn run_smells(format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for smell in smells() {
                println!("{:24} [{}] {}", smell.name(), smell.category(), smell.summary());
            }
        }
        Format::Json => {
            let records: Vec<SmellRecord> = smells().iter().map(SmellRecord::from).collect();
            println!("{}", to_json(&records)?);
        }
    }
    Ok(())
}

fn run_refactorings(group: Option<&str>, format: Format) -> Result<()> {
    let selected: Vec<&Refactoring> = refactorings()
        .iter()
        .filter(|r| group.map_or(true, |g| r.group().module() == g))
        .collect();
    if selected.is_empty() {
        bail!("no refactoring group named {:?}", group.unwrap_or(""));
    }

    match format {
        Format::Text => {
            for refactoring in selected {
                println!("{:16} {}", refactoring.group().module(), refactoring.name());
            }
        }
        Format::Json => {
            let records: Vec<RefactoringRecord> =
                selected.into_iter().map(RefactoringRecord::from).collect();
            println!("{}", to_json(&records)?);
        }
    }
    Ok(())
}

fn run_show(name: &str, format: Format) -> Result<()> {
    let Some(smell) = smells().iter().find(|s| s.name() == name) else {
        bail!(
            "no smell named {:?}; run `smellbook smells` for the catalog",
            name
        );
    };

    match format {
        Format::Text => {
            println!("{}", smell.name());
            println!("  category: {} ({})", smell.category(), smell.category().description());
            println!("  summary:  {}", smell.summary());
            println!("  remedies:");
            for remedy in smell.remedies() {
                println!("    - {} ({})", remedy.name(), remedy.group().module());
            }
        }
        Format::Json => {
            println!("{}", to_json(&SmellRecord::from(smell))?);
        }
    }
    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        None => {
            print!("{}", format_catalog_summary());
            Ok(())
        }
        Some(Commands::Smells) => run_smells(cli.format),
        Some(Commands::Refactorings { group }) => {
            run_refactorings(group.as_deref(), cli.format)
        }
        Some(Commands::Show { name }) => run_show(&name, cli.format),
    }
}
