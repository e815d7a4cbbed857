//! `openmeta`: convert open metadata property bags into typed beans.
//!
//! Reads instances as JSON, resolves their bean shape against a type
//! registry (the built-in catalog unless `--types` is given) and prints the
//! result as JSON.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use config::CliConfig;

/// Open metadata bean converter.
#[derive(Parser, Debug)]
#[command(name = "openmeta", about = "Open metadata bean converter")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// Type registry JSON (overrides the config file).
    #[arg(long = "types", global = true)]
    types: Option<PathBuf>,

    /// Service name reported in errors and logs (overrides the config file).
    #[arg(long = "service-name", global = true)]
    service_name: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert one instance into a bean.
    Convert {
        /// Which kind of instance the input holds.
        #[arg(long, value_enum)]
        kind: Kind,
        /// Instance JSON file, or `-` for stdin.
        #[arg(long)]
        input: String,
    },

    /// Show the lineage of a type and the bean shape it maps to.
    Resolve {
        /// Type name (e.g. DataFile).
        type_name: String,
    },

    /// Project specification property assignments.
    Specification {
        /// JSON array of related elements, or `-` for stdin.
        #[arg(long)]
        input: String,
    },

    /// Check the bean shapes against the type registry.
    Check,

    /// Write the effective configuration to the `--config` path.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Entity,
    Classification,
    Relationship,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if let Some(service_name) = cli.service_name {
        config.converter.service_name = service_name;
    }
    if let Some(types) = cli.types {
        config.types = Some(types);
    }

    let registry = || commands::load_registry(config.types.as_deref());

    match cli.command {
        Commands::Convert { kind, input } => {
            commands::convert::run(&registry()?, &config.converter, kind, &input)?;
        }
        Commands::Resolve { type_name } => {
            commands::resolve::run(&registry()?, &type_name)?;
        }
        Commands::Specification { input } => {
            commands::specification::run(&registry()?, &input)?;
        }
        Commands::Check => {
            commands::check::run(&registry()?)?;
        }
        Commands::Init { force } => {
            commands::init::run(&config, cli.config.as_deref(), force)?;
        }
    }

    Ok(())
}
