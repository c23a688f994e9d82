//! CLI for the hardoc endpoint documentation generator.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use hardoc_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_generate, run_resolve, run_routes};

/// Top-level CLI for the hardoc documentation generator.
#[derive(Debug, Parser)]
#[command(name = "hardoc")]
#[command(about = "hardoc: endpoint documentation from HAR captures", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Generate Markdown endpoint documentation from a HAR capture.
    Generate {
        /// Path to the HAR file.
        har: PathBuf,

        /// Path to the TOML route table describing the application's URLs.
        #[arg(long, value_name = "PATH")]
        routes: PathBuf,

        /// Write output to this file instead of stdout.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Qualify view names with their module path.
        #[arg(long)]
        include_module: bool,

        /// Skip requests with no matching route instead of aborting.
        #[arg(long)]
        skip_unresolved: bool,
    },

    /// Resolve a single URL path and print the matching view.
    Resolve {
        /// URL path to resolve, e.g. `/api/users/42/`.
        path: String,

        /// Path to the TOML route table.
        #[arg(long, value_name = "PATH")]
        routes: PathBuf,
    },

    /// List the route table: display template, kind, and view per route.
    Routes {
        /// Path to the TOML route table.
        #[arg(long, value_name = "PATH")]
        routes: PathBuf,
    },

    /// Print a shell completion script to stdout.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Generate {
                har,
                routes,
                output,
                include_module,
                skip_unresolved,
            } => run_generate(
                &cfg,
                &har,
                &routes,
                output.as_deref(),
                include_module,
                skip_unresolved,
            )?,
            CliCommand::Resolve { path, routes } => run_resolve(&routes, &path)?,
            CliCommand::Routes { routes } => run_routes(&routes)?,
            CliCommand::Completions { shell } => run_completions(shell, &mut Cli::command()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
