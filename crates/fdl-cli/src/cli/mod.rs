//! CLI for the FDL deep-link router.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fdl_core::config::{self, RouterConfig};
use fdl_core::DeepLinkHandler;
use std::path::{Path, PathBuf};

use commands::{run_classify, run_decompose, run_dispatch, run_open_file, run_ports};

/// Top-level CLI for the FDL deep-link router.
#[derive(Debug, Parser)]
#[command(name = "fdl")]
#[command(about = "FDL: deep-link router for the Flipper desktop client", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/fdl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify a deep link and print the intent as JSON.
    Classify {
        /// Deep link, e.g. flipper://clientA/pluginB/payload.
        uri: String,
    },

    /// Print the legacy <client>/<pluginId>/<payload> parts of a deep link, one per line.
    Decompose {
        /// Deep link to decompose.
        uri: String,
    },

    /// Dry run: print the store actions a deep link would dispatch.
    Dispatch {
        /// Deep link to apply.
        uri: String,
        /// Pretend the sign-in sheet is already shown.
        #[arg(long)]
        signed_in: bool,
    },

    /// Dry run: show what opening a file would import.
    OpenFile {
        /// Path of the file handed over by the OS.
        path: PathBuf,
    },

    /// Validate a port override (default: $FLIPPER_PORTS) and print the effective ports.
    Ports {
        /// Override in the form INSECURE,SECURE, e.g. 1111,2222.
        value: Option<String>,
    },
}

fn load_config(path: Option<&Path>) -> Result<RouterConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let handler = DeepLinkHandler::from_config(&cfg);

        match cli.command {
            CliCommand::Classify { uri } => run_classify(handler.router(), &uri)?,
            CliCommand::Decompose { uri } => run_decompose(handler.router(), &uri),
            CliCommand::Dispatch { uri, signed_in } => run_dispatch(&handler, &uri, signed_in)?,
            CliCommand::OpenFile { path } => run_open_file(&handler, path)?,
            CliCommand::Ports { value } => run_ports(&cfg, value)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
