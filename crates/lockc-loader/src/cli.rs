//! Command-line interface definitions for `lockc-loader`.

use clap::{Parser, Subcommand};

/// Loads and attaches the lockc-rs policy engine to its kernel hooks.
#[derive(Parser)]
#[command(name = "lockc-loader", version, about)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (trace-level diagnostics from the eBPF
    /// program as well as the loader itself).
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Load the compiled eBPF object and attach it to every hook named
    /// in the loader config.
    Run(RunArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Parser)]
pub struct RunArgs {
    /// Path to the loader config (TOML). Never contains policy data —
    /// that is populated separately through the map handles this
    /// program exposes to the external collaborator.
    #[arg(long, default_value = "lockc-loader.toml")]
    pub config: std::path::PathBuf,
}
