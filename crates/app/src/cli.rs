//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "timenow", version, about, long_about = None)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Path to a config file. When omitted, timenow.toml in the working directory is used if present."
    )]
    pub config: Option<PathBuf>,
    /// Provider namespace the data source registers under.
    #[arg(long, value_name = "NAME")]
    pub provider: Option<String>,
    /// Log level used when RUST_LOG is not set.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
    /// Report this instant instead of reading the system clock.
    #[arg(long, value_name = "RFC3339")]
    pub at: Option<String>,
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cmd {
    /// Answer an external data source query on stdin with string values on stdout.
    #[default]
    Read,
    /// Print the typed state as JSON.
    State,
    /// Print the type name and schema as JSON.
    Schema,
}
