use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for streamflow
#[derive(Parser)]
#[command(
    name = "streamflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "Dump streamflow_data rows with dates as seconds since 1899-12-30",
    long_about = None
)]
pub struct Cli {
    /// Database to read from: a postgres:// URL, a "host=... user=..."
    /// string, or the path of a SQLite file
    #[arg(global = true, long = "db", value_name = "TARGET")]
    pub db: Option<String>,

    /// Only rows with date >= SINCE (YYYY-MM-DD or M/D/YYYY)
    #[arg(global = true, long = "since", value_name = "DATE")]
    pub since: Option<String>,

    /// Use this configuration file instead of ~/.streamflow/streamflow.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every row as <date>\t<seconds since epoch>\t<value> (default)
    Dump,

    /// Convert dates to seconds and serial days since the 1899-12-30 epoch
    Epoch {
        /// Dates or date-times (YYYY-MM-DD, "YYYY-MM-DD HH:MM:SS", M/D/YYYY),
        /// or a number of seconds since the epoch to convert back
        #[arg(required = true, allow_negative_numbers = true)]
        dates: Vec<String>,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,

        #[arg(long, short = 'f', requires = "init", help = "Overwrite an existing file")]
        force: bool,
    },
}
