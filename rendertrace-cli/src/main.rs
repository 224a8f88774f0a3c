//! rendertrace CLI - platform probe and sample emission.
//!
//! This binary shows which tracing paths the library picks on this host and
//! can push a sample of every record kind through them, which is handy for
//! checking that a log viewer or trace tool is picking them up.

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rendertrace::platform::{OsFamily, OsVersion};

use commands::common::PlatformOverride;
use commands::config::ConfigCommands;
use commands::emit::MAX_SAMPLE_SIGNPOSTS;

#[derive(Parser)]
#[command(name = "rendertrace")]
#[command(version = rendertrace::VERSION)]
#[command(about = "Inspect and exercise rendertrace instrumentation", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.rendertrace/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretend to run on this OS family (ios, macos, other)
    #[arg(long, global = true)]
    family: Option<OsFamily>,

    /// Pretend to run on this OS release (e.g. 9.3)
    #[arg(long, global = true)]
    os_version: Option<OsVersion>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the detected platform and the path chosen for each facility
    Probe,

    /// Emit sample logs, activities, signposts and a backtrace
    Emit {
        /// Number of signpost intervals to emit
        #[arg(
            long,
            default_value = "3",
            value_parser = clap::value_parser!(u32).range(..=MAX_SAMPLE_SIGNPOSTS)
        )]
        signposts: u32,

        /// Skip writing the log file and stdout subscriber
        #[arg(long)]
        no_subscriber: bool,
    },

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();
    let overrides = PlatformOverride {
        family: cli.family,
        os_version: cli.os_version,
    };

    let result = match cli.command {
        Commands::Probe => commands::probe::run(cli.config.as_deref(), overrides),
        Commands::Emit {
            signposts,
            no_subscriber,
        } => commands::emit::run(cli.config.as_deref(), overrides, signposts, !no_subscriber),
        Commands::Config(command) => commands::config::run(cli.config.as_deref(), command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
