//! Configuration management CLI commands.

use std::path::Path;

use clap::Subcommand;
use rendertrace::config::{config_file_path, TraceConfig};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Print the effective configuration as INI
    Show,

    /// Write a default configuration file if none exists
    Init,
}

/// Run a config subcommand.
pub fn run(config_path: Option<&Path>, command: ConfigCommands) -> Result<(), CliError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path);

    match command {
        ConfigCommands::Path => {
            println!("{}", path.display());
        }
        ConfigCommands::Show => {
            let config = TraceConfig::load_from(&path)?;
            print!("{}", config.to_config_string());
        }
        ConfigCommands::Init if path.exists() => {
            println!("Config already exists: {}", path.display());
        }
        ConfigCommands::Init => {
            let created = match config_path {
                Some(p) => {
                    TraceConfig::default().save_to(p)?;
                    p.to_path_buf()
                }
                None => TraceConfig::ensure_exists()?,
            };
            println!("Created {}", created.display());
        }
    }

    Ok(())
}
