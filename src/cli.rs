//! Command-line interface definitions.
//!
//! Kept in the library so xtask can generate man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::version::version_string;

#[derive(Debug, Parser)]
#[command(
    name = "aex",
    about = "Extract and deduplicate smart-contract ABI events",
    version = Box::leak(version_string().into_boxed_str()) as &str
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract ABI events from a JSON file into a target document
    Extract {
        /// Path to the source ABI JSON file
        abi_file: PathBuf,

        /// Path to the target file accumulating deduplicated events
        target_file: PathBuf,

        /// Replace the stored events instead of merging (disables the unique check)
        #[arg(short, long)]
        force: bool,
    },

    /// Show a summary of the events stored in a target file
    Summary {
        /// Path to the target file
        target_file: PathBuf,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show current configuration as TOML
    Show,
    /// Open the configuration file in the default editor
    Edit,
}
