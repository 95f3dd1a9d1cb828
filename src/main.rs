//! aex binary entry point.

mod commands;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use aex::cli::{Cli, Commands, ConfigAction};
use aex::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // A broken config must not prevent startup; handlers surface it
    let config = Config::load().unwrap_or_default();
    init_tracing(cli.verbose, &config);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Extract {
            abi_file,
            target_file,
            force,
        } => commands::extract::handle_extract(&abi_file, &target_file, force),
        Commands::Summary { target_file } => commands::summary::handle_summary(&target_file),
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => commands::config::handle_show()?,
                ConfigAction::Edit => commands::config::handle_edit()?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Route log output to stderr so stdout stays parseable.
fn init_tracing(verbose: bool, config: &Config) {
    let default_filter = if verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
