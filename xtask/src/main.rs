//! Development tasks for aex.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_mangen::Man;

use aex::cli::Cli;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Development tasks for aex")]
enum Xtask {
    /// Generate man pages from the CLI definitions
    Man {
        /// Output directory for the generated pages
        #[arg(default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse() {
        Xtask::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = Cli::command();
    render_page(out_dir, cmd.get_name().to_string(), cmd.clone())?;

    for sub in cmd.get_subcommands() {
        if sub.is_hide_set() {
            continue;
        }
        let name = format!("{}-{}", cmd.get_name(), sub.get_name());
        render_page(out_dir, name, sub.clone())?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn render_page(out_dir: &Path, name: String, cmd: clap::Command) -> Result<()> {
    let man = Man::new(cmd);
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer)?;

    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
