use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Scan { root, out } => {
            if !root.is_dir() {
                eprintln!("Error: '{}' is not a directory.", root.display());
                std::process::exit(2);
            }
            commands::handle_scan(cli.json, root, out)?;
        }
        Commands::Build {
            manifest,
            output_root,
            radius_filename,
        } => {
            if !manifest.is_file() {
                eprintln!("Error: manifest not found: {}", manifest.display());
                std::process::exit(2);
            }
            commands::handle_build(cli.json, manifest, output_root, radius_filename)?;
        }
    }
    Ok(())
}
