use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_MANIFEST_PATH: &str = "spherical_results.json";

#[derive(Parser, Debug)]
#[command(
    name = "sphair",
    version,
    about = "Spherical geometry scanner and radius-tree builder"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk a directory tree, classify openmc geometries, write a scan manifest
    Scan {
        /// Root directory to walk
        root: PathBuf,
        #[arg(
            long,
            default_value = DEFAULT_MANIFEST_PATH,
            help = "Manifest destination path"
        )]
        out: PathBuf,
    },
    /// Rebuild a mirrored tree of radius files from a scan manifest
    Build {
        /// Manifest produced by a previous scan
        manifest: PathBuf,
        /// Root under which the mirrored tree is created
        output_root: PathBuf,
        #[arg(
            long,
            default_value = crate::domain::constants::DEFAULT_RADIUS_FILENAME,
            help = "Name of the per-directory radius file"
        )]
        radius_filename: String,
    },
}
