use crate::domain::models::ScanReport;
use crate::services::scanner::{self, ScanOptions};
use crate::services::{manifest, output};
use std::path::Path;

pub fn handle_scan(json: bool, root: &Path, out: &Path) -> anyhow::Result<()> {
    let scanned = scanner::scan(root, &ScanOptions::default())?;
    manifest::write(&scanned, out)?;

    let spherical = scanned
        .results
        .iter()
        .filter(|r| r.exclusively_spherical)
        .count();
    if json {
        let report = ScanReport {
            root: root.display().to_string(),
            manifest_path: out.display().to_string(),
            candidates: scanned.results.len(),
            exclusively_spherical: spherical,
            results: scanned.results,
        };
        return output::print_json(report);
    }

    println!("\nFolders with exclusively spherical geometries:");
    println!("{}", "-".repeat(60));
    if spherical == 0 {
        println!("(none)\n");
    }
    for rec in scanned
        .results
        .iter()
        .filter(|r| r.exclusively_spherical)
    {
        println!("{}", rec.openmc_dir);
        let rads = rec.radii.as_deref().unwrap_or_default();
        let rendered: Vec<String> = rads.iter().map(|r| format!("{}", r)).collect();
        println!(
            "  Shell radii (sorted): {}",
            if rendered.is_empty() {
                "(none)".to_string()
            } else {
                rendered.join(", ")
            }
        );
        println!();
    }
    println!("Saved manifest to {}", out.display());
    Ok(())
}
