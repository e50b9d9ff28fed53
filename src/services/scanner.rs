use crate::domain::constants::{CANDIDATE_DIR_NAME, GEOMETRY_FILENAME};
use crate::domain::models::{GeometryScanResult, ScanManifest};
use crate::services::{geometry, radii};
use anyhow::Context;
use std::path::Path;
use walkdir::WalkDir;

/// Knobs of the scan stage. Defaults match the corpus layout this tool was
/// written for; both are overridable for trees that name things differently.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Base name a directory must match (case-insensitive) to be inspected.
    pub candidate_dir_name: String,
    /// Geometry file expected directly inside a candidate directory.
    pub geometry_filename: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            candidate_dir_name: CANDIDATE_DIR_NAME.to_string(),
            geometry_filename: GEOMETRY_FILENAME.to_string(),
        }
    }
}

/// Walk `root` depth-first and classify every candidate directory.
///
/// Candidates without a geometry file are skipped without a record. A
/// candidate whose geometry fails to parse or validate still gets a record,
/// just with `exclusively_spherical = false`; one bad directory never aborts
/// a bulk scan. Results keep traversal order.
pub fn scan(root: &Path, opts: &ScanOptions) -> anyhow::Result<ScanManifest> {
    let root = root
        .canonicalize()
        .with_context(|| format!("cannot access scan root {}", root.display()))?;
    let mut results = Vec::new();
    for entry in WalkDir::new(&root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !name.eq_ignore_ascii_case(&opts.candidate_dir_name) {
            continue;
        }
        let geometry_path = entry.path().join(&opts.geometry_filename);
        if !geometry_path.is_file() {
            continue;
        }
        let (spherical, spheres) = geometry::analyze_geometry_file(&geometry_path);
        let rel = entry
            .path()
            .strip_prefix(&root)
            .unwrap_or_else(|_| entry.path());
        results.push(GeometryScanResult {
            openmc_dir: rel.to_string_lossy().into_owned(),
            geometry_xml: geometry_path.to_string_lossy().into_owned(),
            exclusively_spherical: spherical,
            radii: spherical.then(|| radii::unique_sorted_radii(&spheres)),
        });
    }
    Ok(ScanManifest { results })
}
