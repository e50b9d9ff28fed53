use crate::domain::models::BuildReport;
use crate::services::{manifest, mesh, output};
use std::path::Path;

pub fn handle_build(
    json: bool,
    manifest_path: &Path,
    output_root: &Path,
    radius_filename: &str,
) -> anyhow::Result<()> {
    let records = manifest::read(manifest_path)?;
    let created = mesh::build(&records, output_root, radius_filename)?;
    let report = BuildReport {
        output_root: output_root.display().to_string(),
        radius_filename: radius_filename.to_string(),
        created,
    };
    output::print_one(json, report, |r| {
        format!(
            "Created {} folder(s) with {} under: {}",
            r.created, r.radius_filename, r.output_root
        )
    })?;
    Ok(())
}
