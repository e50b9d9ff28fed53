use crate::services::manifest::ManifestRecord;
use crate::services::radii::format_radius;
use anyhow::Context;
use std::path::{Component, Path, PathBuf};

/// Mirror qualifying manifest records into a radius-only directory tree.
///
/// Each exclusively-spherical record with radii becomes one directory under
/// `output_root`, holding a single radius file. Re-running over an existing
/// tree rewrites the same files and never fails on already-present
/// directories. Returns how many directories were populated.
pub fn build(
    records: &[ManifestRecord],
    output_root: &Path,
    radius_filename: &str,
) -> anyhow::Result<usize> {
    std::fs::create_dir_all(output_root)
        .with_context(|| format!("cannot create output root {}", output_root.display()))?;
    let mut created = 0usize;
    for rec in records {
        if !rec.exclusively_spherical || rec.radii.is_empty() {
            continue;
        }
        let rel = match target_relative_path(rec) {
            Some(rel) => rel,
            None => continue,
        };
        let target_dir = output_root.join(rel);
        std::fs::create_dir_all(&target_dir)
            .with_context(|| format!("cannot create {}", target_dir.display()))?;
        write_radii_file(&target_dir.join(radius_filename), &rec.radii)?;
        created += 1;
    }
    Ok(created)
}

/// Pick the record's target path: the captured relative dir when present,
/// otherwise inferred from the geometry file path. The inference takes the
/// path's last three segments and drops the filename, recovering
/// `<case>/openmc` from `.../<case>/openmc/geometry.xml`. Records matching
/// neither are unusable and yield `None`.
pub fn target_relative_path(rec: &ManifestRecord) -> Option<PathBuf> {
    if let Some(dir) = &rec.openmc_dir {
        return Some(normalize_relative(dir));
    }
    let geom = rec.geometry_xml.as_deref()?;
    let normalized = geom.replace('\\', "/");
    let parts: Vec<&str> = normalized.split('/').collect();
    if parts.len() < 3 {
        return None;
    }
    let tail = &parts[parts.len() - 3..parts.len() - 1];
    Some(normalize_relative(&tail.join("/")))
}

/// Resolve `.`/`..` segments and drop any root prefix so the result always
/// lands under the output root.
fn normalize_relative(raw: &str) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in Path::new(&raw.replace('\\', "/")).components() {
        match comp {
            Component::Normal(seg) => out.push(seg),
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    out
}

/// One radius per line, sorted ascending, exact-value deduplicated. Radii
/// here already went through tolerance dedup during scanning, so set
/// semantics are enough. 17 significant digits round-trip each double
/// exactly.
fn write_radii_file(path: &Path, radii: &[f64]) -> anyhow::Result<()> {
    let mut vals = radii.to_vec();
    vals.sort_by(|a, b| a.total_cmp(b));
    vals.dedup_by(|a, b| a.to_bits() == b.to_bits());
    let mut body = String::new();
    for r in vals {
        body.push_str(&format_radius(r));
        body.push('\n');
    }
    std::fs::write(path, body).with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}
