use crate::domain::models::ScanManifest;
use anyhow::Context;
use serde_json::Value;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("malformed manifest: top level must be a list of records or a mapping containing them")]
    MalformedShape,
}

/// One record as loaded from a manifest, after shape normalization. All
/// fields are optional on disk; the build stage decides which absences make
/// a record unusable.
#[derive(Debug, Default, Clone)]
pub struct ManifestRecord {
    pub exclusively_spherical: bool,
    pub openmc_dir: Option<String>,
    pub geometry_xml: Option<String>,
    pub radii: Vec<f64>,
}

pub fn write(manifest: &ScanManifest, dest: &Path) -> anyhow::Result<()> {
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
    }
    std::fs::write(dest, serde_json::to_string_pretty(manifest)?)
        .with_context(|| format!("cannot write manifest {}", dest.display()))?;
    Ok(())
}

pub fn read(source: &Path) -> anyhow::Result<Vec<ManifestRecord>> {
    let raw = std::fs::read_to_string(source)
        .with_context(|| format!("cannot read manifest {}", source.display()))?;
    let top: Value = serde_json::from_str(&raw)
        .with_context(|| format!("manifest {} is not valid JSON", source.display()))?;
    let records = unwrap_records(top)?;
    Ok(records.iter().filter_map(record_from_value).collect())
}

/// Resolve the accepted top-level shapes into one canonical record list.
/// Manifests in the wild come as a bare list, as `{"results": [...]}`, or as
/// an arbitrary mapping whose values are the records (keys ignored). Anything
/// else is a hard error; there is no record list to salvage.
fn unwrap_records(top: Value) -> Result<Vec<Value>, ManifestError> {
    match top {
        Value::Array(records) => Ok(records),
        Value::Object(map) => match map.get("results") {
            Some(Value::Array(records)) => Ok(records.clone()),
            _ => Ok(map.into_iter().map(|(_, v)| v).collect()),
        },
        _ => Err(ManifestError::MalformedShape),
    }
}

fn non_empty_string(v: Option<&Value>) -> Option<String> {
    v.and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Loosely decode one record; non-mapping entries are dropped. Legacy field
/// names (`*_rel` suffixes) are honored as fallbacks.
fn record_from_value(v: &Value) -> Option<ManifestRecord> {
    let obj = v.as_object()?;
    Some(ManifestRecord {
        exclusively_spherical: obj
            .get("exclusively_spherical")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        openmc_dir: non_empty_string(obj.get("openmc_dir"))
            .or_else(|| non_empty_string(obj.get("openmc_dir_rel"))),
        geometry_xml: non_empty_string(obj.get("geometry_xml"))
            .or_else(|| non_empty_string(obj.get("geometry_xml_rel"))),
        radii: obj
            .get("radii")
            .and_then(Value::as_array)
            .map(|a| a.iter().filter_map(Value::as_f64).collect())
            .unwrap_or_default(),
    })
}
