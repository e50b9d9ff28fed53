use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One validated spherical surface. `r` is always finite and positive;
/// extraction rejects anything else before a `Sphere` is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub r: f64,
    pub x0: f64,
    pub y0: f64,
    pub z0: f64,
}

/// Per-candidate scan outcome. Field names are the manifest schema and are
/// kept aligned with manifests produced by earlier tooling: `openmc_dir` is
/// the candidate's path relative to the scan root, `geometry_xml` the
/// absolute geometry file path.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GeometryScanResult {
    pub openmc_dir: String,
    pub geometry_xml: String,
    pub exclusively_spherical: bool,
    /// Sorted, tolerance-deduplicated shell radii. Present only when
    /// `exclusively_spherical` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radii: Option<Vec<f64>>,
}

/// All results of one scan run, in traversal order.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ScanManifest {
    pub results: Vec<GeometryScanResult>,
}

#[derive(Serialize)]
pub struct ScanReport {
    pub root: String,
    pub manifest_path: String,
    pub candidates: usize,
    pub exclusively_spherical: usize,
    pub results: Vec<GeometryScanResult>,
}

#[derive(Serialize)]
pub struct BuildReport {
    pub output_root: String,
    pub radius_filename: String,
    pub created: usize,
}
