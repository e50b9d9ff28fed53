//! Stable constants shared by the scan and build stages.

/// Two radii closer than this are the same shell. Fixed rather than
/// configurable so manifests stay reproducible across runs.
pub const RADIUS_TOLERANCE: f64 = 1e-9;

/// Base name a directory must match (case-insensitively) to be inspected.
pub const CANDIDATE_DIR_NAME: &str = "openmc";

/// Geometry file expected directly inside a candidate directory.
pub const GEOMETRY_FILENAME: &str = "geometry.xml";

/// Default name of the per-directory radius file written by `build`.
pub const DEFAULT_RADIUS_FILENAME: &str = "radii.txt";
