//! Service layer containing the scan/build logic and side-effect helpers.
//!
//! ## Service map
//! - `geometry.rs` — XML surface parsing, sphere extraction, classification.
//! - `radii.rs` — tolerance dedup + exact decimal formatting.
//! - `scanner.rs` — directory walk and manifest assembly.
//! - `manifest.rs` — manifest persistence + legacy-shape normalization.
//! - `mesh.rs` — mirrored radius-tree construction.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Per-candidate failures are data (classification outcomes), never
//!   process-level errors; only structural failures propagate.

pub mod geometry;
pub mod manifest;
pub mod mesh;
pub mod output;
pub mod radii;
pub mod scanner;
