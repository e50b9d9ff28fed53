//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep manifest/record/report structs in one place.
//! - Make manifest and JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — spheres, scan results, manifest, report/output structs.
//! - `constants.rs` — stable constants (tolerance, default filenames).
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `GeometryScanResult` field names are the on-disk manifest schema. Older
//! tooling reads these files; renames break the loose reader in
//! `services/manifest.rs`.

pub mod constants;
pub mod models;
