//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `scan.rs` — tree walk, classification, manifest write + report.
//! - `build.rs` — manifest load, mirrored radius-tree construction.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod build;
pub mod scan;

pub use build::handle_build;
pub use scan::handle_scan;
