//! # ScanKit
//!
//! Multi-angle raster scan trajectory planning for a laser-scanning
//! two-axis stage.
//!
//! ## Architecture
//!
//! ScanKit is organized as a workspace with multiple crates:
//!
//! 1. **scankit-core** - Data model, configuration, stage constants, errors
//! 2. **scankit-planner** - Zero scan, rotation, bounding rescans, kinematics
//! 3. **scankit-export** - Diagnostic CSV export collaborator
//! 4. **scankit** - Command-line binary that ties the crates together
//!
//! The planner is a deterministic, single-shot pipeline: a
//! configuration goes in, a complete plan comes out, and any
//! configuration change means planning again from scratch.

pub use scankit_core::{
    constants, round3, AxisKinematics, BoundingBox, PlannerError, ScanConfiguration, ScanLine,
    StageCalibration,
};

pub use scankit_planner::{
    BoundingBoxOptimizer, BoundingScan, KinematicsCalculator, KinematicsProfile, RotatedScan,
    RotatedScanSet, ScanGeometryEngine, ScanPlan, ScanPlanner, ZeroScan,
};

pub use scankit_export::{
    export_plan, kinematics_filename, rotated_scan_filename, zero_scan_filename, CsvExporter,
    NoopExporter, ScanExporter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
