//! # ScanKit Core
//!
//! Core types, configuration, and error handling for ScanKit.
//! Provides the data model shared by the planner, the export
//! collaborator, and the command-line binary: scan lines, bounding
//! boxes, per-axis kinematics, stage calibration, and the scan
//! configuration with its derived quantities.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{ScanConfiguration, StageCalibration};
pub use error::{PlannerError, Result};
pub use types::{round3, AxisKinematics, BoundingBox, ScanLine};
