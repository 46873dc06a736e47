//! Explicit planning pipeline.
//!
//! One call takes an immutable configuration snapshot and produces a
//! fresh [`ScanPlan`]. Downstream consumers (the stage driver, the
//! export collaborator) always see a complete plan or none at all;
//! a rejected configuration yields an error before any output exists.

use scankit_core::{Result, ScanConfiguration};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bounding::{BoundingBoxOptimizer, BoundingScan};
use crate::geometry::{RotatedScanSet, ScanGeometryEngine, ZeroScan};
use crate::kinematics::{KinematicsCalculator, KinematicsProfile};

/// Complete output of one planning cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanPlan {
    /// The configuration this plan was derived from.
    pub config: ScanConfiguration,
    /// The unrotated reference raster.
    pub zero_scan: ZeroScan,
    /// The zero scan rotated to each scan angle.
    pub rotated: RotatedScanSet,
    /// Axis-aligned rescan per angle.
    pub bounding: Vec<BoundingScan>,
    /// Per-angle axis set-points.
    pub kinematics: KinematicsProfile,
}

/// Sequences the planning components over one configuration.
pub struct ScanPlanner;

impl ScanPlanner {
    /// Run the full pipeline: zero scan, rotated variants, bounding
    /// rescans, and kinematics.
    pub fn plan(config: &ScanConfiguration) -> Result<ScanPlan> {
        Self::plan_with_offset(config, 0.0)
    }

    /// Run the full pipeline with the kinematics angles shifted by
    /// `angle_offset` degrees.
    pub fn plan_with_offset(config: &ScanConfiguration, angle_offset: f64) -> Result<ScanPlan> {
        config.validate()?;

        let zero_scan = ScanGeometryEngine::compute_zero_scan(config)?;
        let rotated = ScanGeometryEngine::compute_rotated_scans(&zero_scan, config)?;
        let bounding = BoundingBoxOptimizer::compute_bounding_box_scans(&zero_scan, &rotated, config)?;
        let kinematics = KinematicsCalculator::compute_with_offset(config, angle_offset)?;

        info!(
            rows = zero_scan.rows_required,
            points_per_line = zero_scan.points_per_line,
            angles = rotated.len(),
            "scan plan computed"
        );

        Ok(ScanPlan {
            config: config.clone(),
            zero_scan,
            rotated,
            bounding,
            kinematics,
        })
    }
}
