//! Zero-scan synthesis and rotation about the optical origin.
//!
//! The zero scan is the unrotated reference raster: one horizontal
//! traversal per row, bottom to top. Rotated variants reuse that
//! geometry for every scan angle by rotating each endpoint rigidly
//! about the optical axis centerline, so the instrument approaches the
//! same physical region from multiple directions without re-deriving
//! the raster per angle.

use scankit_core::config::StageCalibration;
use scankit_core::constants::HALF_TURN_DEGREES;
use scankit_core::{round3, PlannerError, Result, ScanConfiguration, ScanLine};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The unrotated reference raster at angle 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroScan {
    /// One horizontal traversal per row, in row order.
    pub lines: Vec<ScanLine>,
    /// Raster rows needed to cover the Y extent.
    pub rows_required: u32,
    /// Laser pulses expected along one traversal.
    pub points_per_line: u32,
}

/// The zero scan rotated to a single angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotatedScan {
    /// Rotation angle in whole degrees, `0 <= degrees < 180`.
    pub degrees: u32,
    /// Rotated traversals, in the zero scan's row order.
    pub lines: Vec<ScanLine>,
}

/// Rotated variants of the zero scan, in ascending angle order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RotatedScanSet {
    pub scans: Vec<RotatedScan>,
}

impl RotatedScanSet {
    pub fn len(&self) -> usize {
        self.scans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }

    /// The scan generated for `degrees`, if that angle was produced.
    pub fn at_degrees(&self, degrees: u32) -> Option<&RotatedScan> {
        self.scans.iter().find(|scan| scan.degrees == degrees)
    }
}

/// Builds the zero scan and its rotated variants.
pub struct ScanGeometryEngine;

impl ScanGeometryEngine {
    /// Compute the unrotated raster covering the configured region.
    ///
    /// Emits `rows_required + 1` traversals so the final row closes the
    /// far edge of the region.
    pub fn compute_zero_scan(config: &ScanConfiguration) -> Result<ZeroScan> {
        let rows_required = config.rows_required()?;
        let points_per_line = config.points_per_line()?;

        let mut lines = Vec::with_capacity(rows_required as usize + 1);
        for row in 0..=rows_required {
            let y = config.y_origin + f64::from(row) * config.row_spacing;
            lines.push(ScanLine::horizontal(
                config.x_origin,
                config.x_origin + config.x_delta,
                y,
            ));
        }

        Ok(ZeroScan {
            lines,
            rows_required,
            points_per_line,
        })
    }

    /// Rotate the zero scan about the optical origin for every scan
    /// angle.
    ///
    /// Angles start at 0 and advance by the rounded integer step while
    /// below 180, so a step that does not divide 180 evenly drifts from
    /// the exact fractional placement; the set always holds
    /// `ceil(180 / step)` entries and never one at or past 180.
    pub fn compute_rotated_scans(
        zero: &ZeroScan,
        config: &ScanConfiguration,
    ) -> Result<RotatedScanSet> {
        if zero.lines.is_empty() {
            return Err(PlannerError::DegenerateGeometry(
                "cannot rotate an empty zero scan".to_string(),
            ));
        }

        let step = config.angle_step_degrees();
        let increment = step.round() as u32;
        if increment == 0 {
            return Err(PlannerError::invalid(
                "scan_angles",
                "rounds the angle step below one degree",
            ));
        }

        let calibration = &config.calibration;
        let mut scans = Vec::new();
        let mut degrees = 0u32;
        while f64::from(degrees) < HALF_TURN_DEGREES {
            let (sin, cos) = f64::from(degrees).to_radians().sin_cos();
            let lines = zero
                .lines
                .iter()
                .map(|line| {
                    let (x1, y1) = rotate_endpoint(line.x1, line.y1, calibration, sin, cos);
                    let (x2, y2) = rotate_endpoint(line.x2, line.y2, calibration, sin, cos);
                    ScanLine::new(x1, y1, x2, y2)
                })
                .collect();
            scans.push(RotatedScan { degrees, lines });
            degrees += increment;
        }

        debug!(angles = scans.len(), step, "computed rotated scan set");
        Ok(RotatedScanSet { scans })
    }
}

/// Rigid rotation of one endpoint about the optical origin, rounded to
/// the stage's 3-decimal move resolution and clamped to the Y travel
/// limit.
fn rotate_endpoint(
    x: f64,
    y: f64,
    calibration: &StageCalibration,
    sin: f64,
    cos: f64,
) -> (f64, f64) {
    let dx = x - calibration.optical_origin_x;
    let dy = y - calibration.optical_origin_y;
    let xr = round3(dx * cos + dy * sin + calibration.optical_origin_x);
    let yr = round3(-dx * sin + dy * cos + calibration.optical_origin_y);
    (xr, yr.min(calibration.y_travel_limit))
}
