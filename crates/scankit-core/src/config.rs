//! Scan configuration and stage calibration.
//!
//! A [`ScanConfiguration`] is an immutable snapshot of one planning
//! cycle. Derived quantities (rows, pulses per line) are computed from
//! it on demand; nothing recomputes as a side effect of a field write.
//! Callers build a new configuration and re-run the pipeline for every
//! change.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{PlannerError, Result};

/// Fixed calibration of the stage and optical path.
///
/// These are properties of the instrument, not of an individual scan.
/// The defaults describe the MLS203-1 stage; override them only when
/// the stage is recalibrated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageCalibration {
    /// X coordinate of the optical axis centerline (mm).
    pub optical_origin_x: f64,
    /// Y coordinate of the optical axis centerline (mm).
    pub optical_origin_y: f64,
    /// Hard travel limit of the Y axis (mm). No emitted coordinate may
    /// exceed it.
    pub y_travel_limit: f64,
}

impl Default for StageCalibration {
    fn default() -> Self {
        Self {
            optical_origin_x: constants::OPTICAL_ORIGIN_X_MM,
            optical_origin_y: constants::OPTICAL_ORIGIN_Y_MM,
            y_travel_limit: constants::Y_TRAVEL_LIMIT_MM,
        }
    }
}

/// Parameters of one planning cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfiguration {
    /// X origin of the scan region (mm).
    pub x_origin: f64,
    /// Y origin of the scan region (mm).
    pub y_origin: f64,
    /// Extent of the scan region along X (mm).
    pub x_delta: f64,
    /// Extent of the scan region along Y (mm).
    pub y_delta: f64,
    /// Y distance between consecutive scan lines (mm).
    pub row_spacing: f64,
    /// Run-up distance subtracted from the X extent before pulse
    /// counting (mm). The stage accelerates over this distance before
    /// the laser fires.
    pub run_up: f64,
    /// Laser pulse frequency (Hz).
    pub laser_frequency: f64,
    /// Scan velocity magnitude (mm/s).
    pub scan_velocity: f64,
    /// Scan acceleration magnitude (mm/s^2).
    pub scan_acceleration: f64,
    /// Number of scan angles distributed over half a turn. Zero yields
    /// a single angle at 0 degrees.
    pub scan_angles: u32,
    /// Stage calibration; defaults to the MLS203-1 constants.
    pub calibration: StageCalibration,
}

impl Default for ScanConfiguration {
    fn default() -> Self {
        Self {
            x_origin: 0.0,
            y_origin: 0.0,
            x_delta: 0.0,
            y_delta: 0.0,
            row_spacing: 0.0,
            run_up: 0.0,
            laser_frequency: constants::DEFAULT_LASER_FREQUENCY,
            scan_velocity: constants::DEFAULT_SCAN_VELOCITY,
            scan_acceleration: constants::DEFAULT_SCAN_ACCELERATION,
            scan_angles: 0,
            calibration: StageCalibration::default(),
        }
    }
}

impl ScanConfiguration {
    /// Load a configuration from a JSON file. Missing fields take their
    /// defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Reject values that would make planning impossible.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("x_origin", self.x_origin),
            ("y_origin", self.y_origin),
            ("x_delta", self.x_delta),
            ("y_delta", self.y_delta),
            ("row_spacing", self.row_spacing),
            ("run_up", self.run_up),
            ("laser_frequency", self.laser_frequency),
            ("scan_velocity", self.scan_velocity),
            ("scan_acceleration", self.scan_acceleration),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(PlannerError::invalid(name, "must be finite"));
            }
        }
        if self.row_spacing <= 0.0 {
            return Err(PlannerError::invalid("row_spacing", "must be positive"));
        }
        if self.scan_velocity <= 0.0 {
            return Err(PlannerError::invalid("scan_velocity", "must be positive"));
        }
        if self.scan_acceleration <= 0.0 {
            return Err(PlannerError::invalid(
                "scan_acceleration",
                "must be positive",
            ));
        }
        if self.laser_frequency <= 0.0 {
            return Err(PlannerError::invalid("laser_frequency", "must be positive"));
        }
        if self.scan_angles > 0 && self.angle_step_degrees().round() < 1.0 {
            return Err(PlannerError::invalid(
                "scan_angles",
                "rounds the angle step below one degree",
            ));
        }
        Ok(())
    }

    /// Number of raster rows needed to cover the Y extent.
    pub fn rows_required(&self) -> Result<u32> {
        if self.row_spacing <= 0.0 {
            return Err(PlannerError::invalid("row_spacing", "must be positive"));
        }
        let rows = (self.y_delta / self.row_spacing).ceil();
        if rows <= 0.0 {
            return Err(PlannerError::DegenerateGeometry(format!(
                "{rows} rows required for a y extent of {}",
                self.y_delta
            )));
        }
        Ok(rows as u32)
    }

    /// Laser pulses expected along one traversal.
    pub fn points_per_line(&self) -> Result<u32> {
        if self.scan_velocity <= 0.0 {
            return Err(PlannerError::invalid("scan_velocity", "must be positive"));
        }
        let points =
            (((self.x_delta - self.run_up) / self.scan_velocity) * self.laser_frequency).floor();
        if points <= 0.0 {
            return Err(PlannerError::DegenerateGeometry(format!(
                "{points} pulses per line for an x extent of {}",
                self.x_delta
            )));
        }
        Ok(points as u32)
    }

    /// Total pulses over one full angle scan.
    pub fn points_required(&self) -> Result<u64> {
        Ok(u64::from(self.points_per_line()?) * u64::from(self.rows_required()?))
    }

    /// Angular spacing between consecutive scan angles, in degrees.
    pub fn angle_step_degrees(&self) -> f64 {
        if self.scan_angles == 0 {
            constants::HALF_TURN_DEGREES
        } else {
            constants::HALF_TURN_DEGREES / f64::from(self.scan_angles)
        }
    }
}
