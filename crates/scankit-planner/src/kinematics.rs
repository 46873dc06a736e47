//! Per-axis velocity and acceleration set-points.
//!
//! Decomposes the scalar scan velocity and acceleration into X/Y
//! magnitudes for each scan angle. The profile is ordered by angle
//! index and is a pure function of the configuration; it never looks at
//! the geometry output.

use scankit_core::{round3, AxisKinematics, PlannerError, Result, ScanConfiguration};
use serde::{Deserialize, Serialize};

/// Per-angle kinematics, ordered by angle index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicsProfile {
    pub entries: Vec<AxisKinematics>,
}

impl KinematicsProfile {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives axis set-points for each scan angle.
pub struct KinematicsCalculator;

impl KinematicsCalculator {
    /// Compute the profile with no angular offset.
    pub fn compute(config: &ScanConfiguration) -> Result<KinematicsProfile> {
        Self::compute_with_offset(config, 0.0)
    }

    /// Compute the profile with each angle shifted by `angle_offset`
    /// degrees.
    ///
    /// One entry per angle index; `scan_angles = 0` yields an empty
    /// profile.
    pub fn compute_with_offset(
        config: &ScanConfiguration,
        angle_offset: f64,
    ) -> Result<KinematicsProfile> {
        if config.scan_velocity <= 0.0 {
            return Err(PlannerError::invalid("scan_velocity", "must be positive"));
        }
        if config.scan_acceleration <= 0.0 {
            return Err(PlannerError::invalid(
                "scan_acceleration",
                "must be positive",
            ));
        }

        let step = config.angle_step_degrees();
        let mut entries = Vec::with_capacity(config.scan_angles as usize);
        for index in 0..config.scan_angles {
            let angle_degrees = step * f64::from(index) + angle_offset;
            let radians = angle_degrees.to_radians();
            let vx = round3((radians.cos() * config.scan_velocity).abs());
            let vy = round3((radians.sin() * config.scan_velocity).abs());
            let ax = round3((radians.cos() * config.scan_acceleration).abs());
            let ay = round3((radians.sin() * config.scan_acceleration).abs());
            entries.push(AxisKinematics {
                angle_degrees,
                vx: substitute_zero(vx, config.scan_velocity),
                vy: substitute_zero(vy, config.scan_velocity),
                ax: substitute_zero(ax, config.scan_acceleration),
                ay: substitute_zero(ay, config.scan_acceleration),
            });
        }

        Ok(KinematicsProfile { entries })
    }
}

/// A component that rounds to zero carries the full scalar magnitude
/// instead; a zero-valued axis command would stall a coordinated move.
fn substitute_zero(component: f64, magnitude: f64) -> f64 {
    if component == 0.0 {
        magnitude
    } else {
        component
    }
}
