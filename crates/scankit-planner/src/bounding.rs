//! Axis-aligned bounding rescans for rotated scan patterns.
//!
//! A rotated scan's true footprint is a rotated rectangle. Re-expressing
//! it as an axis-aligned bounding rectangle lets the stage execute a
//! plain horizontal raster instead of an arbitrarily oriented path, at
//! the cost of sweeping a slightly larger area.

use scankit_core::constants::BOUNDING_PADDING_MM;
use scankit_core::{BoundingBox, PlannerError, Result, ScanConfiguration, ScanLine};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::{RotatedScanSet, ZeroScan};

/// One angle's executable rescan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingScan {
    /// Rotation angle in whole degrees.
    pub degrees: u32,
    /// Padded bounds of the rotated footprint. `None` for the angle-0
    /// entry, which keeps the zero scan as-is.
    pub bounds: Option<BoundingBox>,
    /// Horizontal raster covering the bounds, in row order.
    pub lines: Vec<ScanLine>,
    /// Laser pulses expected along one traversal of this rescan.
    pub points_per_line: u32,
    /// Raster rows in this rescan.
    pub rows_required: u32,
}

/// Synthesizes an axis-aligned replacement raster per scan angle.
pub struct BoundingBoxOptimizer;

impl BoundingBoxOptimizer {
    /// Derive a rescan for every angle of `rotated`. The angle-0 entry
    /// reuses the zero scan verbatim with its original row and pulse
    /// counts.
    pub fn compute_bounding_box_scans(
        zero: &ZeroScan,
        rotated: &RotatedScanSet,
        config: &ScanConfiguration,
    ) -> Result<Vec<BoundingScan>> {
        if config.scan_velocity <= 0.0 {
            return Err(PlannerError::invalid("scan_velocity", "must be positive"));
        }
        if config.row_spacing <= 0.0 {
            return Err(PlannerError::invalid("row_spacing", "must be positive"));
        }

        let mut rescans = Vec::with_capacity(rotated.len().max(1));
        rescans.push(BoundingScan {
            degrees: 0,
            bounds: None,
            lines: zero.lines.clone(),
            points_per_line: zero.points_per_line,
            rows_required: zero.rows_required,
        });

        for scan in rotated.scans.iter().skip(1) {
            let bounds = footprint_bounds(&scan.lines).ok_or_else(|| {
                PlannerError::DegenerateGeometry(format!(
                    "rotated scan at {} degrees has no lines",
                    scan.degrees
                ))
            })?;
            let padded = bounds.padded(BOUNDING_PADDING_MM);

            let points_per_line =
                ((padded.width() / config.scan_velocity) * config.laser_frequency).floor() as u32;
            let rows_required = (padded.height() / config.row_spacing).ceil() as u32;

            debug!(
                degrees = scan.degrees,
                x_min = padded.x_min,
                y_min = padded.y_min,
                x_max = padded.x_max,
                y_max = padded.y_max,
                points_per_line,
                rows_required,
                "bounding rescan"
            );

            let lines = (0..rows_required)
                .map(|row| {
                    ScanLine::horizontal(
                        padded.x_min,
                        padded.x_max,
                        padded.y_min + f64::from(row) * config.row_spacing,
                    )
                })
                .collect();

            rescans.push(BoundingScan {
                degrees: scan.degrees,
                bounds: Some(padded),
                lines,
                points_per_line,
                rows_required,
            });
        }

        Ok(rescans)
    }
}

/// Running min/max over every endpoint of every line. The first point
/// seeds the bounds; later points only extend them.
fn footprint_bounds(lines: &[ScanLine]) -> Option<BoundingBox> {
    let (first, rest) = lines.split_first()?;
    let mut bounds = BoundingBox::seed(first.x1, first.y1);
    bounds.include(first.x2, first.y2);
    for line in rest {
        bounds.include(line.x1, line.y1);
        bounds.include(line.x2, line.y2);
    }
    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ScanGeometryEngine;

    fn reference_config() -> ScanConfiguration {
        ScanConfiguration {
            x_origin: 45.0,
            y_origin: 40.0,
            x_delta: 10.0,
            y_delta: 10.0,
            row_spacing: 2.0,
            scan_angles: 4,
            ..Default::default()
        }
    }

    fn plan_rescans(config: &ScanConfiguration) -> (ZeroScan, RotatedScanSet, Vec<BoundingScan>) {
        let zero = ScanGeometryEngine::compute_zero_scan(config).unwrap();
        let rotated = ScanGeometryEngine::compute_rotated_scans(&zero, config).unwrap();
        let rescans =
            BoundingBoxOptimizer::compute_bounding_box_scans(&zero, &rotated, config).unwrap();
        (zero, rotated, rescans)
    }

    #[test]
    fn test_one_rescan_per_angle() {
        let config = reference_config();
        let (_, rotated, rescans) = plan_rescans(&config);
        assert_eq!(rescans.len(), rotated.len());
    }

    #[test]
    fn test_zero_angle_reuses_zero_scan() {
        let config = reference_config();
        let (zero, _, rescans) = plan_rescans(&config);
        let first = &rescans[0];
        assert_eq!(first.degrees, 0);
        assert!(first.bounds.is_none());
        assert_eq!(first.lines, zero.lines);
        assert_eq!(first.points_per_line, zero.points_per_line);
        assert_eq!(first.rows_required, zero.rows_required);
    }

    #[test]
    fn test_padded_bounds_contain_rotated_footprint() {
        let config = reference_config();
        let (_, rotated, rescans) = plan_rescans(&config);
        for (scan, rescan) in rotated.scans.iter().zip(&rescans).skip(1) {
            let bounds = rescan.bounds.expect("non-zero angle carries bounds");
            for line in &scan.lines {
                assert!(bounds.contains(line.x1, line.y1));
                assert!(bounds.contains(line.x2, line.y2));
            }
        }
    }

    #[test]
    fn test_padding_margin_applied() {
        let config = reference_config();
        let (_, rotated, rescans) = plan_rescans(&config);
        let scan = &rotated.scans[1];
        let raw = footprint_bounds(&scan.lines).unwrap();
        let padded = rescans[1].bounds.unwrap();
        assert!((padded.x_min - (raw.x_min - 0.25)).abs() < 1e-9);
        assert!((padded.x_max - (raw.x_max + 0.25)).abs() < 1e-9);
        assert!((padded.y_min - (raw.y_min - 0.25)).abs() < 1e-9);
        assert!((padded.y_max - (raw.y_max + 0.25)).abs() < 1e-9);
    }

    #[test]
    fn test_rescan_raster_matches_row_counts() {
        let config = reference_config();
        let (_, _, rescans) = plan_rescans(&config);
        for rescan in rescans.iter().skip(1) {
            let bounds = rescan.bounds.unwrap();
            assert_eq!(rescan.lines.len(), rescan.rows_required as usize);
            assert!(rescan.points_per_line > 0);
            for (row, line) in rescan.lines.iter().enumerate() {
                assert_eq!(line.x1, bounds.x_min);
                assert_eq!(line.x2, bounds.x_max);
                let expected_y = bounds.y_min + row as f64 * config.row_spacing;
                assert!((line.y1 - expected_y).abs() < 1e-9);
                assert_eq!(line.y1, line.y2);
            }
        }
    }

    #[test]
    fn test_rescan_rederives_pulse_count_from_width() {
        // At 90 degrees a 10 x 10 region stays 10 wide; padding adds
        // 0.5, so (10.5 / 100) * 20000 pulses per traversal.
        let config = reference_config();
        let (_, _, rescans) = plan_rescans(&config);
        let quarter_turn = rescans.iter().find(|r| r.degrees == 90).unwrap();
        assert_eq!(quarter_turn.points_per_line, 2100);
        // ceil(10.5 / 2) rows over the padded height.
        assert_eq!(quarter_turn.rows_required, 6);
    }
}
