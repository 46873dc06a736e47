use scankit_core::{PlannerError, ScanConfiguration};
use scankit_planner::ScanPlanner;

fn bench_config() -> ScanConfiguration {
    ScanConfiguration {
        x_origin: 40.0,
        y_origin: 35.0,
        x_delta: 15.0,
        y_delta: 12.0,
        row_spacing: 0.5,
        scan_angles: 6,
        ..Default::default()
    }
}

#[test]
fn test_full_pipeline_shape() {
    let plan = ScanPlanner::plan(&bench_config()).unwrap();

    // ceil(12 / 0.5) rows, plus the closing traversal.
    assert_eq!(plan.zero_scan.rows_required, 24);
    assert_eq!(plan.zero_scan.lines.len(), 25);
    assert_eq!(plan.zero_scan.points_per_line, 3000);

    // 180 / 6 = 30 degree steps.
    let angles: Vec<u32> = plan.rotated.scans.iter().map(|s| s.degrees).collect();
    assert_eq!(angles, vec![0, 30, 60, 90, 120, 150]);

    assert_eq!(plan.bounding.len(), plan.rotated.len());
    assert_eq!(plan.kinematics.len(), 6);
}

#[test]
fn test_bounding_rescans_cover_rotated_footprints() {
    let plan = ScanPlanner::plan(&bench_config()).unwrap();
    for (scan, rescan) in plan.rotated.scans.iter().zip(&plan.bounding).skip(1) {
        let bounds = rescan.bounds.expect("non-zero angle carries bounds");
        for line in &scan.lines {
            assert!(bounds.contains(line.x1, line.y1));
            assert!(bounds.contains(line.x2, line.y2));
        }
    }
}

#[test]
fn test_plan_round_trips_through_json() {
    let plan = ScanPlanner::plan(&bench_config()).unwrap();
    let json = serde_json::to_string(&plan).unwrap();
    let restored: scankit_planner::ScanPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(plan, restored);
}

#[test]
fn test_degenerate_region_is_rejected() {
    let config = ScanConfiguration {
        x_delta: 0.0,
        ..bench_config()
    };
    assert!(matches!(
        ScanPlanner::plan(&config),
        Err(PlannerError::DegenerateGeometry(_))
    ));
}
