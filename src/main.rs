use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use scankit::{export_plan, init_logging, CsvExporter, ScanConfiguration, ScanPlanner};

/// Plan multi-angle raster scan trajectories for a laser-scanning stage.
#[derive(Debug, Parser)]
#[command(name = "scankit", version, about)]
struct Args {
    /// Path to a JSON scan configuration.
    #[arg(short, long)]
    config: PathBuf,

    /// Angular offset in degrees applied to the kinematics profile.
    #[arg(long, default_value_t = 0.0)]
    angle_offset: f64,

    /// Directory to write diagnostic CSV files into.
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Print the complete plan as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_logging()?;

    let args = Args::parse();
    let config = ScanConfiguration::from_json_file(&args.config)
        .with_context(|| format!("failed to load configuration from {}", args.config.display()))?;

    let plan = ScanPlanner::plan_with_offset(&config, args.angle_offset)?;

    info!(
        version = scankit::VERSION,
        rows = plan.zero_scan.rows_required,
        points_per_line = plan.zero_scan.points_per_line,
        points_required = plan.zero_scan.points_per_line as u64 * plan.zero_scan.rows_required as u64,
        angles = plan.rotated.len(),
        "planned scan"
    );

    for rescan in &plan.bounding {
        if let Some(bounds) = &rescan.bounds {
            info!(
                degrees = rescan.degrees,
                x_min = bounds.x_min,
                y_min = bounds.y_min,
                x_max = bounds.x_max,
                y_max = bounds.y_max,
                points_per_line = rescan.points_per_line,
                rows = rescan.rows_required,
                "bounding rescan"
            );
        }
    }

    if let Some(dir) = args.export_dir {
        let exporter = CsvExporter::new(&dir);
        export_plan(&exporter, &plan)?;
        info!(dir = %dir.display(), "exported scan CSVs");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }

    Ok(())
}
