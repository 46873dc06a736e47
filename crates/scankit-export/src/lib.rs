//! # ScanKit Export
//!
//! Diagnostic CSV export for scan plans. The planner itself performs no
//! I/O; callers inject a [`ScanExporter`] where write-outs are wanted
//! and keep the default [`NoopExporter`] otherwise.
//!
//! Scan lines serialize as `x1,y1,x2,y2` rows and kinematics entries as
//! `vx,vy,ax,ay` rows, both at the stage's 3-decimal resolution.

use std::fs;
use std::path::{Path, PathBuf};

use scankit_core::{Result, ScanLine};
use scankit_planner::{KinematicsProfile, ScanPlan};
use tracing::info;

/// Receives scan data for diagnostic serialization.
pub trait ScanExporter {
    /// Export one angle's scan lines under `filename`.
    fn export_lines(&self, filename: &str, lines: &[ScanLine]) -> Result<()>;

    /// Export a kinematics profile under `filename`.
    fn export_kinematics(&self, filename: &str, profile: &KinematicsProfile) -> Result<()>;
}

/// Exporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopExporter;

impl ScanExporter for NoopExporter {
    fn export_lines(&self, _filename: &str, _lines: &[ScanLine]) -> Result<()> {
        Ok(())
    }

    fn export_kinematics(&self, _filename: &str, _profile: &KinematicsProfile) -> Result<()> {
        Ok(())
    }
}

/// Exporter that writes CSV files into a directory, creating it on
/// first use.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    fn write(&self, filename: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(filename);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

impl ScanExporter for CsvExporter {
    fn export_lines(&self, filename: &str, lines: &[ScanLine]) -> Result<()> {
        let mut out = String::new();
        for line in lines {
            out.push_str(&format!(
                "{:.3},{:.3},{:.3},{:.3}\n",
                line.x1, line.y1, line.x2, line.y2
            ));
        }
        let path = self.write(filename, &out)?;
        info!(path = %path.display(), rows = lines.len(), "wrote scan CSV");
        Ok(())
    }

    fn export_kinematics(&self, filename: &str, profile: &KinematicsProfile) -> Result<()> {
        let mut out = String::new();
        for entry in &profile.entries {
            out.push_str(&format!(
                "{:.3},{:.3},{:.3},{:.3}\n",
                entry.vx, entry.vy, entry.ax, entry.ay
            ));
        }
        let path = self.write(filename, &out)?;
        info!(path = %path.display(), entries = profile.len(), "wrote kinematics CSV");
        Ok(())
    }
}

/// File name for the zero scan.
pub fn zero_scan_filename(rows: u32) -> String {
    format!("scantest-{rows}rows.csv")
}

/// File name for one rotated angle.
pub fn rotated_scan_filename(degrees: u32, rows: u32) -> String {
    format!("scantest-{degrees:03}deg-{rows}rows.csv")
}

/// File name for a kinematics profile.
pub fn kinematics_filename(rows: u32) -> String {
    format!("kinematics-{rows}rows.csv")
}

/// Export a complete plan: the zero scan, every rotated angle, and the
/// kinematics profile.
pub fn export_plan<E: ScanExporter>(exporter: &E, plan: &ScanPlan) -> Result<()> {
    let rows = plan.zero_scan.rows_required;
    exporter.export_lines(&zero_scan_filename(rows), &plan.zero_scan.lines)?;
    for scan in &plan.rotated.scans {
        exporter.export_lines(&rotated_scan_filename(scan.degrees, rows), &scan.lines)?;
    }
    exporter.export_kinematics(&kinematics_filename(rows), &plan.kinematics)?;
    Ok(())
}
