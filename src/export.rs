// export.rs
// Write field reports out for external plotting tools

use crate::error::ConfigResult;
use crate::evaluation::FieldReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write the report as CSV: `#` metadata lines, a header, then one row per sample.
pub fn write_csv<W: Write>(report: &FieldReport, mut out: W) -> ConfigResult<()> {
    let [nx, ny, nz] = report.grid.shape();
    writeln!(out, "# Electric field export")?;
    writeln!(out, "# Grid: {}x{}x{}", nx, ny, nz)?;
    writeln!(out, "# Reference radius: {}", report.reference_radius)?;
    for marker in &report.markers {
        writeln!(
            out,
            "# Charge {}: q={} at ({}, {}, {})",
            marker.label, marker.magnitude, marker.position.x, marker.position.y, marker.position.z
        )?;
    }
    writeln!(out, "# {}", report.stats)?;

    writeln!(out, "x,y,z,ex,ey,ez,magnitude")?;
    for ((p, e), m) in report
        .grid
        .points()
        .iter()
        .zip(report.field.vectors())
        .zip(&report.magnitudes)
    {
        writeln!(
            out,
            "{},{},{},{:e},{:e},{:e},{:e}",
            p.x, p.y, p.z, e.x, e.y, e.z, m
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Write the report as pretty-printed JSON.
pub fn write_json<W: Write>(report: &FieldReport, out: W) -> ConfigResult<()> {
    serde_json::to_writer_pretty(out, report)?;
    Ok(())
}

pub fn export_csv<P: AsRef<Path>>(report: &FieldReport, path: P) -> ConfigResult<()> {
    let path = path.as_ref();
    create_parent_dir(path)?;
    write_csv(report, BufWriter::new(File::create(path)?))?;
    info!(path = %path.display(), rows = report.grid.len(), "exported field CSV");
    Ok(())
}

pub fn export_json<P: AsRef<Path>>(report: &FieldReport, path: P) -> ConfigResult<()> {
    let path = path.as_ref();
    create_parent_dir(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(report, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), "exported field JSON");
    Ok(())
}

fn create_parent_dir(path: &Path) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
