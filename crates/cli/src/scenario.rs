use anyhow::{Context, Result};
use gridsnap::prelude::*;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One token drag evaluated end to end: grid, footprint, raw pointer samples.
#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    pub grid: GridDescriptor,
    #[serde(default)]
    pub footprint: Footprint,
    /// Cell the highlighted shape is anchored at.
    #[serde(default)]
    pub anchor: Cell,
    #[serde(default)]
    pub points: Vec<[f64; 2]>,
    /// Hex-size extension: request vertex snapping for even oversized tiers.
    #[serde(default)]
    pub alt_snapping: bool,
}

/// Everything the engine reports for a scenario.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub snapped: Vec<[f64; 2]>,
    pub centered: Vec<[f64; 2]>,
    pub shape: Option<Vec<Cell>>,
    pub highlight: Option<Vec<[f64; 2]>>,
    pub anomalies: Vec<String>,
    pub error: Option<String>,
}

pub fn load(path: &Path) -> Result<Scenario> {
    let raw = fs::read(path).with_context(|| format!("reading scenario {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing scenario {}", path.display()))
}

pub fn to_pixel(p: [f64; 2]) -> PixelPoint {
    Vector2::new(p[0], p[1])
}

pub fn from_pixel(p: &PixelPoint) -> [f64; 2] {
    [p.x, p.y]
}

/// Run every engine stage. Shape errors (e.g. gridless canvases) are recorded
/// and the point pipeline still runs, mirroring how a drag keeps going. An
/// invalid footprint stops the evaluation with only the error filled in.
pub fn evaluate(s: &Scenario) -> Report {
    let (snapped, centered) = match snap_and_center(s) {
        Ok(points) => points,
        Err(err) => {
            tracing::warn!(error = %err, "footprint rejected");
            return Report {
                error: Some(err.to_string()),
                ..Report::default()
            };
        }
    };

    let mut report = Report {
        snapped: snapped.iter().map(from_pixel).collect(),
        centered: centered.iter().map(from_pixel).collect(),
        ..Report::default()
    };
    match enumerate_shape(&s.footprint, &s.grid) {
        Ok(shape) => {
            if let Some(anomaly) = shape.anomaly() {
                report.anomalies.push(anomaly.to_string());
            }
            match project_highlight_cells(s.anchor, &shape, &s.grid) {
                Ok(px) => report.highlight = Some(px.iter().map(from_pixel).collect()),
                Err(err) => report.error = Some(err.to_string()),
            }
            report.shape = Some(shape.offsets().to_vec());
        }
        Err(err) => {
            tracing::warn!(error = %err, "shape unavailable");
            report.error = Some(err.to_string());
        }
    }
    report
}

fn snap_and_center(
    s: &Scenario,
) -> std::result::Result<(Vec<PixelPoint>, Vec<PixelPoint>), GeometryError> {
    let support = NearestVertexSnap::new(s.alt_snapping);
    let snapped = s
        .points
        .iter()
        .map(|p| resolve_snap(to_pixel(*p), &s.footprint, &s.grid, Some(&support)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let centered = center_waypoints(&snapped, &s.footprint, &s.grid)?;
    Ok((snapped, centered))
}
