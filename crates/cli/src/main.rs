use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gridsnap::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod scenario;

use scenario::{from_pixel, to_pixel};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Token footprint and grid snapping geometry")]
struct Cmd {
    /// Write JSON output here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// List the cell offsets a footprint covers
    Shape {
        #[command(flatten)]
        grid: GridArgs,
        #[command(flatten)]
        footprint: FootprintArgs,
    },
    /// Snap one pointer position
    Snap {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[command(flatten)]
        grid: GridArgs,
        #[command(flatten)]
        footprint: FootprintArgs,
    },
    /// Pixel positions of a footprint anchored at a cell
    Highlight {
        #[arg(long, allow_hyphen_values = true)]
        col: i32,
        #[arg(long, allow_hyphen_values = true)]
        row: i32,
        #[command(flatten)]
        grid: GridArgs,
        #[command(flatten)]
        footprint: FootprintArgs,
    },
    /// Apply the even-footprint centering pass to waypoints given as `x,y`
    Center {
        #[arg(long = "point", value_parser = parse_point, allow_hyphen_values = true)]
        points: Vec<[f64; 2]>,
        #[command(flatten)]
        grid: GridArgs,
        #[command(flatten)]
        footprint: FootprintArgs,
    },
    /// Evaluate a JSON scenario file end to end
    Run {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print version information
    Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Gridless,
    Square,
    Hex,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    Rows,
    Columns,
}

#[derive(Args)]
struct GridArgs {
    #[arg(long, value_enum, default_value_t = KindArg::Square)]
    kind: KindArg,
    #[arg(long, default_value_t = 100.0)]
    cell_width: f64,
    #[arg(long, default_value_t = 100.0)]
    cell_height: f64,
    #[arg(long, value_enum, default_value_t = AxisArg::Rows)]
    axis: AxisArg,
    /// Even rows (columns) carry the hex stagger
    #[arg(long)]
    even: bool,
}

impl GridArgs {
    fn descriptor(&self) -> Result<GridDescriptor> {
        let kind = match self.kind {
            KindArg::Gridless => GridKind::Gridless,
            KindArg::Square => GridKind::Square,
            KindArg::Hex => GridKind::Hex,
        };
        let axis = match self.axis {
            AxisArg::Rows => HexAxis::RowMajor,
            AxisArg::Columns => HexAxis::ColumnMajor,
        };
        GridDescriptor::new(kind, self.cell_width, self.cell_height, axis, self.even)
            .context("building grid from flags")
    }
}

#[derive(Args)]
struct FootprintArgs {
    #[arg(long, default_value_t = 1)]
    width: i32,
    #[arg(long, default_value_t = 1)]
    height: i32,
    /// Oversized hex tier (0 = plain token)
    #[arg(long, default_value_t = 0)]
    border_size: i32,
    /// Mirror the hex cluster
    #[arg(long)]
    alt_orientation: bool,
    /// Vertex-snap even oversized hex tiers
    #[arg(long)]
    alt_snapping: bool,
}

impl FootprintArgs {
    fn footprint(&self) -> Footprint {
        Footprint {
            width_cells: self.width,
            height_cells: self.height,
            hex_border_size: self.border_size,
            alt_orientation: self.alt_orientation,
        }
    }
}

fn parse_point(s: &str) -> std::result::Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok([x, y])
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let value = match cmd.action {
        Action::Shape { grid, footprint } => shape(&grid, &footprint)?,
        Action::Snap {
            x,
            y,
            grid,
            footprint,
        } => snap(x, y, &grid, &footprint)?,
        Action::Highlight {
            col,
            row,
            grid,
            footprint,
        } => highlight(Cell::new(col, row), &grid, &footprint)?,
        Action::Center {
            points,
            grid,
            footprint,
        } => center(&points, &grid, &footprint)?,
        Action::Run { input } => run(&input)?,
        Action::Report => report(),
    };
    emit(&value, cmd.out.as_deref())
}

fn emit(value: &serde_json::Value, out: Option<&Path>) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn shape(grid: &GridArgs, fp: &FootprintArgs) -> Result<serde_json::Value> {
    let g = grid.descriptor()?;
    let footprint = fp.footprint();
    let shape = enumerate_shape(&footprint, &g)?;
    tracing::info!(kind = %g.kind(), cells = shape.len(), "shape");
    Ok(serde_json::json!({
        "offsets": shape.offsets(),
        "anomaly": shape.anomaly().map(|a| a.to_string()),
    }))
}

fn snap(x: f64, y: f64, grid: &GridArgs, fp: &FootprintArgs) -> Result<serde_json::Value> {
    let g = grid.descriptor()?;
    let footprint = fp.footprint();
    let support = NearestVertexSnap::new(fp.alt_snapping);
    let snapped = resolve_snap(to_pixel([x, y]), &footprint, &g, Some(&support))
        .context("snapping point")?;
    let centered = center_waypoints(&[snapped], &footprint, &g).context("centering point")?;
    tracing::info!(x, y, sx = snapped.x, sy = snapped.y, "snap");
    Ok(serde_json::json!({
        "snapped": from_pixel(&snapped),
        "centered": from_pixel(&centered[0]),
    }))
}

fn highlight(anchor: Cell, grid: &GridArgs, fp: &FootprintArgs) -> Result<serde_json::Value> {
    let g = grid.descriptor()?;
    let shape = enumerate_shape(&fp.footprint(), &g)?;
    let px = project_highlight_cells(anchor, &shape, &g)?;
    tracing::info!(%anchor, cells = px.len(), "highlight");
    let points: Vec<[f64; 2]> = px.iter().map(from_pixel).collect();
    Ok(serde_json::json!({ "anchor": anchor, "points": points }))
}

fn center(points: &[[f64; 2]], grid: &GridArgs, fp: &FootprintArgs) -> Result<serde_json::Value> {
    let g = grid.descriptor()?;
    let raw: Vec<PixelPoint> = points.iter().copied().map(to_pixel).collect();
    let out = center_waypoints(&raw, &fp.footprint(), &g).context("centering waypoints")?;
    tracing::info!(points = out.len(), "center");
    let out: Vec<[f64; 2]> = out.iter().map(from_pixel).collect();
    Ok(serde_json::json!({ "points": out }))
}

fn run(input: &Path) -> Result<serde_json::Value> {
    tracing::info!(input = %input.display(), "run");
    let s = scenario::load(input)?;
    let report = scenario::evaluate(&s);
    Ok(serde_json::to_value(report)?)
}

fn report() -> serde_json::Value {
    serde_json::json!({
        "name": "gridsnap",
        "version": gridsnap::VERSION,
    })
}
