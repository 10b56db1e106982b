//! Contour plots of the registered test functions
//!
//! Usage:
//!     cargo run --bin plot_functions -- --functions baele,rosenbrock

use anyhow::{Context, bail};
use clap::Parser;
use directories::ProjectDirs;
use ndarray::Array1;
use plotly::common::{ColorScale, ColorScalePalette, Marker, Mode, Title};
use plotly::contour::Contour;
use plotly::{Layout, Plot, Scatter};
use std::path::{Path, PathBuf};

use fwdgrad_testfunctions::{FunctionMetadata, FunctionRegistry, TestFunction, get_function_metadata};

type Bounds = (f64, f64);

/// CLI arguments for plotting test functions
#[derive(Parser)]
#[command(name = "plot_functions")]
#[command(about = "Plot test functions using contour plots with Plotly")]
struct Args {
    /// Height of the plot in pixels
    #[arg(short = 'H', long, default_value = "800")]
    height: usize,

    /// Width of the plot in pixels
    #[arg(short = 'W', long, default_value = "800")]
    width: usize,

    /// Number of points along x-axis
    #[arg(short = 'x', long, default_value = "100")]
    xn: usize,

    /// Number of points along y-axis
    #[arg(short = 'y', long, default_value = "100")]
    yn: usize,

    /// X-axis bounds (min,max)
    #[arg(long, default_value = "-5.0,5.0")]
    x_bounds: String,

    /// Y-axis bounds (min,max)
    #[arg(long, default_value = "-5.0,5.0")]
    y_bounds: String,

    /// Output directory for HTML files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// List of specific functions to plot (comma-separated), if empty plots all
    #[arg(short, long)]
    functions: Option<String>,

    /// Use function metadata for bounds (overrides x_bounds and y_bounds)
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    use_metadata: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.xn < 2 || args.yn < 2 {
        bail!("grid needs at least 2 points per axis, got {}x{}", args.xn, args.yn);
    }

    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => {
            let proj_dirs = ProjectDirs::from("org", "fwdgrad", "fwdgrad-testfunctions")
                .context("failed to determine project directories")?;
            proj_dirs.cache_dir().join("functions")
        }
    };
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let x_bounds = parse_bounds(&args.x_bounds).context("invalid --x-bounds")?;
    let y_bounds = parse_bounds(&args.y_bounds).context("invalid --y-bounds")?;

    let registry = FunctionRegistry::new();
    let metadata = get_function_metadata();

    let names: Vec<String> = match &args.functions {
        Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
        None => registry.names(),
    };

    log::info!(
        "plotting {} functions on a {}x{} grid",
        names.len(),
        args.xn,
        args.yn
    );

    for name in &names {
        let Some(entry) = registry.entry(name) else {
            log::warn!("skipping '{}': not a registered test function", name);
            continue;
        };
        if entry.dimension != 2 {
            log::warn!(
                "skipping '{}': requires {}D input, plotting only supports 2D",
                name,
                entry.dimension
            );
            continue;
        }
        let meta = metadata.get(name);

        let (plot_x_bounds, plot_y_bounds) =
            select_bounds(args.use_metadata, meta, x_bounds, y_bounds);
        log::info!(
            "{}: x=({}, {}), y=({}, {})",
            name,
            plot_x_bounds.0,
            plot_x_bounds.1,
            plot_y_bounds.0,
            plot_y_bounds.1
        );

        let plot = create_plot(
            name,
            entry.function,
            plot_x_bounds,
            plot_y_bounds,
            (args.xn, args.yn),
            (args.width, args.height),
            meta,
        );

        let path = save_plot_as_html(&plot, &output_dir, name)?;
        println!("  Saved {}", path.display());
    }

    Ok(())
}

/// Metadata bounds win when requested and available, CLI bounds otherwise
fn select_bounds(
    use_metadata: bool,
    metadata: Option<&FunctionMetadata>,
    x_bounds: Bounds,
    y_bounds: Bounds,
) -> (Bounds, Bounds) {
    match metadata {
        Some(meta) if use_metadata && meta.bounds.len() >= 2 => (meta.bounds[0], meta.bounds[1]),
        _ => (x_bounds, y_bounds),
    }
}

fn parse_bounds(bounds_str: &str) -> anyhow::Result<Bounds> {
    let cleaned = bounds_str.trim_matches(|c| c == '\'' || c == '"');
    let parts: Vec<&str> = if cleaned.contains(',') {
        cleaned.split(',').collect()
    } else {
        cleaned.split_whitespace().collect()
    };

    if parts.len() != 2 {
        bail!("bounds must be in format 'min,max' or 'min max', got '{}'", bounds_str);
    }

    let min = parts[0].trim().parse::<f64>()?;
    let max = parts[1].trim().parse::<f64>()?;
    if min >= max {
        bail!("lower bound {} must be below upper bound {}", min, max);
    }
    Ok((min, max))
}

fn linspace(bounds: (f64, f64), n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| bounds.0 + (bounds.1 - bounds.0) * i as f64 / (n - 1) as f64)
        .collect()
}

fn create_plot(
    name: &str,
    func: TestFunction,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
    (xn, yn): (usize, usize),
    (width, height): (usize, usize),
    metadata: Option<&FunctionMetadata>,
) -> Plot {
    let x_vals = linspace(x_bounds, xn);
    let y_vals = linspace(y_bounds, yn);

    // log scale keeps the valleys visible next to the steep walls
    let z_vals: Vec<Vec<f64>> = y_vals
        .iter()
        .map(|&y| {
            x_vals
                .iter()
                .map(|&x| func(&Array1::from(vec![x, y])).ln_1p())
                .collect()
        })
        .collect();

    let contour = Contour::new(x_vals, y_vals, z_vals)
        .color_scale(ColorScale::Palette(ColorScalePalette::Viridis))
        .name("ln(1 + f)");

    let layout = Layout::new()
        .title(Title::with_text(format!("Function: {}", name)))
        .width(width)
        .height(height)
        .x_axis(plotly::layout::Axis::new().title(Title::with_text("x0")))
        .y_axis(plotly::layout::Axis::new().title(Title::with_text("x1")));

    let mut plot = Plot::new();
    plot.add_trace(contour);
    if let Some(meta) = metadata {
        add_global_minima(&mut plot, meta, x_bounds, y_bounds);
    }
    plot.set_layout(layout);
    plot
}

fn add_global_minima(
    plot: &mut Plot,
    metadata: &FunctionMetadata,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
) {
    let inside: Vec<&(Vec<f64>, f64)> = metadata
        .global_minima
        .iter()
        .filter(|(coords, _)| {
            coords.len() == 2
                && (x_bounds.0..=x_bounds.1).contains(&coords[0])
                && (y_bounds.0..=y_bounds.1).contains(&coords[1])
        })
        .collect();

    if inside.is_empty() {
        return;
    }

    let x_coords: Vec<f64> = inside.iter().map(|(coords, _)| coords[0]).collect();
    let y_coords: Vec<f64> = inside.iter().map(|(coords, _)| coords[1]).collect();

    let trace = Scatter::new(x_coords, y_coords)
        .mode(Mode::Markers)
        .name("Global Minima")
        .marker(
            Marker::new()
                .color("rgba(255, 255, 255, 1.0)")
                .size(10)
                .symbol(plotly::common::MarkerSymbol::Diamond),
        );
    plot.add_trace(trace);
}

fn save_plot_as_html(plot: &Plot, output_dir: &Path, function_name: &str) -> anyhow::Result<PathBuf> {
    let path = output_dir.join(format!("{}.html", function_name.replace(' ', "_")));
    std::fs::write(&path, plot.to_html())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
