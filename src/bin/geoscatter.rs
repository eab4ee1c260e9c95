use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use geoscatter::config::{DEFAULT_INPUT, PlotConfig};
use geoscatter::{AxisRange, DisplayMode, dataset, display, stats, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "geoscatter",
    version,
    about = "Scatter-plot longitude/latitude rows from a CSV over the continental US"
)]
struct Cli {
    /// CSV file with `longitude` and `latitude` columns.
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// JSON plot configuration; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Marker opacity in [0, 1] (default 0.2).
    #[arg(long)]
    alpha: Option<f64>,
    /// Marker color: b, g, r, c, m, y, k, w, a name, or #rrggbb (default b).
    #[arg(long)]
    color: Option<String>,
    /// Marker area in points² (default 10).
    #[arg(long)]
    marker_size: Option<f64>,
    /// Visible longitude range MIN:MAX (default -126:-66).
    #[arg(long, allow_hyphen_values = true)]
    xlim: Option<AxisRange>,
    /// Visible latitude range MIN:MAX (default 23:50).
    #[arg(long, allow_hyphen_values = true)]
    ylim: Option<AxisRange>,
    /// Canvas width in pixels (default 640).
    #[arg(long)]
    width: Option<u32>,
    /// Canvas height in pixels (default 480).
    #[arg(long)]
    height: Option<u32>,
    /// Where to present the plot.
    #[arg(long, value_enum, default_value_t = DisplayArg::Auto)]
    display: DisplayArg,
    /// Print a coordinate summary to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DisplayArg {
    Auto,
    Window,
    Headless,
}

impl From<DisplayArg> for DisplayMode {
    fn from(d: DisplayArg) -> Self {
        match d {
            DisplayArg::Auto => DisplayMode::Auto,
            DisplayArg::Window => DisplayMode::Window,
            DisplayArg::Headless => DisplayMode::Headless,
        }
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn build_config(cli: &Cli) -> Result<PlotConfig> {
    let mut cfg = match &cli.config {
        Some(path) => PlotConfig::from_json_file(path)?,
        None => PlotConfig::default(),
    };
    if let Some(a) = cli.alpha {
        cfg.marker.alpha = a;
    }
    if let Some(c) = &cli.color {
        cfg.marker.color = c.clone();
    }
    if let Some(s) = cli.marker_size {
        cfg.marker.size = s;
    }
    if let Some(x) = cli.xlim {
        cfg.x_range = x;
    }
    if let Some(y) = cli.ylim {
        cfg.y_range = y;
    }
    if let Some(w) = cli.width {
        cfg.width = w;
    }
    if let Some(h) = cli.height {
        cfg.height = h;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let cfg = build_config(&cli)?;

    let data = dataset::load(&cli.input)?;
    let points = dataset::extract_coordinates(&data)
        .with_context(|| format!("reading coordinates from {}", cli.input.display()))?;
    log::info!("loaded {} points from {}", points.len(), cli.input.display());

    let mut plot = viz::render(&points, &cfg.marker);
    plot.clip_axes(cfg.x_range, cfg.y_range);
    display::display(plot, cli.display.into(), cfg.width, cfg.height)?;

    if cli.stats {
        let s = stats::summarize(&points, cfg.x_range, cfg.y_range);
        println!(
            "count={} missing={} visible={}  lon=[{}, {}] lat=[{}, {}]",
            s.count,
            s.non_finite,
            s.visible,
            fmt_opt(s.min_longitude),
            fmt_opt(s.max_longitude),
            fmt_opt(s.min_latitude),
            fmt_opt(s.max_latitude)
        );
    }
    Ok(())
}
