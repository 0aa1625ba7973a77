// File: crates/tipplot-demo/src/main.rs
// Summary: Loads the trip CSV, drives the chart through its lifecycle, and writes PNG/SVG/HTML outputs.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tipplot_core::{export, ChartConfig, ChartEvent, ChartRenderer, DataSource, Page, Phase, RenderOptions};

#[derive(Parser)]
#[command(name = "tipplot")]
#[command(about = "Render the tip-percentage vs trip-distance scatter chart")]
#[command(version)]
struct Cli {
    /// CSV location: http(s) URL or local path (defaults to the configured data_url)
    source: Option<String>,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,

    /// Outer surface width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Outer surface height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Theme name (light, dark)
    #[arg(long)]
    theme: Option<String>,

    /// Fetch timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Uncheck a borough before rendering (repeatable)
    #[arg(long = "hide", value_name = "BOROUGH")]
    hide: Vec<String>,

    /// Show the tooltip for the marker with this index
    #[arg(long, value_name = "INDEX")]
    hover: Option<usize>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,
}

fn setup_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn build_config(cli: &Cli) -> Result<ChartConfig> {
    let mut config = match &cli.config {
        Some(path) => ChartConfig::from_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(w) = cli.width { config.width = w; }
    if let Some(h) = cli.height { config.height = h; }
    if let Some(t) = &cli.theme { config.theme = t.clone(); }
    if let Some(s) = cli.timeout { config.fetch_timeout_secs = s; }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    let source = DataSource::parse(cli.source.as_deref().unwrap_or(&config.data_url));
    let theme = config.theme.clone();

    // The headless host page has a single container matching the configured selector.
    let container = config.selector.trim_start_matches('#').to_string();
    let mut page = Page::new().with_container(container);
    let mut chart = ChartRenderer::initialize(&mut page, config).context("failed to mount chart")?;

    match chart.load(&source).clone() {
        Phase::Ready => {
            log::info!("Loaded {} records from {}", chart.records().len(), source);
            apply_interactions(&mut chart, &cli);
        }
        Phase::Failed(msg) => log::error!("Rendering error state: {msg}"),
        Phase::Loading => log::warn!("Chart still loading after a blocking load"),
    }

    let opts = RenderOptions::for_theme(&theme);
    write_outputs(&chart, &opts, &cli.out)?;

    if let Phase::Failed(msg) = chart.phase() {
        anyhow::bail!("could not load {source}: {msg}");
    }
    Ok(())
}

fn apply_interactions(chart: &mut ChartRenderer, cli: &Cli) {
    for borough in &cli.hide {
        if chart.dispatch(ChartEvent::CheckboxChange { borough: borough.clone(), checked: false }) {
            log::info!("Hid borough {borough}");
        } else {
            log::warn!("No borough named {borough:?}; known: {:?}", chart.state().map(|s| s.scales.color.domain()));
        }
    }
    if let Some(ix) = cli.hover {
        let Some(marker) = chart.surface().markers.get(ix) else {
            log::warn!("No marker {ix}; chart has {}", chart.surface().markers.len());
            return;
        };
        if marker.opacity == 0.0 {
            log::warn!("Marker {ix} belongs to hidden borough {}; no tooltip", marker.borough);
            return;
        }
        let m = chart.surface().margins;
        let (x, y) = (marker.cx + m.left as f32, marker.cy + m.top as f32);
        chart.dispatch(ChartEvent::PointerEnter { marker: ix, x, y });
    }
}

fn write_outputs(chart: &ChartRenderer, opts: &RenderOptions, out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let png = out_dir.join("tipplot.png");
    chart.render_to_png(opts, &png)?;
    println!("Wrote {}", png.display());

    let svg = out_dir.join("tipplot.svg");
    std::fs::write(&svg, export::to_svg(chart)).with_context(|| format!("writing {}", svg.display()))?;
    println!("Wrote {}", svg.display());

    let html = out_dir.join("tipplot.html");
    let doc = format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}</body>\n</html>\n",
        export::escape(&chart.surface().title),
        export::to_html(chart)
    );
    std::fs::write(&html, doc).with_context(|| format!("writing {}", html.display()))?;
    println!("Wrote {}", html.display());
    Ok(())
}
