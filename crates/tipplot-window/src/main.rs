// File: crates/tipplot-window/src/main.rs
// Summary: Interactive window host; loads data off-thread and maps pointer input onto the chart (winit + softbuffer).

use anyhow::{anyhow, Result};
use clap::Parser;
use std::num::NonZeroU32;
use std::path::PathBuf;
use tipplot_core::{spawn_load, ChartConfig, ChartError, ChartRenderer, DataSource, LoadedRecords, Page, RenderOptions};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder};
use winit::window::WindowBuilder;

type LoadResult = std::result::Result<LoadedRecords, ChartError>;

#[derive(Parser)]
#[command(name = "tipplot-window")]
#[command(about = "Interactive tip-percentage vs trip-distance chart")]
struct Cli {
    /// CSV location: http(s) URL or local path (defaults to the configured data_url)
    source: Option<String>,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme name (light, dark)
    #[arg(long)]
    theme: Option<String>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = match &cli.config {
        Some(path) => ChartConfig::from_file(path)?,
        None => ChartConfig::default(),
    };
    if let Some(t) = &cli.theme {
        config.theme = t.clone();
    }
    let source = DataSource::parse(cli.source.as_deref().unwrap_or(&config.data_url));
    let timeout = config.fetch_timeout();
    let opts = RenderOptions::for_theme(&config.theme);

    let mut page = Page::new().with_container(config.selector.trim_start_matches('#'));
    let mut chart = ChartRenderer::initialize(&mut page, config)?;
    let (width, height) = chart.page_size();

    let event_loop = EventLoopBuilder::<LoadResult>::with_user_event().build();
    let proxy = event_loop.create_proxy();
    log::info!("Loading {source}");
    spawn_load(source, timeout, move |result| {
        if proxy.send_event(result).is_err() {
            log::debug!("Window closed before load finished");
        }
    })?;

    let window = WindowBuilder::new()
        .with_title(chart.surface().title.clone())
        .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut draw = move |chart: &ChartRenderer| -> Result<()> {
        let (w, h) = chart.page_size();
        let (nw, nh) = NonZeroU32::new(w)
            .zip(NonZeroU32::new(h))
            .ok_or_else(|| anyhow!("empty page {w}x{h}"))?;
        surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e}"))?;

        let (rgba, _, _, _) = chart.render_to_rgba8(&opts)?;
        let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            // softbuffer pixels are 0RGB
            *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
        }
        frame.present().map_err(|e| anyhow!("present: {e}"))?;
        Ok(())
    };

    let mut cursor: Option<(f32, f32)> = None;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        let changed = match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                    false
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let (x, y) = (position.x as f32, position.y as f32);
                    cursor = Some((x, y));
                    chart.pointer_move(x, y)
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    chart.pointer_exit()
                }
                WindowEvent::MouseInput { state: ElementState::Pressed, button: MouseButton::Left, .. } => {
                    match cursor {
                        Some((x, y)) => chart.click(x, y),
                        None => false,
                    }
                }
                _ => false,
            },
            Event::UserEvent(result) => {
                chart.finish_load(result);
                // The control panel may need more rows than were reserved while loading.
                let (w, h) = chart.page_size();
                window.set_inner_size(winit::dpi::PhysicalSize::new(w, h));
                true
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&chart) {
                    log::error!("Redraw failed: {e:#}");
                    *cf = ControlFlow::Exit;
                }
                false
            }
            _ => false,
        };
        if changed {
            window.request_redraw();
        }
    });
}
