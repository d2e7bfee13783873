use clap::Parser;
use std::path::PathBuf;

mod backend;
mod config;
mod draw;
mod export;
mod input;
mod notification;
mod ui;
mod util;

use backend::StartupOptions;
use draw::{BackingMode, PaletteColor};
use input::Tool;

#[derive(Parser, Debug)]
#[command(name = "rasterpad")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RASTERPAD_GIT_HASH"), ")"),
    about = "Raster drawing pad for Wayland desktops"
)]
struct Cli {
    /// Canvas backing: raster (pixels) or retained (shape list)
    #[arg(long, short = 'b', value_name = "BACKING")]
    backing: Option<BackingMode>,

    /// Initially selected tool (pencil, line, rectangle, circle, clear)
    #[arg(long, short = 't', value_name = "TOOL")]
    tool: Option<Tool>,

    /// Initially selected color (black, red, green, blue, yellow)
    #[arg(long, short = 'c', value_name = "COLOR")]
    color: Option<PaletteColor>,

    /// Read configuration from PATH instead of ~/.config/rasterpad/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run inside a Wayland session.");
        return Err(anyhow::anyhow!("Wayland environment required"));
    }

    log::info!("Starting rasterpad...");
    log::info!("Controls:");
    log::info!("  - Tools: 1 pencil, 2 line, 3 rectangle, 4 circle, 5 clear");
    log::info!("  - Colors: K (black), R (red), G (green), B (blue), Y (yellow)");
    log::info!("  - Clear canvas: E");
    log::info!("  - Save: Ctrl+S (F cycles PNG/JPEG/BMP)");
    log::info!("  - Cancel drag: right click or Escape");
    log::info!("  - Help: F1");
    log::info!("  - Exit: Escape or Ctrl+Q");

    backend::run_wayland(StartupOptions {
        config_path: cli.config,
        backing: cli.backing,
        tool: cli.tool,
        color: cli.color,
    })?;

    log::info!("rasterpad closed.");
    Ok(())
}
