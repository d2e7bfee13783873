use anyhow::Result;
use std::path::PathBuf;

use crate::draw::{BackingMode, PaletteColor};
use crate::input::Tool;

pub mod wayland;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Config file to read instead of the default location
    pub config_path: Option<PathBuf>,
    pub backing: Option<BackingMode>,
    pub tool: Option<Tool>,
    pub color: Option<PaletteColor>,
}

/// Run Wayland backend with full event loop until the window is closed.
pub fn run_wayland(options: StartupOptions) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(options)?;
    backend.run()
}
