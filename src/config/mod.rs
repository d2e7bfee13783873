//! Configuration file support for rasterpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/rasterpad/config.toml`. Settings include drawing defaults,
//! canvas backing, export options, UI styling and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    CanvasConfig, DrawingConfig, ExportConfig, HelpOverlayStyle, ToolbarStyle, UiConfig,
};

use crate::draw::{Color, RenderStyle};
use crate::export::{self, ExportSettings};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "rectangle"
/// default_color = "red"
/// stroke_width = 2.0
///
/// [canvas]
/// backing = "retained"
///
/// [export]
/// format = "jpeg"
///
/// [keybindings]
/// save_image = ["Ctrl+S"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing tool defaults (tool, color, stroke)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas backing and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Image export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged.
    ///
    /// Validated ranges:
    /// - `stroke_width`: 1.0 - 20.0
    /// - `preview_dash`: 0.5 - 50.0 per entry
    /// - `background_color`: 0.0 - 1.0 per component
    /// - `initial_width` / `initial_height`: 320 / 240 - 8192
    /// - `toolbar_height`: 32 - 120
    pub fn validate_and_clamp(&mut self) {
        if !(1.0..=20.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = clamp_or(self.drawing.stroke_width, 1.0, 20.0, 2.0);
        }

        for (i, value) in self.drawing.preview_dash.iter_mut().enumerate() {
            if !(0.5..=50.0).contains(value) {
                log::warn!(
                    "Invalid preview_dash[{}] = {:.1}, clamping to 0.5-50.0 range",
                    i,
                    value
                );
                *value = clamp_or(*value, 0.5, 50.0, 3.0);
            }
        }

        for (i, value) in self.canvas.background_color.iter_mut().enumerate() {
            if !(0.0..=1.0).contains(value) {
                log::warn!(
                    "Invalid background_color[{}] = {:.3}, clamping to 0.0-1.0",
                    i,
                    value
                );
                *value = clamp_or(*value, 0.0, 1.0, 1.0);
            }
        }

        if !(320..=8192).contains(&self.canvas.initial_width) {
            log::warn!(
                "Invalid initial_width {}, clamping to 320-8192 range",
                self.canvas.initial_width
            );
            self.canvas.initial_width = self.canvas.initial_width.clamp(320, 8192);
        }

        if !(240..=8192).contains(&self.canvas.initial_height) {
            log::warn!(
                "Invalid initial_height {}, clamping to 240-8192 range",
                self.canvas.initial_height
            );
            self.canvas.initial_height = self.canvas.initial_height.clamp(240, 8192);
        }

        if !(32..=120).contains(&self.ui.toolbar_height) {
            log::warn!(
                "Invalid toolbar_height {}, clamping to 32-120 range",
                self.ui.toolbar_height
            );
            self.ui.toolbar_height = self.ui.toolbar_height.clamp(32, 120);
        }

        if !(6.0..=32.0).contains(&self.ui.toolbar_style.font_size) {
            log::warn!(
                "Invalid toolbar font_size {:.1}, clamping to 6.0-32.0 range",
                self.ui.toolbar_style.font_size
            );
            self.ui.toolbar_style.font_size =
                clamp_or(self.ui.toolbar_style.font_size, 6.0, 32.0, 12.0);
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty filename_template, falling back to the default");
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/rasterpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("rasterpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file
    /// does not exist. All loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Stroke and background parameters for the scene.
    pub fn render_style(&self) -> RenderStyle {
        let [r, g, b] = self.canvas.background_color;
        RenderStyle {
            stroke_width: self.drawing.stroke_width,
            dash: self.drawing.preview_dash,
            antialias: self.drawing.antialias,
            background: Color::rgb(r, g, b),
        }
    }

    /// Export settings with the save directory expanded.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            save_directory: export::expand_tilde(&self.export.save_directory),
            filename_template: self.export.filename_template.clone(),
            format: self.export.format,
            notify: self.export.notify,
        }
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
