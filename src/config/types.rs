//! Configuration type definitions.

use crate::draw::{BackingMode, PaletteColor};
use crate::export::ExportFormat;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the initial tool and pen color plus how strokes are drawn.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool selected at startup (pencil, line, rectangle, circle, clear)
    #[serde(default)]
    pub default_tool: Tool,

    /// Pen color at startup (black, red, green, blue, yellow)
    #[serde(default)]
    pub default_color: PaletteColor,

    /// Stroke width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Preview dash pattern as [on, off] in pixels (each 0.5 - 50.0)
    #[serde(default = "default_preview_dash")]
    pub preview_dash: [f64; 2],

    /// Anti-alias strokes
    #[serde(default = "default_antialias")]
    pub antialias: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            default_color: PaletteColor::default(),
            stroke_width: default_stroke_width(),
            preview_dash: default_preview_dash(),
            antialias: default_antialias(),
        }
    }
}

/// Canvas settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// How strokes persist: "raster" burns them into pixels, "retained"
    /// keeps every shape and redraws the list
    #[serde(default)]
    pub backing: BackingMode,

    /// Background color [R, G, B] (0.0-1.0 range)
    #[serde(default = "default_background_color")]
    pub background_color: [f64; 3],

    /// Initial window width in pixels
    #[serde(default = "default_initial_width")]
    pub initial_width: i32,

    /// Initial window height in pixels (toolbar included)
    #[serde(default = "default_initial_height")]
    pub initial_height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            backing: BackingMode::default(),
            background_color: default_background_color(),
            initial_width: default_initial_width(),
            initial_height: default_initial_height(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for saved drawings (supports ~ for home directory)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template with chrono format specifiers
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Initial format (png, jpeg, bmp); the toolbar chip cycles it at runtime
    #[serde(default)]
    pub format: ExportFormat,

    /// Show a desktop notification after saving
    #[serde(default = "default_notify")]
    pub notify: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            format: ExportFormat::default(),
            notify: default_notify(),
        }
    }
}

/// UI display preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Toolbar height in pixels (valid range: 32 - 120)
    #[serde(default = "default_toolbar_height")]
    pub toolbar_height: i32,

    /// Toolbar styling options
    #[serde(default)]
    pub toolbar_style: ToolbarStyle,

    /// Help overlay styling options
    #[serde(default)]
    pub help_overlay_style: HelpOverlayStyle,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toolbar_height: default_toolbar_height(),
            toolbar_style: ToolbarStyle::default(),
            help_overlay_style: HelpOverlayStyle::default(),
        }
    }
}

/// Toolbar styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ToolbarStyle {
    /// Font family for button labels
    #[serde(default = "default_toolbar_font_family")]
    pub font_family: String,

    /// Font size for button labels
    #[serde(default = "default_toolbar_font_size")]
    pub font_size: f64,

    /// Toolbar background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_toolbar_bg_color")]
    pub bg_color: [f64; 4],

    /// Button fill color [R, G, B, A]
    #[serde(default = "default_toolbar_button_color")]
    pub button_color: [f64; 4],

    /// Fill color of the active tool button [R, G, B, A]
    #[serde(default = "default_toolbar_active_color")]
    pub active_color: [f64; 4],

    /// Label text color [R, G, B, A]
    #[serde(default = "default_toolbar_text_color")]
    pub text_color: [f64; 4],
}

impl Default for ToolbarStyle {
    fn default() -> Self {
        Self {
            font_family: default_toolbar_font_family(),
            font_size: default_toolbar_font_size(),
            bg_color: default_toolbar_bg_color(),
            button_color: default_toolbar_button_color(),
            active_color: default_toolbar_active_color(),
            text_color: default_toolbar_text_color(),
        }
    }
}

/// Help overlay styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HelpOverlayStyle {
    /// Font size for help overlay text
    #[serde(default = "default_help_font_size")]
    pub font_size: f64,

    /// Line height for help text
    #[serde(default = "default_help_line_height")]
    pub line_height: f64,

    /// Padding around help box
    #[serde(default = "default_help_padding")]
    pub padding: f64,

    /// Background color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_bg_color")]
    pub bg_color: [f64; 4],

    /// Border color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_border_color")]
    pub border_color: [f64; 4],

    /// Border line width
    #[serde(default = "default_help_border_width")]
    pub border_width: f64,

    /// Text color [R, G, B, A] (0.0-1.0 range)
    #[serde(default = "default_help_text_color")]
    pub text_color: [f64; 4],
}

impl Default for HelpOverlayStyle {
    fn default() -> Self {
        Self {
            font_size: default_help_font_size(),
            line_height: default_help_line_height(),
            padding: default_help_padding(),
            bg_color: default_help_bg_color(),
            border_color: default_help_border_color(),
            border_width: default_help_border_width(),
            text_color: default_help_text_color(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_stroke_width() -> f64 {
    2.0
}

fn default_preview_dash() -> [f64; 2] {
    [3.0, 3.0]
}

fn default_antialias() -> bool {
    true
}

fn default_background_color() -> [f64; 3] {
    [1.0, 1.0, 1.0]
}

fn default_initial_width() -> i32 {
    850
}

fn default_initial_height() -> i32 {
    650
}

fn default_save_directory() -> String {
    "~/Pictures/Rasterpad".to_string()
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}

fn default_notify() -> bool {
    true
}

fn default_toolbar_height() -> i32 {
    50
}

fn default_toolbar_font_family() -> String {
    "Sans".to_string()
}

fn default_toolbar_font_size() -> f64 {
    12.0
}

fn default_toolbar_bg_color() -> [f64; 4] {
    [0.93, 0.93, 0.93, 1.0]
}

fn default_toolbar_button_color() -> [f64; 4] {
    [0.83, 0.83, 0.83, 1.0]
}

fn default_toolbar_active_color() -> [f64; 4] {
    [0.55, 0.75, 1.0, 1.0]
}

fn default_toolbar_text_color() -> [f64; 4] {
    [0.1, 0.1, 0.1, 1.0]
}

// Help overlay style defaults
fn default_help_font_size() -> f64 {
    16.0
}

fn default_help_line_height() -> f64 {
    22.0
}

fn default_help_padding() -> f64 {
    20.0
}

fn default_help_bg_color() -> [f64; 4] {
    [0.0, 0.0, 0.0, 0.85]
}

fn default_help_border_color() -> [f64; 4] {
    [0.3, 0.6, 1.0, 0.9]
}

fn default_help_border_width() -> f64 {
    2.0
}

fn default_help_text_color() -> [f64; 4] {
    [1.0, 1.0, 1.0, 1.0]
}
