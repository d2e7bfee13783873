//! RGBA color type and the fixed drawing palette.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use rasterpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let light_gray = Color::rgb(0.83, 0.83, 0.83);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a fully opaque color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Builds a color from a config `[r, g, b, a]` array.
    pub fn from_array([r, g, b, a]: [f64; 4]) -> Self {
        Self { r, g, b, a }
    }

    /// Sets this color as the Cairo source.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=0.5, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined white color, the default canvas background
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Pen colors offered by the toolbar.
///
/// Black is the default. The palette is closed: arbitrary RGB values are only
/// used for UI chrome, never for strokes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    Black,
    Red,
    Green,
    Blue,
    Yellow,
}

impl PaletteColor {
    /// All palette entries in toolbar order.
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Yellow,
    ];

    /// RGBA value used when drawing with this pen color.
    pub fn to_color(self) -> Color {
        match self {
            PaletteColor::Black => BLACK,
            PaletteColor::Red => RED,
            PaletteColor::Green => GREEN,
            PaletteColor::Blue => BLUE,
            PaletteColor::Yellow => YELLOW,
        }
    }

    /// Human-readable name shown in the status label.
    pub fn label(self) -> &'static str {
        match self {
            PaletteColor::Black => "Black",
            PaletteColor::Red => "Red",
            PaletteColor::Green => "Green",
            PaletteColor::Blue => "Blue",
            PaletteColor::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaletteColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::util::name_to_color(s).ok_or_else(|| {
            format!("unknown color '{s}' (expected black, red, green, blue or yellow)")
        })
    }
}
