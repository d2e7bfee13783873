//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that allows users
//! to customize keyboard shortcuts for all actions in the application.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys or toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit and cancellation
    Exit,

    // Canvas actions
    ClearCanvas,
    SaveImage,
    CycleExportFormat,

    // UI toggles
    ToggleHelp,

    // Tool selections
    SelectPencil,
    SelectLine,
    SelectRectangle,
    SelectCircle,
    SelectClear,

    // Color selections
    SetColorBlack,
    SetColorRed,
    SetColorGreen,
    SetColorBlue,
    SetColorYellow,
}

/// A single keybinding: a key with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+W" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    /// Single-character keys are stored lowercase so "E" and "e" are the same
    /// binding.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into trailing empty parts; the key is '+'
        let key = key_parts.join("+");
        let key = if key.is_empty() || key == "+" {
            "+".to_string()
        } else if key.chars().count() == 1 {
            key.to_lowercase()
        } else {
            key
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// save_image = ["Ctrl+S"]
/// clear_canvas = ["E"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_save_image")]
    pub save_image: Vec<String>,

    #[serde(default = "default_cycle_export_format")]
    pub cycle_export_format: Vec<String>,

    #[serde(default = "default_toggle_help")]
    pub toggle_help: Vec<String>,

    #[serde(default = "default_select_pencil")]
    pub select_pencil: Vec<String>,

    #[serde(default = "default_select_line")]
    pub select_line: Vec<String>,

    #[serde(default = "default_select_rectangle")]
    pub select_rectangle: Vec<String>,

    #[serde(default = "default_select_circle")]
    pub select_circle: Vec<String>,

    #[serde(default = "default_select_clear")]
    pub select_clear: Vec<String>,

    #[serde(default = "default_set_color_black")]
    pub set_color_black: Vec<String>,

    #[serde(default = "default_set_color_red")]
    pub set_color_red: Vec<String>,

    #[serde(default = "default_set_color_green")]
    pub set_color_green: Vec<String>,

    #[serde(default = "default_set_color_blue")]
    pub set_color_blue: Vec<String>,

    #[serde(default = "default_set_color_yellow")]
    pub set_color_yellow: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            clear_canvas: default_clear_canvas(),
            save_image: default_save_image(),
            cycle_export_format: default_cycle_export_format(),
            toggle_help: default_toggle_help(),
            select_pencil: default_select_pencil(),
            select_line: default_select_line(),
            select_rectangle: default_select_rectangle(),
            select_circle: default_select_circle(),
            select_clear: default_select_clear(),
            set_color_black: default_set_color_black(),
            set_color_red: default_set_color_red(),
            set_color_green: default_set_color_green(),
            set_color_blue: default_set_color_blue(),
            set_color_yellow: default_set_color_yellow(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let table: [(&[String], Action); 15] = [
            (&self.exit, Action::Exit),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.save_image, Action::SaveImage),
            (&self.cycle_export_format, Action::CycleExportFormat),
            (&self.toggle_help, Action::ToggleHelp),
            (&self.select_pencil, Action::SelectPencil),
            (&self.select_line, Action::SelectLine),
            (&self.select_rectangle, Action::SelectRectangle),
            (&self.select_circle, Action::SelectCircle),
            (&self.select_clear, Action::SelectClear),
            (&self.set_color_black, Action::SetColorBlack),
            (&self.set_color_red, Action::SetColorRed),
            (&self.set_color_green, Action::SetColorGreen),
            (&self.set_color_blue, Action::SetColorBlue),
            (&self.set_color_yellow, Action::SetColorYellow),
        ];

        for (bindings, action) in table {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string(), "Ctrl+Q".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_save_image() -> Vec<String> {
    vec!["Ctrl+S".to_string()]
}

fn default_cycle_export_format() -> Vec<String> {
    vec!["F".to_string()]
}

fn default_toggle_help() -> Vec<String> {
    vec!["F1".to_string()]
}

fn default_select_pencil() -> Vec<String> {
    vec!["1".to_string(), "P".to_string()]
}

fn default_select_line() -> Vec<String> {
    vec!["2".to_string(), "L".to_string()]
}

fn default_select_rectangle() -> Vec<String> {
    vec!["3".to_string()]
}

fn default_select_circle() -> Vec<String> {
    vec!["4".to_string(), "C".to_string()]
}

fn default_select_clear() -> Vec<String> {
    vec!["5".to_string()]
}

fn default_set_color_black() -> Vec<String> {
    vec!["K".to_string()]
}

fn default_set_color_red() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_set_color_green() -> Vec<String> {
    vec!["G".to_string()]
}

fn default_set_color_blue() -> Vec<String> {
    vec!["B".to_string()]
}

fn default_set_color_yellow() -> Vec<String> {
    vec!["Y".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let binding = KeyBinding::parse("Ctrl+S").unwrap();
        assert_eq!(binding.key, "s");
        assert!(binding.ctrl);
        assert!(!binding.shift);
    }

    #[test]
    fn test_parse_with_spaces_and_any_order() {
        let a = KeyBinding::parse("Ctrl + Shift + W").unwrap();
        let b = KeyBinding::parse("shift+ctrl+w").unwrap();
        assert_eq!(a, b);
        assert!(a.ctrl && a.shift && !a.alt);
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
    }

    #[test]
    fn test_parse_rejects_modifier_only() {
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("   ").is_err());
    }

    #[test]
    fn test_matches() {
        let binding = KeyBinding::parse("Ctrl+S").unwrap();
        assert!(binding.matches("s", true, false, false));
        assert!(binding.matches("S", true, false, false));
        assert!(!binding.matches("s", false, false, false));
        assert!(!binding.matches("s", true, true, false));
    }

    #[test]
    fn test_build_action_map() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();

        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape), Some(&Action::Exit));

        let ctrl_s = KeyBinding::parse("Ctrl+S").unwrap();
        assert_eq!(map.get(&ctrl_s), Some(&Action::SaveImage));

        let four = KeyBinding::parse("4").unwrap();
        assert_eq!(map.get(&four), Some(&Action::SelectCircle));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let mut config = KeybindingsConfig::default();
        config.clear_canvas = vec!["Ctrl+S".to_string()];

        let err = config.build_action_map().unwrap_err();
        assert!(err.contains("Duplicate keybinding"));
        assert!(err.contains("Ctrl+S"));
    }

    #[test]
    fn test_duplicate_differs_only_in_case() {
        let mut config = KeybindingsConfig::default();
        config.set_color_red = vec!["e".to_string()];
        assert!(config.build_action_map().is_err());
    }
}
