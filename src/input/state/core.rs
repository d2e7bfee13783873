//! Drawing state machine and input state management.

use crate::config::{Action, KeyBinding};
use crate::draw::{DrawError, PaletteColor, Scene};
use crate::export::ExportFormat;
use crate::input::{modifiers::Modifiers, tool::Tool};
use crate::ui::Toolbar;
use crate::util::Point;
use std::collections::HashMap;

/// Tool and color currently chosen on the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub tool: Tool,
    pub color: PaletteColor,
}

/// Snapshot of the selection taken when a gesture starts.
///
/// Changing the selection mid-drag does not affect the gesture in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureSettings {
    pub tool: Tool,
    pub color: PaletteColor,
}

impl From<Selection> for GestureSettings {
    fn from(selection: Selection) -> Self {
        Self {
            tool: selection.tool,
            color: selection.color,
        }
    }
}

/// Current drawing mode state machine.
///
/// Tracks whether the user is idle or dragging with the left button held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Left button held on the canvas
    Drawing {
        /// Tool and color captured at pointer-down
        settings: GestureSettings,
    },
}

/// Main input state containing all drawing session state.
///
/// Owns the scene, the toolbar layout and the current selection, and turns
/// keyboard and mouse events into scene mutations. The backend polls
/// [`InputState::needs_redraw`] and [`InputState::take_pending_export`] after
/// feeding events.
pub struct InputState {
    /// Committed shapes, preview and raster layer
    pub scene: Scene,
    /// Tool and color picked on the toolbar or via keybindings
    pub selection: Selection,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Toolbar layout for the current window width
    pub toolbar: Toolbar,
    /// Format used by the next save
    pub export_format: ExportFormat,
    /// Whether user requested to exit
    pub should_exit: bool,
    /// Whether the help overlay is currently visible (toggled with F1)
    pub show_help: bool,
    /// UI-level redraw request (toolbar, help); scene changes are tracked by the scene
    needs_redraw: bool,
    /// Save requested, to be performed by the backend
    pending_export: bool,
    /// Result of the last save, shown in the toolbar
    status_message: Option<String>,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Creates a new InputState around an existing scene.
    ///
    /// The window is assumed to be the scene size plus the toolbar strip until
    /// the backend reports the real size through [`InputState::update_window_size`].
    pub fn new(
        scene: Scene,
        selection: Selection,
        toolbar_height: i32,
        export_format: ExportFormat,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        let toolbar = Toolbar::layout(scene.width(), toolbar_height);
        Self {
            scene,
            selection,
            state: DrawingState::Idle,
            modifiers: Modifiers::new(),
            toolbar,
            export_format,
            should_exit: false,
            show_help: false,
            needs_redraw: true,
            pending_export: false,
            status_message: None,
            action_map,
        }
    }

    /// Applies a new window size: relayouts the toolbar and resizes the canvas
    /// below it.
    pub fn update_window_size(&mut self, width: i32, height: i32) -> Result<(), DrawError> {
        let toolbar_height = self.toolbar.height();
        self.toolbar = Toolbar::layout(width, toolbar_height);
        self.scene
            .resize(width, (height - toolbar_height).max(1))?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Total window size implied by the canvas and toolbar.
    pub fn window_size(&self) -> (i32, i32) {
        (
            self.scene.width(),
            self.scene.height() + self.toolbar.height(),
        )
    }

    /// Converts window coordinates to canvas coordinates.
    pub fn canvas_point(&self, x: i32, y: i32) -> Point {
        Point::new(x, y - self.toolbar.height())
    }

    /// Whether anything visible changed since the last [`InputState::mark_rendered`].
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw || self.scene.repaint_requested()
    }

    /// Requests a redraw of the UI chrome.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Resets both redraw flags after a frame was rendered.
    pub fn mark_rendered(&mut self) {
        self.needs_redraw = false;
        self.scene.take_repaint_request();
    }

    /// Returns true once if a save was requested since the last call.
    pub fn take_pending_export(&mut self) -> bool {
        std::mem::take(&mut self.pending_export)
    }

    pub(super) fn request_export(&mut self) {
        self.pending_export = true;
    }

    /// Result text of the last save, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Sets the status text shown next to the toolbar buttons.
    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.needs_redraw = true;
    }

    pub fn select_tool(&mut self, tool: Tool) {
        if self.selection.tool != tool {
            log::debug!("Tool changed to {}", tool);
        }
        self.selection.tool = tool;
        self.needs_redraw = true;
    }

    pub fn select_color(&mut self, color: PaletteColor) {
        if self.selection.color != color {
            log::debug!("Color changed to {}", color);
        }
        self.selection.color = color;
        self.needs_redraw = true;
    }

    /// Look up an action for the given key and the current modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map.iter().find_map(|(binding, action)| {
            binding
                .matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
                .then_some(*action)
        })
    }
}
