use crate::config::Action;
use crate::draw::PaletteColor;
use crate::input::{events::Key, tool::Tool};

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys update the modifier state; every other key is looked up
    /// in the keybinding map together with the held modifiers.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event.
    ///
    /// Currently only tracks modifier key releases to update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }

    /// Handle an action triggered by a keybinding or a toolbar button.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Exit => match self.state {
                DrawingState::Drawing { .. } => self.cancel_gesture(),
                DrawingState::Idle => {
                    log::info!("Exit requested");
                    self.should_exit = true;
                }
            },
            Action::ClearCanvas => {
                self.scene.clear();
                self.state = DrawingState::Idle;
            }
            Action::SaveImage => {
                log::debug!("Save requested as {}", self.export_format);
                self.request_export();
            }
            Action::CycleExportFormat => {
                self.export_format = self.export_format.next();
                self.request_redraw();
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.request_redraw();
            }
            Action::SelectPencil => self.select_tool(Tool::Pencil),
            Action::SelectLine => self.select_tool(Tool::Line),
            Action::SelectRectangle => self.select_tool(Tool::Rectangle),
            Action::SelectCircle => self.select_tool(Tool::Circle),
            Action::SelectClear => self.select_tool(Tool::Clear),
            Action::SetColorBlack => self.select_color(PaletteColor::Black),
            Action::SetColorRed => self.select_color(PaletteColor::Red),
            Action::SetColorGreen => self.select_color(PaletteColor::Green),
            Action::SetColorBlue => self.select_color(PaletteColor::Blue),
            Action::SetColorYellow => self.select_color(PaletteColor::Yellow),
        }
    }
}
