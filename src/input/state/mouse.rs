use crate::input::events::{MouseButton, PointerEvent};
use crate::util::Point;

use super::{DrawingState, GestureSettings, InputState};

impl InputState {
    /// Feeds a canvas-space pointer event through the gesture state machine.
    ///
    /// # Transitions
    /// - `Idle --Down-->` `Drawing`, beginning a gesture with a snapshot of the
    ///   selection (the clear pseudo-tool clears the canvas and stays `Idle`)
    /// - `Drawing --Move-->` `Drawing`, updating the gesture
    /// - `Drawing --Up-->` `Idle`, finishing the gesture
    ///
    /// Every other combination is ignored.
    pub fn dispatch(&mut self, event: PointerEvent) {
        match (self.state, event) {
            (DrawingState::Idle, PointerEvent::Down(at)) => {
                let settings = GestureSettings::from(self.selection);
                match settings.tool.stroke_kind() {
                    Some(kind) => {
                        self.scene
                            .begin_gesture(kind, settings.color.to_color(), at);
                        self.state = DrawingState::Drawing { settings };
                        log::debug!("Gesture started with {} at {:?}", settings.tool, at);
                    }
                    None => {
                        log::debug!("Clear tool pressed, clearing canvas");
                        self.scene.clear();
                    }
                }
            }
            (DrawingState::Drawing { .. }, PointerEvent::Move(at)) => {
                self.scene.update_gesture(at);
            }
            (DrawingState::Drawing { settings }, PointerEvent::Up(at)) => {
                self.scene.end_gesture(at);
                self.state = DrawingState::Idle;
                log::debug!("Gesture with {} ended at {:?}", settings.tool, at);
            }
            _ => {}
        }
    }

    /// Processes a mouse button press event in window coordinates.
    ///
    /// # Behavior
    /// - Left click on the toolbar while idle: triggers the button's action
    /// - Left click on the canvas: `Down` event for the state machine
    /// - Right click: cancels the gesture in flight
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => {
                let point = Point::new(x, y);
                if self.toolbar.contains(point) {
                    if matches!(self.state, DrawingState::Idle)
                        && let Some(item) = self.toolbar.hit_test(point)
                    {
                        log::debug!("Toolbar item {:?} clicked", item);
                        self.handle_action(item.action());
                    }
                    return;
                }
                self.dispatch(PointerEvent::Down(self.canvas_point(x, y)));
            }
            MouseButton::Right => self.cancel_gesture(),
            MouseButton::Middle => {}
        }
    }

    /// Processes pointer motion in window coordinates.
    ///
    /// Motion outside the canvas (over the toolbar or beyond the window) keeps
    /// feeding the gesture so drags may leave and re-enter the canvas.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        self.dispatch(PointerEvent::Move(self.canvas_point(x, y)));
    }

    /// Processes a mouse button release event in window coordinates.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }
        self.dispatch(PointerEvent::Up(self.canvas_point(x, y)));
    }

    /// Aborts the gesture in flight without committing it.
    pub fn cancel_gesture(&mut self) {
        if let DrawingState::Drawing { settings } = self.state {
            log::debug!("Gesture with {} cancelled", settings.tool);
            self.scene.cancel_gesture();
            self.state = DrawingState::Idle;
        }
    }
}
