//! Input handling and the gesture state machine.
//!
//! This module translates backend keyboard and mouse events into drawing actions.
//! It keeps the tool/color selection and drives the scene through the
//! `Idle` / `Drawing` state machine.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton, PointerEvent};
pub use modifiers::Modifiers;
pub use state::{DrawingState, GestureSettings, InputState, Selection};
pub use tool::Tool;
