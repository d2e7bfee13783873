// Responds to xdg toplevel configure/close events, keeping the canvas in sync with the window size.
use log::{info, warn};
use smithay_client_toolkit::shell::xdg::window::{Window, WindowConfigure, WindowHandler};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl WindowHandler for WaylandState {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        info!("Window closed by compositor");
        self.input_state.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        _serial: u32,
    ) {
        // A missing dimension means the client picks; keep what we have.
        let width = configure
            .new_size
            .0
            .map_or(self.surface.width(), |w| w.get());
        let height = configure
            .new_size
            .1
            .map_or(self.surface.height(), |h| h.get());

        info!("Window configured: {}x{}", width, height);

        if self.surface.update_dimensions(width, height) {
            info!("Window size changed - recreating SlotPool");
            let (w, h) = (
                width.min(i32::MAX as u32) as i32,
                height.min(i32::MAX as u32) as i32,
            );
            if let Err(e) = self.input_state.update_window_size(w, h) {
                warn!("Failed to resize canvas to {}x{}: {}", w, h, e);
            }
        }

        self.surface.set_configured(true);
        self.input_state.request_redraw();
    }
}
