// Holds the live Wayland protocol state shared by the backend loop and the handler
// submodules; provides rendering and export helpers used across them.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{WaylandSurface, xdg::XdgShell},
    shm::Shm,
};
use wayland_client::{
    QueueHandle,
    protocol::{wl_keyboard, wl_pointer, wl_shm},
};

use crate::{
    config::Config,
    export::{self, ExportSettings},
    input::InputState,
    notification,
};

use super::surface::SurfaceState;

/// Internal Wayland state shared across modules.
pub(super) struct WaylandState {
    // Wayland protocol objects
    pub(super) registry_state: RegistryState,
    pub(super) compositor_state: CompositorState,
    pub(super) xdg_shell: XdgShell,
    pub(super) shm: Shm,
    pub(super) output_state: OutputState,
    pub(super) seat_state: SeatState,
    pub(super) keyboard: Option<wl_keyboard::WlKeyboard>,
    pub(super) pointer: Option<wl_pointer::WlPointer>,

    // Window and buffer management
    pub(super) surface: SurfaceState,

    pub(super) config: Config,
    pub(super) export_settings: ExportSettings,

    pub(super) input_state: InputState,

    // Tokio runtime handle for desktop notifications
    pub(super) tokio_handle: tokio::runtime::Handle,
}

impl WaylandState {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        registry_state: RegistryState,
        compositor_state: CompositorState,
        xdg_shell: XdgShell,
        shm: Shm,
        output_state: OutputState,
        seat_state: SeatState,
        config: Config,
        input_state: InputState,
        tokio_handle: tokio::runtime::Handle,
    ) -> Self {
        let (width, height) = input_state.window_size();
        let export_settings = config.export_settings();
        Self {
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            keyboard: None,
            pointer: None,
            surface: SurfaceState::new(width.max(1) as u32, height.max(1) as u32),
            config,
            export_settings,
            input_state,
            tokio_handle,
        }
    }

    pub(super) fn render(&mut self, qh: &QueueHandle<Self>) -> Result<()> {
        debug!("=== RENDER START ===");
        let width = self.surface.width();
        let height = self.surface.height();

        let (buffer, canvas) = {
            let pool = self.surface.ensure_pool(&self.shm)?;
            pool.create_buffer(
                width as i32,
                height as i32,
                (width * 4) as i32,
                wl_shm::Format::Argb8888,
            )
            .context("Failed to create buffer")?
        };

        // SAFETY: `canvas` is the SlotPool slice for this buffer, exactly
        // width * height * 4 bytes with a stride of width * 4, matching ARgb32.
        // The Cairo surface and context are dropped before the buffer is attached,
        // so Cairo never touches the memory after the compositor may read it.
        let cairo_surface = unsafe {
            cairo::ImageSurface::create_for_data_unsafe(
                canvas.as_mut_ptr(),
                cairo::Format::ARgb32,
                width as i32,
                height as i32,
                (width * 4) as i32,
            )
            .context("Failed to create Cairo surface")?
        };

        let ctx = cairo::Context::new(&cairo_surface).context("Failed to create Cairo context")?;

        // Canvas sits below the toolbar strip.
        ctx.save().context("Failed to save Cairo state")?;
        ctx.translate(0.0, self.input_state.toolbar.height() as f64);
        crate::draw::render_scene(&ctx, &self.input_state.scene).context("Failed to render scene")?;
        ctx.restore().context("Failed to restore Cairo state")?;

        crate::ui::render_toolbar(&ctx, &self.input_state, &self.config.ui.toolbar_style);

        if self.input_state.show_help {
            crate::ui::render_help_overlay(
                &ctx,
                &self.config.ui.help_overlay_style,
                width as i32,
                height as i32,
            );
        }

        cairo_surface.flush();
        drop(ctx);
        drop(cairo_surface);

        let wl_surface = self
            .surface
            .window()
            .context("Window not created")?
            .wl_surface();
        wl_surface.attach(Some(buffer.wl_buffer()), 0, 0);
        wl_surface.damage_buffer(0, 0, width as i32, height as i32);
        wl_surface.frame(qh, wl_surface.clone());
        wl_surface.commit();
        debug!("=== RENDER COMPLETE ===");

        Ok(())
    }

    /// Performs a save requested through the keyboard or the toolbar.
    ///
    /// Failures are reported in the toolbar and as a notification; drawing
    /// continues either way.
    pub(super) fn process_pending_export(&mut self) {
        if !self.input_state.take_pending_export() {
            return;
        }

        let settings = ExportSettings {
            format: self.input_state.export_format,
            ..self.export_settings.clone()
        };

        match export::export_scene(&self.input_state.scene, &settings) {
            Ok(path) => {
                info!("Drawing saved to {}", path.display());
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.input_state.set_status_message(format!("Saved {}", name));
                if settings.notify {
                    notification::notify_export_saved(&self.tokio_handle, &path);
                }
            }
            Err(e) => {
                warn!("Failed to save drawing: {}", e);
                self.input_state.set_status_message("Save failed");
                if settings.notify {
                    notification::notify_export_failed(&self.tokio_handle, &e.to_string());
                }
            }
        }
    }
}
