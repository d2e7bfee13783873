// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    output::OutputState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        xdg::{XdgShell, window::WindowDecorations},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{
    backend::StartupOptions,
    config::Config,
    draw::Scene,
    input::{InputState, Selection},
};

const APP_ID: &str = "rasterpad";
const MIN_WIDTH: u32 = 320;
const MIN_HEIGHT: u32 = 240;
const MAX_RENDER_FAILURES: u32 = 10;

/// Loads the config named on the command line, or the default one.
///
/// A broken config file is not fatal; the defaults are used instead.
fn load_config(options: &StartupOptions) -> Config {
    let loaded = match &options.config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config: {:#}. Using defaults.", e);
            Config::default()
        }
    }
}

/// Builds the input state (scene, selection, toolbar) from config and CLI overrides.
fn build_input_state(config: &Config, options: &StartupOptions) -> Result<InputState> {
    let backing = options.backing.unwrap_or(config.canvas.backing);
    let selection = Selection {
        tool: options.tool.unwrap_or(config.drawing.default_tool),
        color: options.color.unwrap_or(config.drawing.default_color),
    };

    let toolbar_height = config.ui.toolbar_height;
    let scene = Scene::new(
        backing,
        config.canvas.initial_width,
        config.canvas.initial_height - toolbar_height,
        config.render_style(),
    )
    .context("Failed to create canvas")?;

    let action_map = config
        .keybindings
        .build_action_map()
        .map_err(anyhow::Error::msg)
        .context("Invalid keybindings")?;

    Ok(InputState::new(
        scene,
        selection,
        toolbar_height,
        config.export.format,
        action_map,
    ))
}

/// Wayland backend state
pub struct WaylandBackend {
    options: StartupOptions,
    /// Tokio runtime for export notifications
    tokio_runtime: tokio::runtime::Runtime,
}

impl WaylandBackend {
    pub fn new(options: StartupOptions) -> Result<Self> {
        let tokio_runtime = tokio::runtime::Runtime::new()
            .context("Failed to create Tokio runtime for notifications")?;
        Ok(Self {
            options,
            tokio_runtime,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let xdg_shell = XdgShell::bind(&globals, &qh).context("xdg_wm_base not available")?;
        debug!("Bound xdg shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let output_state = OutputState::new(&globals, &qh);
        let seat_state = SeatState::new(&globals, &qh);
        let registry_state = RegistryState::new(&globals);

        let config = load_config(&self.options);
        info!("Configuration loaded");
        debug!("  Backing: {}", config.canvas.backing);
        debug!("  Stroke width: {:.1}px", config.drawing.stroke_width);
        debug!(
            "  Initial size: {}x{}",
            config.canvas.initial_width, config.canvas.initial_height
        );
        debug!("  Toolbar height: {}", config.ui.toolbar_height);

        let input_state = build_input_state(&config, &self.options)?;
        info!(
            "Canvas ready ({} backing, {}x{})",
            input_state.scene.backing_mode(),
            input_state.scene.width(),
            input_state.scene.height()
        );

        let tokio_handle = self.tokio_runtime.handle().clone();

        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            output_state,
            seat_state,
            config,
            input_state,
            tokio_handle,
        );

        info!("Creating toplevel window");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let window =
            state
                .xdg_shell
                .create_window(wl_surface, WindowDecorations::RequestServer, &qh);
        window.set_title("rasterpad");
        window.set_app_id(APP_ID);
        window.set_min_size(Some((MIN_WIDTH, MIN_HEIGHT)));

        // Initial commit without a buffer; the first configure tells us the size.
        window.commit();

        state.surface.set_window(window);
        info!("Toplevel window created");

        let mut consecutive_render_failures = 0u32;

        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            if state.input_state.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            if let Err(e) = event_queue.blocking_dispatch(&mut state) {
                warn!("Event queue error: {}", e);
                loop_error = Some(anyhow::anyhow!("Wayland event queue error: {}", e));
                break;
            }

            if state.input_state.should_exit {
                info!("Exit requested after dispatch, breaking event loop");
                break;
            }

            state.process_pending_export();

            // Throttle to the display refresh rate via frame callbacks.
            let can_render = state.surface.is_configured()
                && state.input_state.needs_redraw()
                && !state.surface.frame_callback_pending();

            if can_render {
                match state.render(&qh) {
                    Ok(()) => {
                        consecutive_render_failures = 0;
                        state.input_state.mark_rendered();
                        state.surface.set_frame_callback_pending(true);
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {:#}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            return Err(anyhow::anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                        }

                        // Avoid spinning on the same failure
                        state.input_state.mark_rendered();
                    }
                }
            } else if state.input_state.needs_redraw() && state.surface.frame_callback_pending() {
                debug!("Main loop: Skipping render - frame callback already pending");
            }
        }

        info!("Wayland backend exiting");

        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
