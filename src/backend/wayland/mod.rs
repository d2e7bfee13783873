// Wayland backend: an xdg toplevel window painted from shm buffers with Cairo.
mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::WaylandBackend;
