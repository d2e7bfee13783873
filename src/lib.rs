//! Library exports for reusing rasterpad subsystems.
//!
//! Exposes the drawing core (scene, renderer, gesture state machine) together
//! with configuration and export so that tools and integration tests can drive
//! a canvas without a compositor.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
