//! learngl engine crate.
//!
//! Orthographic projection, interleaved vertex packing and a single-window
//! wgpu runtime that drives a [`scene::Scene`] through its surface lifecycle.

pub mod camera;
pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod projection;
pub mod render;
pub mod scene;
pub mod time;
pub mod vertex;
pub mod window;
