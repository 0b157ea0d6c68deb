//! Scenes driven by the surface lifecycle.
//!
//! A scene sees three callbacks from the host:
//! - `surface_created` once the GPU surface exists (build pipelines, upload data)
//! - `surface_changed` on every size change, including the initial size
//! - `draw_frame` once per redraw
//!
//! [`SceneApp`] adapts any [`Scene`] to the runtime's [`App`](crate::core::App)
//! contract.

mod app;
mod config;
mod renderer;

pub use app::SceneApp;
pub use config::{SceneConfig, SceneVariant};
pub use renderer::SceneRenderer;

use crate::coords::Viewport;
use crate::render::{RenderCtx, RenderTarget};

/// Surface lifecycle callbacks.
pub trait Scene {
    fn surface_created(&mut self, ctx: &RenderCtx<'_>);

    /// The runtime never passes a zero-sized `viewport`, but scenes driven
    /// by other hosts should still tolerate one.
    fn surface_changed(&mut self, ctx: &RenderCtx<'_>, viewport: Viewport);

    fn draw_frame(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>);
}
