use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::coords::Viewport;
use crate::device::Gpu;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Call order per window: `on_surface_created`, then `on_surface_resized`
/// with the initial size, then `on_frame` per redraw interleaved with
/// further resizes and window events.
pub trait App {
    /// Called once after the GPU surface is configured.
    fn on_surface_created(&mut self, gpu: &Gpu<'_>) {
        let _ = gpu;
    }

    /// Called whenever the surface is reconfigured to a new size.
    ///
    /// Zero-sized surfaces (minimized windows) are never forwarded.
    fn on_surface_resized(&mut self, gpu: &Gpu<'_>, viewport: Viewport) {
        let _ = (gpu, viewport);
    }

    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
