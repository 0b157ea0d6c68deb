use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use crate::coords::Viewport;
use crate::core::{App, AppControl, FrameCtx};
use crate::device::Gpu;

use super::Scene;

/// Runs a [`Scene`] under the window runtime.
pub struct SceneApp<S> {
    scene: S,
    exit_on_escape: bool,
}

impl<S: Scene> SceneApp<S> {
    pub fn new(scene: S) -> Self {
        Self {
            scene,
            exit_on_escape: true,
        }
    }

    pub fn exit_on_escape(mut self, enabled: bool) -> Self {
        self.exit_on_escape = enabled;
        self
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn into_scene(self) -> S {
        self.scene
    }
}

fn is_exit_key(key: PhysicalKey, state: ElementState) -> bool {
    state == ElementState::Pressed && key == PhysicalKey::Code(KeyCode::Escape)
}

impl<S: Scene> App for SceneApp<S> {
    fn on_surface_created(&mut self, gpu: &Gpu<'_>) {
        self.scene.surface_created(&gpu.render_ctx());
    }

    fn on_surface_resized(&mut self, gpu: &Gpu<'_>, viewport: Viewport) {
        self.scene.surface_changed(&gpu.render_ctx(), viewport);
    }

    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if self.exit_on_escape && is_exit_key(event.physical_key, event.state) =>
            {
                log::info!("escape pressed; exiting");
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.time.frame_index == 0 {
            log::debug!("first frame for window {:?}", ctx.window.id);
        }

        let scene = &mut self.scene;
        ctx.render(|rctx, target| scene.draw_frame(rctx, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{SceneConfig, SceneRenderer};

    #[test]
    fn only_escape_press_exits() {
        let esc = PhysicalKey::Code(KeyCode::Escape);
        assert!(is_exit_key(esc, ElementState::Pressed));
        assert!(!is_exit_key(esc, ElementState::Released));
        assert!(!is_exit_key(PhysicalKey::Code(KeyCode::KeyQ), ElementState::Pressed));
    }

    #[test]
    fn wraps_scene_without_touching_it() {
        let app = SceneApp::new(SceneRenderer::new(SceneConfig::default())).exit_on_escape(false);
        assert!(!app.exit_on_escape);
        let scene = app.into_scene();
        assert_eq!(scene.vertices().len(), 84);
    }
}
