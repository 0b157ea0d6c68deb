mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use learngl_engine::device::GpuInit;
use learngl_engine::logging::init_logging;
use learngl_engine::scene::{SceneApp, SceneRenderer};
use learngl_engine::window::Runtime;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.logging_config());

    let scene = args.scene_config();
    scene.validate().context("invalid scene configuration")?;
    log::info!(
        "starting {} scene ({:?}, near {}, far {})",
        scene.variant.name(),
        scene.orientation,
        scene.near,
        scene.far
    );

    let app = SceneApp::new(SceneRenderer::new(scene));
    Runtime::run(args.runtime_config(), GpuInit::default(), app)
}
