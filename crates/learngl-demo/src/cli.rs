use clap::{Parser, ValueEnum};

use learngl_engine::logging::LoggingConfig;
use learngl_engine::projection::OrientationMode;
use learngl_engine::scene::{SceneConfig, SceneVariant};
use learngl_engine::window::RuntimeConfig;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum SceneArg {
    /// Clear to white and draw the colored triangle.
    Triangle,
    /// Clear to white only.
    ClearOnly,
}

impl From<SceneArg> for SceneVariant {
    fn from(arg: SceneArg) -> Self {
        match arg {
            SceneArg::Triangle => SceneVariant::Triangle,
            SceneArg::ClearOnly => SceneVariant::ClearOnly,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum OrientationArg {
    Portrait,
    Landscape,
    /// Follow the window's aspect on every resize.
    Auto,
}

impl From<OrientationArg> for OrientationMode {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => OrientationMode::Portrait,
            OrientationArg::Landscape => OrientationMode::Landscape,
            OrientationArg::Auto => OrientationMode::Auto,
        }
    }
}

/// Draws a vertex-colored triangle through an orthographic camera.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    #[arg(long, value_enum, default_value_t = SceneArg::Triangle)]
    pub scene: SceneArg,

    #[arg(long, value_enum, default_value_t = OrientationArg::Portrait)]
    pub orientation: OrientationArg,

    /// Near clip plane distance.
    #[arg(long, default_value_t = 1.0)]
    pub near: f32,

    /// Far clip plane distance.
    #[arg(long, default_value_t = 10.0)]
    pub far: f32,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 480)]
    pub width: u32,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    #[arg(long, default_value = concat!(clap::crate_name!(), " ", clap::crate_version!()))]
    pub title: String,

    /// Log filter in `env_logger` syntax; overrides RUST_LOG.
    #[arg(long, env = "LEARNGL_LOG")]
    pub log: Option<String>,
}

impl Args {
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig::default()
            .with_variant(self.scene.into())
            .with_orientation(self.orientation.into())
            .with_clip_planes(self.near, self.far)
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig::default()
            .with_title(self.title.clone())
            .with_size(f64::from(self.width.max(1)), f64::from(self.height.max(1)))
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            env_filter: self.log.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("learngl-demo").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_reproduce_the_tutorial() {
        let args = parse(&[]);
        let scene = args.scene_config();
        assert_eq!(scene, SceneConfig::default());

        let runtime = args.runtime_config();
        assert_eq!((runtime.initial_size.width, runtime.initial_size.height), (480.0, 800.0));
        assert!(runtime.title.starts_with("learngl-demo"));
    }

    #[test]
    fn scene_and_orientation_flags() {
        let args = parse(&["--scene", "clear-only", "--orientation", "auto"]);
        let scene = args.scene_config();
        assert_eq!(scene.variant, SceneVariant::ClearOnly);
        assert_eq!(scene.orientation, OrientationMode::Auto);
    }

    #[test]
    fn clip_planes_pass_through_unvalidated() {
        let scene = parse(&["--near", "5", "--far", "2"]).scene_config();
        assert_eq!((scene.near, scene.far), (5.0, 2.0));
        assert!(scene.validate().is_err());
    }

    #[test]
    fn unknown_scene_is_rejected() {
        assert!(Args::try_parse_from(["learngl-demo", "--scene", "cube"]).is_err());
    }

    #[test]
    fn log_flag_sets_filter() {
        let args = parse(&["--log", "learngl_engine=trace"]);
        assert_eq!(args.logging_config().env_filter.as_deref(), Some("learngl_engine=trace"));
    }
}
