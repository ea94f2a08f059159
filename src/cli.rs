// cli.rs - Command-line interface configuration
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::camera::CameraMode;

#[derive(Parser, Debug, Clone)]
#[command(name = "fly-camera")]
#[command(about = "Free-fly / FPS camera viewer", long_about = None)]
pub struct Cli {
    /// Disable the egui overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Starting camera mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Movement speed in world units per second
    #[arg(long)]
    pub speed: Option<f32>,

    /// Degrees of rotation per pixel of mouse travel
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Starting field of view in degrees (clamped to 1..45)
    #[arg(long)]
    pub fov: Option<f32>,

    /// JSON file with initial camera settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Fps,
    Fly,
}

impl From<ModeArg> for CameraMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Fps => CameraMode::Fps,
            ModeArg::Fly => CameraMode::Fly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["fly-camera"]);
        assert!(!cli.no_ui);
        assert_eq!((cli.width, cli.height), (800, 600));
        assert!(cli.mode.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "fly-camera",
            "--no-ui",
            "--width",
            "1280",
            "--height",
            "720",
            "--mode",
            "fps",
            "--sensitivity",
            "0.2",
            "--config",
            "camera.json",
        ]);
        assert!(cli.no_ui);
        assert_eq!((cli.width, cli.height), (1280, 720));
        assert_eq!(cli.mode, Some(ModeArg::Fps));
        assert_eq!(cli.sensitivity, Some(0.2));
        assert_eq!(cli.config, Some(PathBuf::from("camera.json")));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["fly-camera", "--mode", "orbit"]).is_err());
    }
}
