use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::camera::{CameraMode, PITCH, SENSITIVITY, SPEED, YAW, ZOOM};
use crate::cli::Cli;

/// Initial camera state, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub world_up: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
    pub mode: CameraMode,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            world_up: [0.0, 1.0, 0.0],
            yaw: YAW,
            pitch: PITCH,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
            mode: CameraMode::Fps,
        }
    }
}

impl CameraSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).context("Invalid camera settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera settings: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In {}", path.display()))
    }

    /// File values first, then whatever flags were given on the command line
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(mode) = cli.mode {
            settings.mode = mode.into();
        }
        if let Some(speed) = cli.speed {
            settings.movement_speed = speed;
        }
        if let Some(sensitivity) = cli.sensitivity {
            settings.mouse_sensitivity = sensitivity;
        }
        if let Some(fov) = cli.fov {
            settings.zoom = fov;
        }

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.world_up.iter().all(|c| *c == 0.0) {
            anyhow::bail!("world_up must not be the zero vector");
        }
        let scalars = [self.yaw, self.pitch, self.movement_speed, self.mouse_sensitivity, self.zoom];
        for value in self.position.iter().chain(&self.world_up).chain(&scalars) {
            if !value.is_finite() {
                anyhow::bail!("camera settings must be finite numbers");
            }
        }
        Ok(())
    }
}
