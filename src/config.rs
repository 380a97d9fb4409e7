use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Demo settings, loadable from a JSON file and overridable from the CLI.
///
/// Defaults reproduce the classic rotating-planet setup: a unit sphere at
/// 32x32 tessellation, scaled by 2, placed 10 units in front of the camera,
/// spinning at 10 degrees per second under one directional and one ambient
/// light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub radius: f32,
    pub slices: u32,
    pub stacks: u32,
    /// Texture image path; a procedural checkerboard is used when absent.
    pub texture: Option<PathBuf>,
    pub spin_degrees_per_second: f32,
    pub scale: [f32; 3],
    pub position: [f32; 3],
    pub directional_color: [f32; 4],
    pub directional_hpr: [f32; 3],
    pub ambient_color: [f32; 4],
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            slices: 32,
            stacks: 32,
            texture: None,
            spin_degrees_per_second: 10.0,
            scale: [2.0, 2.0, 2.0],
            position: [0.0, 10.0, 0.0],
            directional_color: [0.8, 0.8, 0.8, 1.0],
            directional_hpr: [0.0, -60.0, 0.0],
            ambient_color: [0.2, 0.2, 0.2, 1.0],
            window_width: 800,
            window_height: 600,
        }
    }
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {path:?}"))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {path:?}"))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_demo() {
        let config = DemoConfig::default();
        assert_eq!(config.radius, 1.0);
        assert_eq!(config.slices, 32);
        assert_eq!(config.stacks, 32);
        assert_eq!(config.scale, [2.0, 2.0, 2.0]);
        assert_eq!(config.position, [0.0, 10.0, 0.0]);
        assert_eq!(config.spin_degrees_per_second, 10.0);
        assert_eq!(config.directional_hpr, [0.0, -60.0, 0.0]);
        assert!(config.texture.is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let config = DemoConfig {
            texture: Some(PathBuf::from("earth_texture.jpg")),
            slices: 48,
            ..DemoConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: DemoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let parsed: DemoConfig = serde_json::from_str(r#"{"radius": 2.5}"#).unwrap();
        assert_eq!(parsed.radius, 2.5);
        assert_eq!(parsed.slices, 32);
        assert_eq!(parsed.window_width, 800);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = DemoConfig::load("/nonexistent/planet.json").unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
