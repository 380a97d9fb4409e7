// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::DemoConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "planet-demo")]
#[command(about = "Procedurally generated rotating planet", long_about = None)]
pub struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Sphere radius
    #[arg(long)]
    pub radius: Option<f32>,

    /// Longitude divisions (minimum 3)
    #[arg(long)]
    pub slices: Option<u32>,

    /// Latitude divisions (minimum 2)
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Texture image path (checkerboard if omitted)
    #[arg(long)]
    pub texture: Option<PathBuf>,

    /// Rotation speed in degrees per second
    #[arg(long)]
    pub spin: Option<f32>,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Resolves the effective config: file (or defaults), then flag overrides.
    pub fn resolve_config(&self) -> anyhow::Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };

        if let Some(radius) = self.radius {
            config.radius = radius;
        }
        if let Some(slices) = self.slices {
            config.slices = slices;
        }
        if let Some(stacks) = self.stacks {
            config.stacks = stacks;
        }
        if let Some(texture) = &self.texture {
            config.texture = Some(texture.clone());
        }
        if let Some(spin) = self.spin {
            config.spin_degrees_per_second = spin;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from(["planet-demo", "--radius", "3.0", "--slices", "12"]);
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.radius, 3.0);
        assert_eq!(config.slices, 12);
        assert_eq!(config.stacks, 32);
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = Cli::parse_from(["planet-demo"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config, DemoConfig::default());
        assert!(!cli.no_ui);
    }

    #[test]
    fn test_no_ui_flag() {
        let cli = Cli::parse_from(["planet-demo", "--no-ui"]);
        assert!(cli.no_ui);
    }
}
