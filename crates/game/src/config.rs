use std::path::Path;

use gridwalk_common::Viewport;
use gridwalk_world::{MapConfig, PlayerConfig};
use serde::{Deserialize, Serialize};

/// Errors from loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Initial window extents for the desktop app.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Full game configuration, loadable from a YAML file.
///
/// Every field has a default matching the built-in world, so a partial
/// file overrides only what it names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub map: MapConfig,
    pub player: PlayerConfig,
    /// Clear color behind the world, linear RGB.
    pub background: [f32; 3],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            map: MapConfig::default(),
            player: PlayerConfig::default(),
            background: [0.1, 0.1, 0.15],
        }
    }
}

impl GameConfig {
    /// Load a config from a YAML file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric constraints world construction relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map.tile_size <= 0.0 {
            return Err(ConfigError::Invalid(
                "map.tile_size must be positive".into(),
            ));
        }
        if self.map.chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "map.chunk_size must be positive".into(),
            ));
        }
        if self.map.extent < 0 {
            return Err(ConfigError::Invalid(
                "map.extent must be non-negative".into(),
            ));
        }
        if self.map.view_radius < 0 {
            return Err(ConfigError::Invalid(
                "map.view_radius must be non-negative".into(),
            ));
        }
        if self.player.size <= 0.0 {
            return Err(ConfigError::Invalid("player.size must be positive".into()));
        }
        if self.player.speed < 0.0 {
            return Err(ConfigError::Invalid(
                "player.speed must be non-negative".into(),
            ));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(
                "window extents must be positive".into(),
            ));
        }
        Ok(())
    }

    /// The configured window extents as a logical viewport.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window.width as f32, self.window.height as f32)
    }
}
