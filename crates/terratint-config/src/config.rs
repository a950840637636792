//! Top-level configuration with RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ColorsConfig;
use crate::error::ConfigError;

const CONFIG_FILE: &str = "colors.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Color overrides and block categories.
    pub colors: ColorsConfig,
    /// Tile rendering settings.
    pub render: RenderConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Elevation shading applied on top of resolved block colors.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum HeightmapKind {
    /// Alternating light and dark bands on even and odd heights.
    #[default]
    EvenOdd,
    /// No elevation shading.
    Off,
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Radius in blocks over which biome tints are averaged. `0` disables blending.
    pub biome_blend: u32,
    /// Elevation shading mode.
    pub heightmap: HeightmapKind,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            biome_blend: 3,
            heightmap: HeightmapKind::EvenOdd,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Parse a config from RON text.
    pub fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(ConfigError::ParseError)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config = Self::from_ron_str(&contents)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `colors.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    ///
    /// Color tables are only read at world load, so callers rebuild their
    /// registries from the returned config.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config = Self::from_ron_str(&contents)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HexColor;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("biome_blend: 3"));
        assert!(ron_str.contains("#8DB360"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized = Config::from_ron_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config = Config::from_ron_str("(render: (biome_blend: 0))").unwrap();
        assert_eq!(config.render.biome_blend, 0);
        assert_eq!(config.render.heightmap, HeightmapKind::EvenOdd);
        assert_eq!(config.debug, DebugConfig::default());
        assert_eq!(config.colors, ColorsConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        assert!(Config::from_ron_str("(future_setting: true)").is_ok());
    }

    #[test]
    fn test_heightmap_kind_parses() {
        let config = Config::from_ron_str("(render: (heightmap: Off))").unwrap();
        assert_eq!(config.render.heightmap, HeightmapKind::Off);
    }

    #[test]
    fn test_malformed_color_is_parse_error() {
        let result = Config::from_ron_str(
            r##"(colors: (biomes: (water: {"minecraft:river": "#blue"})))"##,
        );
        match result {
            Err(ConfigError::ParseError(e)) => {
                assert!(e.to_string().contains("malformed color"), "{e}")
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.render.biome_blend = 5;
        config
            .colors
            .biomes
            .water
            .insert("minecraft:river".to_string(), HexColor(0x3F76E4));

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.render.biome_blend = 1;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().render.biome_blend, 1);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        assert!(Config::from_ron_str("{{not valid}}").is_err());
    }
}
