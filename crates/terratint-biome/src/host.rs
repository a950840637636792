//! Registration of host-world biomes with configuration overrides applied.

use terratint_config::BiomeColorsConfig;

use crate::{Biome, BiomeColorRegistry, BiomeError, ClimateTables, GrassModifier};

/// Biome data as the host world reports it.
#[derive(Clone, Debug)]
pub struct HostBiome {
    /// Stable biome key.
    pub key: String,
    /// Host base temperature. Clamped to `[0, 1]` before table lookups.
    pub temperature: f64,
    /// Host downfall. Clamped to `[0, 1]` before table lookups.
    pub humidity: f64,
    /// Foliage color the host forces for this biome, if any.
    pub foliage_override: Option<u32>,
    /// Grass color the host forces for this biome, if any.
    pub grass_override: Option<u32>,
    /// Host water color.
    pub water: u32,
    /// Host grass tint rule.
    pub grass_modifier: GrassModifier,
}

impl HostBiome {
    /// Resolves final colors: configuration override, then host override,
    /// then the climate table default (water falls back to the host color).
    pub fn resolve(&self, config: &BiomeColorsConfig, tables: &ClimateTables) -> Biome {
        let temperature = self.temperature.clamp(0.0, 1.0);
        let humidity = self.humidity.clamp(0.0, 1.0);
        let key = self.key.as_str();

        let foliage_color = config
            .foliage(key)
            .or(self.foliage_override)
            .unwrap_or_else(|| tables.default_foliage_color(temperature, humidity));
        let grass_color = config
            .grass(key)
            .or(self.grass_override)
            .unwrap_or_else(|| tables.default_grass_color(temperature, humidity));

        Biome {
            key: self.key.clone(),
            base_color: config.base(key),
            foliage_color,
            grass_color,
            water_color: config.water(key).unwrap_or(self.water),
            grass_modifier: self.grass_modifier.clone(),
        }
    }
}

/// Registers every host biome into `registry`.
///
/// # Errors
///
/// Propagates [`BiomeError::RegistryFull`].
pub fn register_host_biomes<'a>(
    registry: &mut BiomeColorRegistry,
    config: &BiomeColorsConfig,
    tables: &ClimateTables,
    biomes: impl IntoIterator<Item = &'a HostBiome>,
) -> Result<(), BiomeError> {
    for host in biomes {
        registry.register(host.resolve(config, tables))?;
    }
    tracing::debug!(count = registry.len(), "registered host biomes");
    Ok(())
}

#[cfg(test)]
mod tests {
    use terratint_color::rgb;
    use terratint_config::HexColor;

    use super::*;

    fn tables() -> ClimateTables {
        ClimateTables::from_fn(|x, y| rgb(x, y, 1), |x, y| rgb(x, y, 2))
    }

    fn host(key: &str) -> HostBiome {
        HostBiome {
            key: key.into(),
            temperature: 0.8,
            humidity: 0.4,
            foliage_override: None,
            grass_override: None,
            water: 0x3F76E4,
            grass_modifier: GrassModifier::none(),
        }
    }

    fn empty_config() -> BiomeColorsConfig {
        BiomeColorsConfig {
            colors: Default::default(),
            foliage: Default::default(),
            grass: Default::default(),
            water: Default::default(),
        }
    }

    #[test]
    fn test_defaults_come_from_tables() {
        let tables = tables();
        let biome = host("minecraft:plains").resolve(&empty_config(), &tables);
        assert_eq!(biome.foliage_color, tables.default_foliage_color(0.8, 0.4));
        assert_eq!(biome.grass_color, tables.default_grass_color(0.8, 0.4));
        assert_eq!(biome.water_color, 0x3F76E4);
        assert_eq!(biome.base_color, 0);
    }

    #[test]
    fn test_host_override_beats_table() {
        let mut h = host("minecraft:swamp");
        h.foliage_override = Some(0x6A7039);
        h.grass_override = Some(0x6A7039);
        let biome = h.resolve(&empty_config(), &tables());
        assert_eq!(biome.foliage_color, 0x6A7039);
        assert_eq!(biome.grass_color, 0x6A7039);
    }

    #[test]
    fn test_config_override_beats_host() {
        let mut config = empty_config();
        config.foliage.insert("minecraft:swamp".into(), HexColor(0x123456));
        config.water.insert("minecraft:swamp".into(), HexColor(0x617B64));
        config.colors.insert("minecraft:swamp".into(), HexColor(0x07F9B2));

        let mut h = host("minecraft:swamp");
        h.foliage_override = Some(0x6A7039);
        let biome = h.resolve(&config, &tables());
        assert_eq!(biome.foliage_color, 0x123456);
        assert_eq!(biome.water_color, 0x617B64);
        assert_eq!(biome.base_color, 0x07F9B2);
    }

    #[test]
    fn test_climate_is_clamped() {
        let tables = tables();
        let mut h = host("minecraft:nether_wastes");
        h.temperature = 2.0;
        h.humidity = -1.0;
        let biome = h.resolve(&empty_config(), &tables);
        assert_eq!(biome.grass_color, tables.default_grass_color(1.0, 0.0));
        assert_ne!(biome.grass_color, 0);
    }

    #[test]
    fn test_register_host_biomes() {
        let mut registry = BiomeColorRegistry::new();
        let hosts = [host("minecraft:plains"), host("minecraft:badlands")];
        register_host_biomes(
            &mut registry,
            &BiomeColorsConfig::default(),
            &tables(),
            &hosts,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("minecraft:badlands").grass_color, 0x90814D);
        assert_eq!(registry.lookup("minecraft:plains").base_color, 0x8DB360);
    }
}
