//! Color override tables and block category lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::HexColor;
use crate::block_palette::BLOCK_COLORS;

/// All user-editable color settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorsConfig {
    /// Per-block colors and category lists.
    pub blocks: BlockColorsConfig,
    /// Per-biome colors.
    pub biomes: BiomeColorsConfig,
}

/// Block color overrides and coloring categories.
///
/// Blocks not listed in `colors` keep the host's native color. A color of
/// `#000000` makes a block invisible on the map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BlockColorsConfig {
    /// Block key -> override color.
    pub colors: BTreeMap<String, HexColor>,
    /// Blocks that are never rendered.
    pub air: Vec<String>,
    /// Blocks tinted with the biome foliage color.
    pub foliage: Vec<String>,
    /// Blocks the compositor blends with whatever lies beneath.
    pub glass: Vec<String>,
    /// Blocks tinted with the biome grass color.
    pub grass: Vec<String>,
    /// Blocks tinted with the biome water color.
    pub water: Vec<String>,
}

/// Biome color overrides. Every map is independently optional per entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BiomeColorsConfig {
    /// Biome key -> base color used to identify the biome on legend layers.
    pub colors: BTreeMap<String, HexColor>,
    /// Biome key -> foliage color override.
    pub foliage: BTreeMap<String, HexColor>,
    /// Biome key -> grass color override.
    pub grass: BTreeMap<String, HexColor>,
    /// Biome key -> water color override.
    pub water: BTreeMap<String, HexColor>,
}

impl BlockColorsConfig {
    /// Returns the configured override for `key`, if any.
    pub fn color(&self, key: &str) -> Option<u32> {
        self.colors.get(key).map(|c| c.0)
    }

    pub fn is_air(&self, key: &str) -> bool {
        self.air.iter().any(|k| k == key)
    }

    pub fn is_foliage(&self, key: &str) -> bool {
        self.foliage.iter().any(|k| k == key)
    }

    pub fn is_glass(&self, key: &str) -> bool {
        self.glass.iter().any(|k| k == key)
    }

    pub fn is_grass(&self, key: &str) -> bool {
        self.grass.iter().any(|k| k == key)
    }

    pub fn is_water(&self, key: &str) -> bool {
        self.water.iter().any(|k| k == key)
    }
}

impl BiomeColorsConfig {
    /// Base color for `key`, `0` when not configured.
    pub fn base(&self, key: &str) -> u32 {
        self.colors.get(key).map_or(0, |c| c.0)
    }

    pub fn foliage(&self, key: &str) -> Option<u32> {
        self.foliage.get(key).map(|c| c.0)
    }

    pub fn grass(&self, key: &str) -> Option<u32> {
        self.grass.get(key).map(|c| c.0)
    }

    pub fn water(&self, key: &str) -> Option<u32> {
        self.water.get(key).map(|c| c.0)
    }
}

// --- Defaults ---

const AIR_BLOCKS: &[&str] = &["minecraft:air", "minecraft:cave_air", "minecraft:void_air"];

// Birch and spruce leaves carry fixed colors and are left out on purpose.
const FOLIAGE_BLOCKS: &[&str] = &[
    "minecraft:acacia_leaves",
    "minecraft:dark_oak_leaves",
    "minecraft:jungle_leaves",
    "minecraft:mangrove_leaves",
    "minecraft:oak_leaves",
];

const GLASS_BLOCKS: &[&str] = &["minecraft:glass"];

const GRASS_BLOCKS: &[&str] = &[
    "minecraft:fern",
    "minecraft:grass",
    "minecraft:grass_block",
    "minecraft:large_fern",
    "minecraft:pink_petals",
    "minecraft:potted_fern",
    "minecraft:tall_grass",
];

const WATER_BLOCKS: &[&str] = &[
    "minecraft:water",
    "minecraft:bubble_column",
    "minecraft:water_cauldron",
    "minecraft:kelp",
    "minecraft:kelp_plant",
    "minecraft:tube_coral",
    "minecraft:brain_coral",
    "minecraft:bubble_coral",
    "minecraft:fire_coral",
    "minecraft:horn_coral",
    "minecraft:tube_coral_fan",
    "minecraft:brain_coral_fan",
    "minecraft:bubble_coral_fan",
    "minecraft:fire_coral_fan",
    "minecraft:horn_coral_fan",
    "minecraft:tube_coral_wall_fan",
    "minecraft:brain_coral_wall_fan",
    "minecraft:bubble_coral_wall_fan",
    "minecraft:fire_coral_wall_fan",
    "minecraft:horn_coral_wall_fan",
    "minecraft:sea_pickle",
    "minecraft:seagrass",
    "minecraft:tall_seagrass",
];

const BIOME_BASE_COLORS: &[(&str, u32)] = &[
    ("minecraft:badlands", 0xD94515),
    ("minecraft:bamboo_jungle", 0x768E14),
    ("minecraft:basalt_deltas", 0x403636),
    ("minecraft:beach", 0xFADE55),
    ("minecraft:birch_forest", 0x307444),
    ("minecraft:cold_ocean", 0x202070),
    ("minecraft:crimson_forest", 0xDD0808),
    ("minecraft:dark_forest", 0x40511A),
    ("minecraft:deep_cold_ocean", 0x202038),
    ("minecraft:deep_dark", 0x0E252A),
    ("minecraft:deep_frozen_ocean", 0x404090),
    ("minecraft:deep_lukewarm_ocean", 0x000040),
    ("minecraft:deep_ocean", 0x000030),
    ("minecraft:desert", 0xFA9418),
    ("minecraft:dripstone_caves", 0x888888),
    ("minecraft:end_barrens", 0x8080FF),
    ("minecraft:end_highlands", 0x8080FF),
    ("minecraft:end_midlands", 0x8080FF),
    ("minecraft:eroded_badlands", 0xFF6D3D),
    ("minecraft:flower_forest", 0x2D8E49),
    ("minecraft:forest", 0x056621),
    ("minecraft:frozen_ocean", 0x7070D6),
    ("minecraft:frozen_peaks", 0xA0A0A0),
    ("minecraft:frozen_river", 0xA0A0FF),
    ("minecraft:grove", 0x888888),
    ("minecraft:ice_spikes", 0xB4DCDC),
    ("minecraft:jagged_peaks", 0xA0A0A0),
    ("minecraft:jungle", 0x537B09),
    ("minecraft:lukewarm_ocean", 0x000090),
    ("minecraft:lush_caves", 0x7BA331),
    ("minecraft:mangrove_swamp", 0x67352B),
    ("minecraft:meadow", 0x2C4205),
    ("minecraft:mushroom_fields", 0xFF00FF),
    ("minecraft:nether_wastes", 0xBF3B3B),
    ("minecraft:ocean", 0x000070),
    ("minecraft:old_growth_birch_forest", 0x307444),
    ("minecraft:old_growth_pine_taiga", 0x596651),
    ("minecraft:old_growth_spruce_taiga", 0x818E79),
    ("minecraft:plains", 0x8DB360),
    ("minecraft:river", 0x0000FF),
    ("minecraft:savanna", 0xBDB25F),
    ("minecraft:savanna_plateau", 0xA79D64),
    ("minecraft:small_end_islands", 0x8080FF),
    ("minecraft:snowy_beach", 0xFAF0C0),
    ("minecraft:snowy_plains", 0xFFFFFF),
    ("minecraft:snowy_slopes", 0xA0A0A0),
    ("minecraft:snowy_taiga", 0x31554A),
    ("minecraft:soul_sand_valley", 0x5E3830),
    ("minecraft:sparse_jungle", 0x628B17),
    ("minecraft:stony_peaks", 0x888888),
    ("minecraft:stony_shore", 0xA2A284),
    ("minecraft:sunflower_plains", 0xB5DB88),
    ("minecraft:swamp", 0x07F9B2),
    ("minecraft:taiga", 0x0B6659),
    ("minecraft:the_end", 0x8080FF),
    ("minecraft:the_void", 0x000000),
    ("minecraft:warm_ocean", 0x0000AC),
    ("minecraft:warped_forest", 0x49907B),
    ("minecraft:windswept_forest", 0x589C6C),
    ("minecraft:windswept_gravelly_hills", 0x789878),
    ("minecraft:windswept_hills", 0x597D72),
    ("minecraft:windswept_savanna", 0xE5DA87),
    ("minecraft:wooded_badlands", 0xB09765),
];

const BIOME_FOLIAGE_COLORS: &[(&str, u32)] = &[
    ("minecraft:badlands", 0x9E814D),
    ("minecraft:bamboo_jungle", 0x1F8907),
    ("minecraft:dark_forest", 0x1C7B07),
    ("minecraft:eroded_badlands", 0x9E814D),
    ("minecraft:jungle", 0x1F8907),
    ("minecraft:mangrove_swamp", 0x8DB127),
    ("minecraft:sparse_jungle", 0x1F8907),
    ("minecraft:swamp", 0x6A7039),
    ("minecraft:wooded_badlands", 0x9E814D),
];

const BIOME_GRASS_COLORS: &[(&str, u32)] = &[
    ("minecraft:badlands", 0x90814D),
    ("minecraft:wooded_badlands", 0x90814D),
    ("minecraft:eroded_badlands", 0x90814D),
];

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

fn colors(table: &[(&str, u32)]) -> BTreeMap<String, HexColor> {
    table
        .iter()
        .map(|&(k, c)| (k.to_string(), HexColor(c)))
        .collect()
}

impl Default for BlockColorsConfig {
    fn default() -> Self {
        Self {
            colors: colors(BLOCK_COLORS),
            air: keys(AIR_BLOCKS),
            foliage: keys(FOLIAGE_BLOCKS),
            glass: keys(GLASS_BLOCKS),
            grass: keys(GRASS_BLOCKS),
            water: keys(WATER_BLOCKS),
        }
    }
}

impl Default for BiomeColorsConfig {
    fn default() -> Self {
        Self {
            colors: colors(BIOME_BASE_COLORS),
            foliage: colors(BIOME_FOLIAGE_COLORS),
            grass: colors(BIOME_GRASS_COLORS),
            water: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let blocks = BlockColorsConfig::default();
        assert!(blocks.is_foliage("minecraft:oak_leaves"));
        assert!(!blocks.is_foliage("minecraft:birch_leaves"));
        assert!(blocks.is_grass("minecraft:grass_block"));
        assert!(blocks.is_water("minecraft:seagrass"));
        assert!(blocks.is_air("minecraft:cave_air"));
        assert!(blocks.is_glass("minecraft:glass"));
        assert!(!blocks.is_water("minecraft:stone"));
    }

    #[test]
    fn test_invisible_blocks_are_black() {
        let blocks = BlockColorsConfig::default();
        for key in [
            "minecraft:barrier",
            "minecraft:acacia_button",
            "minecraft:yellow_wall_banner",
            "minecraft:stone_button",
        ] {
            assert_eq!(blocks.color(key), Some(0), "{key}");
        }
    }

    #[test]
    fn test_default_block_palette() {
        let blocks = BlockColorsConfig::default();
        assert_eq!(blocks.colors.len(), BLOCK_COLORS.len());
        assert_eq!(blocks.color("minecraft:andesite"), Some(0x888889));
        assert_eq!(blocks.color("minecraft:stone"), Some(0x7E7E7E));
        assert_eq!(blocks.color("minecraft:grass_block"), Some(0x7EA44D));
        assert_eq!(blocks.color("minecraft:wheat"), None);
    }

    #[test]
    fn test_default_biome_overrides() {
        let biomes = BiomeColorsConfig::default();
        assert_eq!(biomes.base("minecraft:plains"), 0x8DB360);
        assert_eq!(biomes.base("minecraft:not_a_biome"), 0);
        assert_eq!(biomes.foliage("minecraft:swamp"), Some(0x6A7039));
        assert_eq!(biomes.grass("minecraft:badlands"), Some(0x90814D));
        assert_eq!(biomes.grass("minecraft:plains"), None);
        assert_eq!(biomes.water("minecraft:ocean"), None);
    }

    #[test]
    fn test_partial_ron_keeps_other_defaults() {
        let ron_str = r##"(blocks: (colors: {"minecraft:stone": "#707070"}))"##;
        let config: ColorsConfig = ron::from_str(ron_str).unwrap();
        assert_eq!(config.blocks.color("minecraft:stone"), Some(0x707070));
        assert_eq!(config.blocks.color("minecraft:barrier"), None);
        assert!(config.blocks.is_grass("minecraft:grass_block"));
        assert_eq!(config.biomes, BiomeColorsConfig::default());
    }
}
