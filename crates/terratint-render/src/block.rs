//! Block registry: maps block keys to resolved map colors and coloring rules.
//!
//! Built once per world. Every per-key decision (configured color, tint
//! category, special-state rule) is made at registration so the resolver only
//! reads a [`BlockDef`] and matches on enums.

use rustc_hash::FxHashMap;
use terratint_config::BlockColorsConfig;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Compact handle for a registered block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u16);

/// Which biome tint, if any, a block takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlockKind {
    /// Uses its own color.
    #[default]
    Plain,
    /// Mixed with the biome foliage color.
    Foliage,
    /// Mixed with the biome grass color.
    Grass,
    /// Replaced by the biome water color.
    Water,
}

/// Blocks whose color depends on block state rather than biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpecialBlock {
    /// Melon and pumpkin stems, colored by age.
    Stem,
    /// Wheat, fading from green to gold with age.
    Wheat,
    /// Redstone wire, colored by power level.
    RedstoneWire,
    /// Cocoa pods, three colors by age.
    Cocoa,
    /// Farmland, dark when moist.
    Farmland,
}

impl SpecialBlock {
    /// Returns the state rule for `key`, if it has one.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "minecraft:melon_stem" | "minecraft:pumpkin_stem" => Some(Self::Stem),
            "minecraft:wheat" => Some(Self::Wheat),
            "minecraft:redstone_wire" => Some(Self::RedstoneWire),
            "minecraft:cocoa" => Some(Self::Cocoa),
            "minecraft:farmland" => Some(Self::Farmland),
            _ => None,
        }
    }
}

/// Everything the resolver needs to know about a block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockDef {
    /// Block key (e.g. "minecraft:grass_block").
    pub key: String,
    /// Color supplied by the host.
    pub native_color: u32,
    /// Color after configuration overrides. `0` hides the block.
    pub color: u32,
    /// Biome tint category.
    pub kind: BlockKind,
    /// State-dependent color rule.
    pub special: Option<SpecialBlock>,
    /// Never rendered.
    pub air: bool,
    /// Blended with the blocks beneath by the compositor.
    pub glass: bool,
}

/// A block plus the state properties the color rules read.
///
/// Properties the host does not report stay at `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockState {
    pub block: BlockId,
    /// Growth stage for crops, stems and cocoa.
    pub age: u8,
    /// Redstone power, `0..=15`.
    pub power: u8,
    /// Farmland moisture, `0..=7`.
    pub moisture: u8,
}

impl BlockState {
    /// A state with every property at zero.
    pub fn new(block: BlockId) -> Self {
        Self {
            block,
            age: 0,
            power: 0,
            moisture: 0,
        }
    }

    pub fn with_age(mut self, age: u8) -> Self {
        self.age = age;
        self
    }

    pub fn with_power(mut self, power: u8) -> Self {
        self.power = power;
        self
    }

    pub fn with_moisture(mut self, moisture: u8) -> Self {
        self.moisture = moisture;
        self
    }
}

/// Errors that can occur during block registration.
#[derive(Debug, Error)]
pub enum BlockRegistryError {
    /// A block with the same key has already been registered.
    #[error("duplicate block key: {0}")]
    DuplicateName(String),
    /// All 65 536 slots have been consumed.
    #[error("block registry is full (max 65536 blocks)")]
    RegistryFull,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Maps [`BlockId`] → [`BlockDef`] with O(1) lookup by index and by key.
#[derive(Debug)]
pub struct BlockRegistry {
    config: BlockColorsConfig,
    /// Dense array where `index == BlockId.0`.
    blocks: Vec<BlockDef>,
    key_to_id: FxHashMap<String, BlockId>,
}

static_assertions::assert_impl_all!(BlockRegistry: Send, Sync);

impl BlockRegistry {
    /// Creates an empty registry that applies `config` to every block registered.
    pub fn new(config: BlockColorsConfig) -> Self {
        Self {
            config,
            blocks: Vec::new(),
            key_to_id: FxHashMap::default(),
        }
    }

    /// Registers a host block and returns its assigned ID.
    ///
    /// The stored color is the configured override if present, otherwise
    /// `native_color`; air blocks always store `0`. Foliage takes precedence
    /// over grass, and grass over water, when a key is listed more than once.
    ///
    /// # Errors
    ///
    /// Returns [`BlockRegistryError::DuplicateName`] if `key` is already
    /// registered, or [`BlockRegistryError::RegistryFull`] if all slots are used.
    pub fn register(&mut self, key: &str, native_color: u32) -> Result<BlockId, BlockRegistryError> {
        if self.key_to_id.contains_key(key) {
            return Err(BlockRegistryError::DuplicateName(key.to_string()));
        }
        if self.blocks.len() > u16::MAX as usize {
            return Err(BlockRegistryError::RegistryFull);
        }

        let air = self.config.is_air(key);
        let color = if air {
            0
        } else {
            self.config.color(key).unwrap_or(native_color)
        };
        let kind = if self.config.is_foliage(key) {
            BlockKind::Foliage
        } else if self.config.is_grass(key) {
            BlockKind::Grass
        } else if self.config.is_water(key) {
            BlockKind::Water
        } else {
            BlockKind::Plain
        };

        let id = BlockId(self.blocks.len() as u16);
        self.blocks.push(BlockDef {
            key: key.to_string(),
            native_color,
            color,
            kind,
            special: SpecialBlock::from_key(key),
            air,
            glass: self.config.is_glass(key),
        });
        self.key_to_id.insert(key.to_string(), id);
        tracing::trace!(key, id = id.0, color, ?kind, "registered block");
        Ok(id)
    }

    /// Returns the definition for a given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range. IDs are only produced by the registry.
    pub fn get(&self, id: BlockId) -> &BlockDef {
        &self.blocks[id.0 as usize]
    }

    /// Returns the ID for a block key, or `None` if not registered.
    pub fn id_of(&self, key: &str) -> Option<BlockId> {
        self.key_to_id.get(key).copied()
    }

    /// Returns the configuration the registry applies.
    pub fn config(&self) -> &BlockColorsConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
