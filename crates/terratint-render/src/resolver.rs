//! Final color resolution for a single ground position.

use terratint_biome::{Biome, BiomeColorRegistry, BiomeId};
use terratint_color::{lerp_rgb, mix, rgb};

use crate::{
    BlockKind, BlockRegistry, BlockState, ChunkAccess, MAX_BLEND_RADIUS, PowerColors,
    SpecialBlock, sample_neighbors,
};

const WHEAT_YOUNG: u32 = 0x007C00;
const WHEAT_RIPE: u32 = 0xDCBB65;

const COCOA_SMALL: u32 = 0x6A682E;
const COCOA_MEDIUM: u32 = 0x654721;
const COCOA_RIPE: u32 = 0x703715;

const FARMLAND_WET: u32 = 0x512C0F;
const FARMLAND_DRY: u32 = 0x8E6646;
const FARMLAND_WET_MOISTURE: u8 = 7;

/// Resolves block colors against immutable block and biome registries.
///
/// The resolver only borrows its inputs, so one instance can be shared by
/// any number of worker threads once the registries are built.
#[derive(Clone, Copy, Debug)]
pub struct BlockColorResolver<'a> {
    blocks: &'a BlockRegistry,
    biomes: &'a BiomeColorRegistry,
    power_colors: &'a PowerColors,
    blend_radius: i32,
}

static_assertions::assert_impl_all!(BlockColorResolver<'static>: Send, Sync);

impl<'a> BlockColorResolver<'a> {
    pub fn new(
        blocks: &'a BlockRegistry,
        biomes: &'a BiomeColorRegistry,
        power_colors: &'a PowerColors,
        blend_radius: u32,
    ) -> Self {
        let blend_radius = match i32::try_from(blend_radius) {
            Ok(radius) if radius <= MAX_BLEND_RADIUS => radius,
            _ => {
                tracing::warn!(
                    requested = blend_radius,
                    max = MAX_BLEND_RADIUS,
                    "biome blend radius too large, clamping"
                );
                MAX_BLEND_RADIUS
            }
        };
        tracing::trace!(
            blocks = blocks.len(),
            biomes = biomes.len(),
            blend_radius,
            "created block color resolver"
        );
        Self {
            blocks,
            biomes,
            power_colors,
            blend_radius,
        }
    }

    pub fn blend_radius(&self) -> i32 {
        self.blend_radius
    }

    /// Color of `state` at world column `(x, z)` in biome `biome`.
    ///
    /// Returns `0` for blocks that are hidden. Biome-tinted blocks are
    /// smoothed over neighboring columns read through `chunks`.
    ///
    /// # Panics
    ///
    /// Panics if `biome`, or a biome reported by `chunks`, was never
    /// registered.
    pub fn resolve<C>(&self, chunks: &C, biome: BiomeId, state: &BlockState, x: i32, z: i32) -> u32
    where
        C: ChunkAccess + ?Sized,
    {
        let def = self.blocks.get(state.block);
        let color = def.color;
        if color == 0 {
            return 0;
        }

        let biome = self.biomes.get(biome);
        match def.kind {
            BlockKind::Foliage => return mix(self.foliage_color(chunks, biome, x, z), color),
            BlockKind::Grass => return mix(self.grass_color(chunks, biome, x, z), color),
            BlockKind::Water => return self.water_color(chunks, biome, x, z),
            BlockKind::Plain => {}
        }

        match def.special {
            Some(special) => self.special_color(special, state),
            None => color,
        }
    }

    /// Neighbor-blended foliage tint around `(x, z)`.
    pub fn foliage_color<C>(&self, chunks: &C, biome: &Biome, x: i32, z: i32) -> u32
    where
        C: ChunkAccess + ?Sized,
    {
        sample_neighbors(chunks, self.biomes, biome, x, z, self.blend_radius, |b, _, _| {
            b.foliage()
        })
    }

    /// Neighbor-blended grass tint around `(x, z)`, each sample passed
    /// through its own biome's modifier.
    pub fn grass_color<C>(&self, chunks: &C, biome: &Biome, x: i32, z: i32) -> u32
    where
        C: ChunkAccess + ?Sized,
    {
        sample_neighbors(chunks, self.biomes, biome, x, z, self.blend_radius, |b, x, z| {
            b.grass(x, z)
        })
    }

    /// Neighbor-blended water tint around `(x, z)`.
    pub fn water_color<C>(&self, chunks: &C, biome: &Biome, x: i32, z: i32) -> u32
    where
        C: ChunkAccess + ?Sized,
    {
        sample_neighbors(chunks, self.biomes, biome, x, z, self.blend_radius, |b, _, _| {
            b.water()
        })
    }

    fn special_color(&self, special: SpecialBlock, state: &BlockState) -> u32 {
        match special {
            SpecialBlock::Stem => {
                let age = u32::from(state.age);
                rgb(age << 5, 255u32.wrapping_sub(age << 3) & 0xFF, age << 2)
            }
            SpecialBlock::Wheat => {
                lerp_rgb(WHEAT_YOUNG, WHEAT_RIPE, (f32::from(state.age) + 1.0) / 8.0)
            }
            SpecialBlock::RedstoneWire => self.power_colors.color(state.power),
            SpecialBlock::Cocoa => match state.age {
                0 => COCOA_SMALL,
                1 => COCOA_MEDIUM,
                _ => COCOA_RIPE,
            },
            SpecialBlock::Farmland => {
                if state.moisture >= FARMLAND_WET_MOISTURE {
                    FARMLAND_WET
                } else {
                    FARMLAND_DRY
                }
            }
        }
    }
}
