//! Biome color record and the per-biome grass tint rule.

use std::fmt;
use std::sync::Arc;

/// Host-supplied grass tint rule: `(x, z, base_grass_color) -> color`.
///
/// Bound to a biome at registration time and evaluated for every grass
/// sample, so it must be cheap and thread-safe.
#[derive(Clone)]
pub struct GrassModifier(Arc<dyn Fn(i32, i32, u32) -> u32 + Send + Sync>);

impl GrassModifier {
    /// Wraps an arbitrary tint rule.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(i32, i32, u32) -> u32 + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Leaves the grass color unchanged.
    pub fn none() -> Self {
        Self::new(|_, _, color| color)
    }

    /// Darkens the grass color the way dark forests do.
    pub fn dark_forest() -> Self {
        Self::new(|_, _, color| ((color & 0xFE_FEFE) + 0x28_340A) >> 1)
    }

    /// Applies the rule at world column `(x, z)`.
    #[inline]
    pub fn apply(&self, x: i32, z: i32, color: u32) -> u32 {
        (self.0)(x, z, color)
    }
}

impl Default for GrassModifier {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for GrassModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GrassModifier(..)")
    }
}

/// Tint colors for a single biome.
///
/// All colors are packed `0x00RRGGBB`. A record is built whole and handed to
/// the registry, which never exposes it mutably afterwards.
#[derive(Clone, Debug)]
pub struct Biome {
    /// Stable biome key (e.g., "minecraft:plains").
    pub key: String,
    /// Identification color used by biome legend layers.
    pub base_color: u32,
    /// Leaf tint.
    pub foliage_color: u32,
    /// Grass tint before the modifier is applied.
    pub grass_color: u32,
    /// Water tint.
    pub water_color: u32,
    /// Per-column grass tint rule.
    pub grass_modifier: GrassModifier,
}

impl Biome {
    pub fn foliage(&self) -> u32 {
        self.foliage_color
    }

    /// Grass tint at world column `(x, z)` after the biome's modifier.
    pub fn grass(&self, x: i32, z: i32) -> u32 {
        self.grass_modifier.apply(x, z, self.grass_color)
    }

    pub fn water(&self) -> u32 {
        self.water_color
    }
}
