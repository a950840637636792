//! Neighbor blending: averages a per-position color over a square
//! neighborhood to soften seams between biomes.
//!
//! One routine serves foliage, grass and water; callers choose the layer by
//! passing the per-position color function.

use terratint_biome::{Biome, BiomeColorRegistry};
use terratint_color::{blue, green, red, rgb};

use crate::ChunkAccess;

/// Largest radius [`sample_neighbors`] will visit. Larger radii are clamped.
pub const MAX_BLEND_RADIUS: i32 = 64;

/// Averages `sampler` over the columns around `(x, z)`.
///
/// The seed sample `sampler(biome, x, z)` is always counted. With `radius < 1`
/// it is returned unchanged. Otherwise `radius` is capped at
/// [`MAX_BLEND_RADIUS`] and every offset in
/// `[-radius, radius) × [-radius, radius)` except the origin is visited:
/// columns whose chunk is unavailable are skipped, and a sampled color of `0`
/// means "no color" and is left out of the average. The result is the
/// truncated mean of red, green and blue with alpha cleared.
///
/// # Panics
///
/// Panics if `chunks` reports a biome id that `biomes` did not issue.
pub fn sample_neighbors<C, F>(
    chunks: &C,
    biomes: &BiomeColorRegistry,
    biome: &Biome,
    x: i32,
    z: i32,
    radius: i32,
    sampler: F,
) -> u32
where
    C: ChunkAccess + ?Sized,
    F: Fn(&Biome, i32, i32) -> u32,
{
    let color = sampler(biome, x, z);
    if radius < 1 {
        return color;
    }

    let radius = radius.min(MAX_BLEND_RADIUS);

    let mut r = u64::from(red(color));
    let mut g = u64::from(green(color));
    let mut b = u64::from(blue(color));
    let mut count = 1u64;

    for nx in x.saturating_sub(radius)..x.saturating_add(radius) {
        for nz in z.saturating_sub(radius)..z.saturating_add(radius) {
            if nx == x && nz == z {
                continue;
            }
            let Some(data) = chunks.block_data(nx >> 4, nz >> 4, nx, nz) else {
                continue;
            };
            let neighbor = sampler(biomes.get(data.biome), nx, nz);
            if neighbor > 0 {
                r += u64::from(red(neighbor));
                g += u64::from(green(neighbor));
                b += u64::from(blue(neighbor));
                count += 1;
            }
        }
    }

    // Each mean is at most 255.
    rgb(
        (r / count) as u32,
        (g / count) as u32,
        (b / count) as u32,
    )
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rustc_hash::FxHashMap;
    use terratint_biome::{BiomeId, GrassModifier};

    use super::*;
    use crate::{BlockData, BlockId, BlockState};

    #[derive(Default)]
    struct Columns {
        biomes: FxHashMap<(i32, i32), BiomeId>,
    }

    impl Columns {
        fn fill(biome: BiomeId, min: i32, max: i32) -> Self {
            let mut columns = Self::default();
            for x in min..=max {
                for z in min..=max {
                    columns.biomes.insert((x, z), biome);
                }
            }
            columns
        }
    }

    impl ChunkAccess for Columns {
        fn block_data(&self, chunk_x: i32, chunk_z: i32, x: i32, z: i32) -> Option<BlockData> {
            assert_eq!((chunk_x, chunk_z), (x >> 4, z >> 4));
            self.biomes.get(&(x, z)).map(|&biome| BlockData {
                biome,
                state: BlockState::new(BlockId(0)),
            })
        }
    }

    fn biome(key: &str, foliage: u32) -> Biome {
        Biome {
            key: key.into(),
            base_color: 0,
            foliage_color: foliage,
            grass_color: 0,
            water_color: 0,
            grass_modifier: GrassModifier::none(),
        }
    }

    fn registry() -> (BiomeColorRegistry, BiomeId, BiomeId, BiomeId) {
        let mut reg = BiomeColorRegistry::new();
        let a = reg.register(biome("a", rgb(100, 100, 100))).unwrap();
        let b = reg.register(biome("b", rgb(200, 0, 50))).unwrap();
        let none = reg.register(biome("none", 0)).unwrap();
        (reg, a, b, none)
    }

    #[test]
    fn test_radius_zero_returns_seed_untouched() {
        let (reg, _, b, _) = registry();
        let columns = Columns::fill(b, -8, 8);
        let seed = biome("seed", 0xFF12_3456);
        let color = sample_neighbors(&columns, &reg, &seed, 0, 0, 0, |b, _, _| b.foliage());
        assert_eq!(color, 0xFF12_3456);
    }

    #[test]
    fn test_radius_zero_never_touches_chunks() {
        let calls = Cell::new(0);
        struct Counting<'a>(&'a Cell<u32>);
        impl ChunkAccess for Counting<'_> {
            fn block_data(&self, _: i32, _: i32, _: i32, _: i32) -> Option<BlockData> {
                self.0.set(self.0.get() + 1);
                None
            }
        }
        let (reg, _, _, _) = registry();
        sample_neighbors(&Counting(&calls), &reg, reg.get(BiomeId(0)), 5, 5, 0, |b, _, _| {
            b.foliage()
        });
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_large_radius_is_capped() {
        let calls = Cell::new(0u64);
        struct Counting<'a>(&'a Cell<u64>);
        impl ChunkAccess for Counting<'_> {
            fn block_data(&self, _: i32, _: i32, _: i32, _: i32) -> Option<BlockData> {
                self.0.set(self.0.get() + 1);
                None
            }
        }
        let (reg, a, _, _) = registry();
        let color = sample_neighbors(&Counting(&calls), &reg, reg.get(a), 0, 0, 100_000, |b, _, _| {
            b.foliage()
        });
        assert_eq!(color, rgb(100, 100, 100));
        let side = 2 * MAX_BLEND_RADIUS as u64;
        assert_eq!(calls.get(), side * side - 1);
    }

    #[test]
    fn test_huge_radius_at_world_edge() {
        let (reg, a, _, _) = registry();
        let columns = Columns::fill(a, -2, 2);
        for (x, z) in [(i32::MAX, i32::MIN), (i32::MIN, i32::MAX), (0, 0)] {
            let color =
                sample_neighbors(&columns, &reg, reg.get(a), x, z, i32::MAX, |b, _, _| b.foliage());
            assert_eq!(color, rgb(100, 100, 100));
        }
    }

    #[test]
    fn test_uniform_neighborhood_is_stable() {
        let (reg, a, _, _) = registry();
        let columns = Columns::fill(a, -10, 10);
        let color = sample_neighbors(&columns, &reg, reg.get(a), 0, 0, 3, |b, _, _| b.foliage());
        assert_eq!(color, rgb(100, 100, 100));
    }

    #[test]
    fn test_zero_neighbors_excluded() {
        let (reg, a, _, none) = registry();
        let columns = Columns::fill(none, -10, 10);
        let color = sample_neighbors(&columns, &reg, reg.get(a), 0, 0, 2, |b, _, _| b.foliage());
        assert_eq!(color, rgb(100, 100, 100));
    }

    #[test]
    fn test_unloaded_neighbors_skipped() {
        let (reg, a, _, _) = registry();
        let columns = Columns::default();
        let color = sample_neighbors(&columns, &reg, reg.get(a), 40, -40, 4, |b, _, _| b.foliage());
        assert_eq!(color, rgb(100, 100, 100));
    }

    #[test]
    fn test_mean_over_mixed_neighbors() {
        let (reg, a, b, _) = registry();
        // radius 1 visits (-1,-1), (-1,0), (0,-1): all three are biome b.
        let columns = Columns::fill(b, -1, 0);
        let color = sample_neighbors(&columns, &reg, reg.get(a), 0, 0, 1, |b, _, _| b.foliage());
        // (100 + 3 * 200) / 4, (100 + 0) / 4, (100 + 3 * 50) / 4
        assert_eq!(color, rgb(175, 25, 62));
    }

    #[test]
    fn test_window_is_half_open() {
        let (reg, a, b, _) = registry();
        let mut columns = Columns::fill(a, -1, 0);
        // +radius offsets are outside the window and must not contribute.
        columns.biomes.insert((1, 0), b);
        columns.biomes.insert((0, 1), b);
        columns.biomes.insert((1, 1), b);
        let color = sample_neighbors(&columns, &reg, reg.get(a), 0, 0, 1, |b, _, _| b.foliage());
        assert_eq!(color, rgb(100, 100, 100));
    }

    #[test]
    fn test_sampler_receives_neighbor_coordinates() {
        let (reg, a, _, _) = registry();
        let columns = Columns::fill(a, -20, 20);
        let color = sample_neighbors(&columns, &reg, reg.get(a), 0, 0, 2, |_, x, z| {
            if x == 0 && z == 0 { rgb(0, 0, 160) } else { 0 }
        });
        assert_eq!(color, rgb(0, 0, 160));
    }

    #[test]
    fn test_result_has_no_alpha() {
        let (reg, a, _, _) = registry();
        let columns = Columns::fill(a, -4, 4);
        let color = sample_neighbors(&columns, &reg, reg.get(a), 0, 0, 1, |_, _, _| 0x7F40_4040);
        assert_eq!(color, 0x40_4040);
    }
}
