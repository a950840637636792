//! End-to-end color resolution: configuration, host biomes, block registry
//! and resolver wired together the way a renderer would at world load.

use rustc_hash::FxHashMap;
use terratint_biome::{
    BiomeColorRegistry, BiomeId, ClimateTables, GrassModifier, HostBiome, register_host_biomes,
};
use terratint_color::{mix, rgb};
use terratint_config::Config;
use terratint_render::{
    BlockColorResolver, BlockData, BlockRegistry, BlockState, ChunkAccess, Heightmap, PowerColors,
};

/// A flat world: one chunk-aligned half plains, the other half forest.
struct Split {
    loaded: FxHashMap<(i32, i32), ()>,
    plains: BiomeId,
    forest: BiomeId,
    top: BlockState,
}

impl ChunkAccess for Split {
    fn block_data(&self, chunk_x: i32, chunk_z: i32, x: i32, _z: i32) -> Option<BlockData> {
        self.loaded.get(&(chunk_x, chunk_z))?;
        let biome = if x < 0 { self.forest } else { self.plains };
        Some(BlockData {
            biome,
            state: self.top,
        })
    }
}

struct World {
    config: Config,
    biomes: BiomeColorRegistry,
    blocks: BlockRegistry,
    power: PowerColors,
}

fn host_biomes() -> Vec<HostBiome> {
    let host = |key: &str, temperature, humidity| HostBiome {
        key: key.into(),
        temperature,
        humidity,
        foliage_override: None,
        grass_override: None,
        water: 0x3F76E4,
        grass_modifier: GrassModifier::none(),
    };
    vec![
        host("test:plains", 0.8, 0.4),
        host("test:forest", 0.7, 0.8),
        HostBiome {
            grass_modifier: GrassModifier::dark_forest(),
            ..host("test:dark_forest", 0.7, 0.8)
        },
    ]
}

fn load_world() -> World {
    let config = Config::default();
    let tables = ClimateTables::from_fn(|x, y| rgb(x, y, 0x40), |x, y| rgb(y, x, 0x20));

    let mut biomes = BiomeColorRegistry::new();
    register_host_biomes(&mut biomes, &config.colors.biomes, &tables, &host_biomes()).unwrap();

    let mut blocks = BlockRegistry::new(config.colors.blocks.clone());
    for (key, color) in [
        ("minecraft:grass_block", 0x7EA44D),
        ("minecraft:oak_leaves", 0x22570C),
        ("minecraft:water", 0x4040FF),
        ("minecraft:stone", 0x7E7E7E),
        ("minecraft:air", 0xFFFFFF),
    ] {
        blocks.register(key, color).unwrap();
    }

    World {
        config,
        biomes,
        blocks,
        power: PowerColors::vanilla(),
    }
}

fn split(world: &World, chunks: &[(i32, i32)], top: &str) -> Split {
    Split {
        loaded: chunks.iter().map(|&c| (c, ())).collect(),
        plains: world.biomes.id_of("test:plains").unwrap(),
        forest: world.biomes.id_of("test:forest").unwrap(),
        top: BlockState::new(world.blocks.id_of(top).unwrap()),
    }
}

#[test]
fn test_interior_of_uniform_biome_is_unblended() {
    let world = load_world();
    let resolver = BlockColorResolver::new(
        &world.blocks,
        &world.biomes,
        &world.power,
        world.config.render.biome_blend,
    );
    let chunks = split(&world, &[(0, 0)], "minecraft:grass_block");
    let plains = world.biomes.lookup("test:plains");

    let color = resolver.resolve(&chunks, chunks.plains, &chunks.top, 8, 8);
    assert_eq!(color, mix(plains.grass(8, 8), 0x7EA44D));
}

#[test]
fn test_biome_border_is_smoothed() {
    let world = load_world();
    let resolver = BlockColorResolver::new(&world.blocks, &world.biomes, &world.power, 3);
    let chunks = split(&world, &[(-1, 0), (0, 0)], "minecraft:oak_leaves");
    let plains = world.biomes.lookup("test:plains").foliage();
    let forest = world.biomes.lookup("test:forest").foliage();
    assert_ne!(plains, forest);

    let at_border = resolver.foliage_color(&chunks, world.biomes.lookup("test:plains"), 0, 8);
    assert_ne!(at_border, plains);
    assert_ne!(at_border, forest);

    let unblended = BlockColorResolver::new(&world.blocks, &world.biomes, &world.power, 0);
    assert_eq!(
        unblended.foliage_color(&chunks, world.biomes.lookup("test:plains"), 0, 8),
        plains
    );
}

#[test]
fn test_unloaded_neighbors_are_skipped() {
    let world = load_world();
    let resolver = BlockColorResolver::new(&world.blocks, &world.biomes, &world.power, 3);
    // Only the plains chunk is resident, so the forest side contributes
    // nothing.
    let chunks = split(&world, &[(0, 0)], "minecraft:oak_leaves");
    let plains = world.biomes.lookup("test:plains");
    assert_eq!(resolver.foliage_color(&chunks, plains, 0, 8), plains.foliage());
}

#[test]
fn test_dark_forest_modifier_reaches_grass() {
    let world = load_world();
    let forest = world.biomes.lookup("test:forest");
    let dark = world.biomes.lookup("test:dark_forest");
    assert_eq!(forest.grass_color, dark.grass_color);
    assert_eq!(dark.grass(0, 0), ((forest.grass(0, 0) & 0xFE_FEFE) + 0x28_340A) >> 1);
}

#[test]
fn test_air_and_water() {
    let world = load_world();
    let resolver = BlockColorResolver::new(&world.blocks, &world.biomes, &world.power, 2);
    let chunks = split(&world, &[(0, 0)], "minecraft:water");
    let air = BlockState::new(world.blocks.id_of("minecraft:air").unwrap());

    assert_eq!(resolver.resolve(&chunks, chunks.plains, &air, 4, 4), 0);
    assert_eq!(resolver.resolve(&chunks, chunks.plains, &chunks.top, 4, 4), 0x3F76E4);
}

#[test]
fn test_heightmap_composites_over_resolved_color() {
    let world = load_world();
    let resolver = BlockColorResolver::new(&world.blocks, &world.biomes, &world.power, 0);
    let chunks = split(&world, &[(0, 0)], "minecraft:stone");
    let heightmap = Heightmap::from(world.config.render.heightmap);

    let color = resolver.resolve(&chunks, chunks.plains, &chunks.top, 1, 1);
    let low = heightmap.shade_over(62, color);
    let high = heightmap.shade_over(63, color);
    assert_eq!(low >> 24, 0xFF);
    assert_ne!(low, high);
    assert_eq!(Heightmap::Off.shade_over(63, color), 0xFF00_0000 | color);
}

#[test]
fn test_parallel_resolution_matches_serial() {
    let world = load_world();
    let resolver = BlockColorResolver::new(&world.blocks, &world.biomes, &world.power, 3);
    let chunks = split(&world, &[(-1, 0), (0, 0), (-1, 1), (0, 1)], "minecraft:grass_block");

    let row = |z: i32| -> Vec<u32> {
        (-16..16)
            .map(|x| resolver.resolve(&chunks, chunks.plains, &chunks.top, x, z))
            .collect()
    };
    let serial: Vec<Vec<u32>> = (0..32).map(row).collect();

    let parallel: Vec<Vec<u32>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..32).map(|z| s.spawn(move || row(z))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial, parallel);
}
