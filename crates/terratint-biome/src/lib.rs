//! Biome tint colors: the per-world biome color registry, the climate
//! reference tables that supply default foliage and grass tints, and the
//! precedence rules used when a host world registers its biomes.

mod climate;
mod def;
mod host;
mod registry;

pub use climate::{CLIMATE_TABLE_SIZE, ClimateError, ClimateTables};
pub use def::{Biome, GrassModifier};
pub use host::{HostBiome, register_host_biomes};
pub use registry::{BiomeColorRegistry, BiomeError, BiomeId};
