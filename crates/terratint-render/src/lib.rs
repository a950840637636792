//! Per-position map color resolution.
//!
//! Given a block state, its biome and a read-only view of nearby chunk data,
//! [`BlockColorResolver`] produces the final packed color for one ground
//! position. [`Heightmap`] supplies the alpha-only elevation shading layered
//! on top by the tile compositor.

mod blend;
mod block;
mod chunk;
mod heightmap;
mod power;
mod resolver;

pub use blend::{MAX_BLEND_RADIUS, sample_neighbors};
pub use block::{
    BlockDef, BlockId, BlockKind, BlockRegistry, BlockRegistryError, BlockState, SpecialBlock,
};
pub use chunk::{BlockData, ChunkAccess};
pub use heightmap::Heightmap;
pub use power::PowerColors;
pub use resolver::BlockColorResolver;
