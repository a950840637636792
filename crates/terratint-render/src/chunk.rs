//! Read-only view of resident chunk data used for neighbor sampling.

use terratint_biome::BiomeId;

use crate::BlockState;

/// Surface data for a single world column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockData {
    /// Biome at the column.
    pub biome: BiomeId,
    /// Top block at the column.
    pub state: BlockState,
}

impl BlockData {
    pub fn biome(&self) -> BiomeId {
        self.biome
    }

    pub fn state(&self) -> &BlockState {
        &self.state
    }
}

/// Point-in-time access to chunk data owned by the host.
///
/// Implementations must not block or load anything: a column whose chunk
/// is not resident simply yields `None`.
pub trait ChunkAccess {
    /// Returns the data for world column `(x, z)` inside chunk
    /// `(chunk_x, chunk_z)`, or `None` if that chunk is unavailable.
    fn block_data(&self, chunk_x: i32, chunk_z: i32, x: i32, z: i32) -> Option<BlockData>;
}
