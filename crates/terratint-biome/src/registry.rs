//! Biome color registry: maps biome keys to [`Biome`] records.
//!
//! Populated once while a world loads, then shared read-only by every render
//! worker. Re-registering a key replaces the record in place so configuration
//! overrides can be layered after host defaults.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::Biome;

/// Compact handle for a registered biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BiomeId(pub u16);

/// Errors reported by the biome registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BiomeError {
    /// A color was requested for a biome the host never registered.
    ///
    /// This signals a world-load sequencing bug, not a per-request condition.
    #[error("biome {0:?} was never registered")]
    MissingRegistration(String),

    /// All 65 536 slots are in use.
    #[error("biome registry is full (max 65536 biomes)")]
    RegistryFull,
}

/// Stores one [`Biome`] per key with O(1) lookup by key or [`BiomeId`].
#[derive(Debug, Default)]
pub struct BiomeColorRegistry {
    biomes: Vec<Biome>,
    key_to_id: FxHashMap<String, BiomeId>,
}

static_assertions::assert_impl_all!(BiomeColorRegistry: Send, Sync);

impl BiomeColorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `biome`, replacing any earlier record with the same key.
    ///
    /// A replaced biome keeps its [`BiomeId`].
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::RegistryFull`] when a new key would exceed the
    /// id space.
    pub fn register(&mut self, biome: Biome) -> Result<BiomeId, BiomeError> {
        if let Some(&id) = self.key_to_id.get(&biome.key) {
            tracing::debug!(key = %biome.key, "replacing biome colors");
            self.biomes[id.0 as usize] = biome;
            return Ok(id);
        }
        if self.biomes.len() > u16::MAX as usize {
            return Err(BiomeError::RegistryFull);
        }

        let id = BiomeId(self.biomes.len() as u16);
        tracing::debug!(key = %biome.key, id = id.0, "registered biome colors");
        self.key_to_id.insert(biome.key.clone(), id);
        self.biomes.push(biome);
        Ok(id)
    }

    /// Returns the record for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this registry.
    pub fn get(&self, id: BiomeId) -> &Biome {
        &self.biomes[id.0 as usize]
    }

    /// Returns the id assigned to `key`, if registered.
    pub fn id_of(&self, key: &str) -> Option<BiomeId> {
        self.key_to_id.get(key).copied()
    }

    /// Looks up a biome by key.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::MissingRegistration`] if `key` was never registered.
    pub fn try_lookup(&self, key: &str) -> Result<&Biome, BiomeError> {
        self.id_of(key)
            .map(|id| self.get(id))
            .ok_or_else(|| BiomeError::MissingRegistration(key.to_string()))
    }

    /// Looks up a biome by key.
    ///
    /// # Panics
    ///
    /// Panics if `key` was never registered. Hosts register every biome before
    /// resolving any color, so a miss is a startup bug.
    pub fn lookup(&self, key: &str) -> &Biome {
        match self.try_lookup(key) {
            Ok(biome) => biome,
            Err(err) => panic!("{err}"),
        }
    }

    /// Iterates over all registered biomes in id order.
    pub fn iter(&self) -> impl Iterator<Item = (BiomeId, &Biome)> {
        self.biomes
            .iter()
            .enumerate()
            .map(|(i, b)| (BiomeId(i as u16), b))
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Returns `true` if no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}
