//! Climate reference tables: default foliage and grass tints indexed by
//! temperature and humidity.
//!
//! Each table is decoded once from a 256×256 reference image and stored as
//! packed RGB. Lookups are pure reads, so a single set of tables can serve
//! every render thread.

use std::path::Path;

use image::{ImageFormat, RgbImage};
use terratint_color::rgb;
use thiserror::Error;

/// Width and height of each reference image.
pub const CLIMATE_TABLE_SIZE: u32 = 256;

const TABLE_LEN: usize = (CLIMATE_TABLE_SIZE * CLIMATE_TABLE_SIZE) as usize;

/// Errors raised while building the reference tables.
///
/// Both are fatal: there is no sensible default coloring without the tables.
#[derive(Debug, Error)]
pub enum ClimateError {
    /// The image could not be read or decoded.
    #[error("failed to load {table} reference image: {source}")]
    ReferenceTableLoad {
        /// Which table failed ("grass" or "foliage").
        table: &'static str,
        #[source]
        source: image::ImageError,
    },

    /// The image decoded but has the wrong size.
    #[error("{table} reference image is {width}x{height}, expected 256x256")]
    Dimensions {
        table: &'static str,
        width: u32,
        height: u32,
    },
}

/// The grass and foliage reference tables.
#[derive(Clone, Debug)]
pub struct ClimateTables {
    grass: Box<[u32]>,
    foliage: Box<[u32]>,
}

static_assertions::assert_impl_all!(ClimateTables: Send, Sync);

impl ClimateTables {
    /// Builds both tables from per-pixel functions `(x, y) -> rgb`.
    pub fn from_fn<G, F>(grass: G, foliage: F) -> Self
    where
        G: Fn(u32, u32) -> u32,
        F: Fn(u32, u32) -> u32,
    {
        Self {
            grass: build_table(grass),
            foliage: build_table(foliage),
        }
    }

    /// Builds both tables from decoded images.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError::Dimensions`] if either image is not 256×256.
    pub fn from_images(grass: &RgbImage, foliage: &RgbImage) -> Result<Self, ClimateError> {
        check_dimensions("grass", grass)?;
        check_dimensions("foliage", foliage)?;

        let pixel = |img: &RgbImage, x: u32, y: u32| {
            let [r, g, b] = img.get_pixel(x, y).0;
            rgb(r as u32, g as u32, b as u32)
        };

        Ok(Self::from_fn(
            |x, y| pixel(grass, x, y),
            |x, y| pixel(foliage, x, y),
        ))
    }

    /// Decodes both tables from PNG-encoded bytes. Alpha is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError`] if either image fails to decode or has the
    /// wrong size.
    pub fn from_png_bytes(grass: &[u8], foliage: &[u8]) -> Result<Self, ClimateError> {
        let decode = |table: &'static str, bytes: &[u8]| {
            image::load_from_memory_with_format(bytes, ImageFormat::Png)
                .map(|img| img.to_rgb8())
                .map_err(|source| ClimateError::ReferenceTableLoad { table, source })
        };
        Self::from_images(&decode("grass", grass)?, &decode("foliage", foliage)?)
    }

    /// Loads `grass.png` and `foliage.png` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateError`] if either file is missing, corrupt, or has the
    /// wrong size.
    pub fn load(dir: &Path) -> Result<Self, ClimateError> {
        let open = |table: &'static str| {
            let path = dir.join(format!("{table}.png"));
            image::open(&path)
                .map(|img| img.to_rgb8())
                .map_err(|source| ClimateError::ReferenceTableLoad { table, source })
        };
        let tables = Self::from_images(&open("grass")?, &open("foliage")?)?;
        tracing::info!(dir = %dir.display(), "loaded climate reference tables");
        Ok(tables)
    }

    /// Default grass tint for a biome climate.
    ///
    /// `temperature` and `humidity` are expected in `[0, 1]`; clamping is the
    /// caller's job. Coordinates that fall outside the table yield `0`.
    pub fn default_grass_color(&self, temperature: f64, humidity: f64) -> u32 {
        sample(&self.grass, temperature, humidity)
    }

    /// Default foliage tint for a biome climate. Same contract as
    /// [`Self::default_grass_color`].
    pub fn default_foliage_color(&self, temperature: f64, humidity: f64) -> u32 {
        sample(&self.foliage, temperature, humidity)
    }
}

fn build_table(f: impl Fn(u32, u32) -> u32) -> Box<[u32]> {
    let mut table = Vec::with_capacity(TABLE_LEN);
    for y in 0..CLIMATE_TABLE_SIZE {
        for x in 0..CLIMATE_TABLE_SIZE {
            table.push(f(x, y) & 0x00FF_FFFF);
        }
    }
    table.into_boxed_slice()
}

fn check_dimensions(table: &'static str, img: &RgbImage) -> Result<(), ClimateError> {
    let (width, height) = img.dimensions();
    if width != CLIMATE_TABLE_SIZE || height != CLIMATE_TABLE_SIZE {
        return Err(ClimateError::Dimensions {
            table,
            width,
            height,
        });
    }
    Ok(())
}

/// Maps a climate to `j << 8 | i`, or `None` when either coordinate falls
/// outside the table.
fn table_index(temperature: f64, humidity: f64) -> Option<usize> {
    let i = ((1.0 - temperature) * 255.0).floor();
    let j = ((1.0 - humidity * temperature) * 255.0).floor();
    let range = 0.0..=255.0;
    if !range.contains(&i) || !range.contains(&j) {
        return None;
    }
    Some((j as usize) << 8 | i as usize)
}

fn sample(table: &[u32], temperature: f64, humidity: f64) -> u32 {
    table_index(temperature, humidity)
        .and_then(|index| table.get(index).copied())
        .unwrap_or(0)
}
