//! Configuration for terrain tile coloring.
//!
//! Holds the user-editable color overrides, block category lists, render
//! settings and log level. Settings persist to disk as RON and tolerate missing
//! or unknown fields.

mod block_palette;
mod colors;
mod config;
mod error;
mod hex_color;

pub use colors::{BiomeColorsConfig, BlockColorsConfig, ColorsConfig};
pub use config::{Config, DebugConfig, HeightmapKind, RenderConfig};
pub use error::ConfigError;
pub use hex_color::HexColor;
