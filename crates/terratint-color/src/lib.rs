//! Packed ARGB color algebra for map tiles.
//!
//! Colors are exchanged as plain `u32` values laid out as `0xAARRGGBB`. Every
//! function here is pure and total over its inputs.

mod channel;
mod error;
mod hex;
mod ops;

pub use channel::{alpha, argb, blue, green, red, rgb, set_alpha};
pub use error::ColorError;
pub use hex::{from_hex, to_hex, to_hex8};
pub use ops::{blend, lerp_argb, lerp_rgb, mix};
