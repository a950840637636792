//! Channel packing and extraction.

/// Packs red, green and blue channels into `0x00RRGGBB`.
///
/// Channels are expected in `0..=255`. Larger values are not clamped and
/// bleed into neighbouring channels.
#[inline]
pub const fn rgb(red: u32, green: u32, blue: u32) -> u32 {
    red << 16 | green << 8 | blue
}

/// Packs all four channels into `0xAARRGGBB`.
#[inline]
pub const fn argb(alpha: u32, red: u32, green: u32, blue: u32) -> u32 {
    alpha << 24 | red << 16 | green << 8 | blue
}

#[inline]
pub const fn alpha(argb: u32) -> u32 {
    argb >> 24 & 0xFF
}

#[inline]
pub const fn red(argb: u32) -> u32 {
    argb >> 16 & 0xFF
}

#[inline]
pub const fn green(argb: u32) -> u32 {
    argb >> 8 & 0xFF
}

#[inline]
pub const fn blue(argb: u32) -> u32 {
    argb & 0xFF
}

/// Replaces the alpha channel of `argb`, keeping its RGB bits.
#[inline]
pub const fn set_alpha(alpha: u32, argb: u32) -> u32 {
    alpha << 24 | (argb & 0x00FF_FFFF)
}
