//! Interpolation, compositing and mixing of packed colors.

use crate::channel::{alpha, argb, blue, green, red, rgb};

#[inline]
fn lerp_channel(a: u32, b: u32, t: f32) -> u32 {
    (a as f32 + t * (b as f32 - a as f32)) as u32
}

/// Per-channel linear interpolation of the RGB channels.
///
/// `t <= 0` returns `c0` and `t >= 1` returns `c1` exactly. Identical inputs
/// short-circuit so float error never perturbs them. The alpha channel of the
/// result is always zero.
pub fn lerp_rgb(c0: u32, c1: u32, t: f32) -> u32 {
    if c0 == c1 {
        return c0;
    }
    if t >= 1.0 {
        return c1;
    }
    if t <= 0.0 {
        return c0;
    }
    rgb(
        lerp_channel(red(c0), red(c1), t),
        lerp_channel(green(c0), green(c1), t),
        lerp_channel(blue(c0), blue(c1), t),
    )
}

/// Per-channel linear interpolation of all four channels.
///
/// Same end-point contract as [`lerp_rgb`].
pub fn lerp_argb(c0: u32, c1: u32, t: f32) -> u32 {
    if c0 == c1 {
        return c0;
    }
    if t >= 1.0 {
        return c1;
    }
    if t <= 0.0 {
        return c0;
    }
    argb(
        lerp_channel(alpha(c0), alpha(c1), t),
        lerp_channel(red(c0), red(c1), t),
        lerp_channel(green(c0), green(c1), t),
        lerp_channel(blue(c0), blue(c1), t),
    )
}

/// Composites `c0` over `c1` (Porter-Duff *over*).
///
/// Channel values and the output alpha are truncated, not rounded. Two fully
/// transparent inputs produce `0`.
pub fn blend(c0: u32, c1: u32) -> u32 {
    let a0 = alpha(c0) as f64 / 255.0;
    let a1 = alpha(c1) as f64 / 255.0;
    let a = a0 + a1 * (1.0 - a0);
    if a <= 0.0 {
        return 0;
    }
    let channel = |ch0: u32, ch1: u32| -> u32 {
        ((ch0 as f64 * a0 + ch1 as f64 * a1 * (1.0 - a0)) / a) as u32
    };
    argb(
        (a * 255.0) as u32,
        channel(red(c0), red(c1)),
        channel(green(c0), green(c1)),
        channel(blue(c0), blue(c1)),
    )
}

/// Averages two colors, ignoring alpha.
///
/// Red and green are halved after summing; blue is quartered. The blue
/// divisor darkens every mixed tint and existing tiles depend on it.
pub fn mix(c0: u32, c1: u32) -> u32 {
    let r = red(c0) + red(c1);
    let g = green(c0) + green(c1);
    let b = blue(c0) + blue(c1);
    rgb(r >> 1, g >> 1, b >> 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [u32; 6] = [0, 0x00FF_FFFF, 0x007C00, 0xDCBB65, 0x8012_3456, 0xFFFF_FFFF];

    #[test]
    fn test_lerp_identical_inputs_unchanged() {
        for c in SAMPLES {
            for t in [-1.0, 0.0, 0.3, 0.5, 1.0, 7.0] {
                assert_eq!(lerp_rgb(c, c, t), c);
                assert_eq!(lerp_argb(c, c, t), c);
            }
        }
    }

    #[test]
    fn test_lerp_end_points_exact() {
        for c0 in SAMPLES {
            for c1 in SAMPLES {
                assert_eq!(lerp_rgb(c0, c1, 0.0), c0);
                assert_eq!(lerp_rgb(c0, c1, 1.0), c1);
                assert_eq!(lerp_rgb(c0, c1, -0.5), c0);
                assert_eq!(lerp_rgb(c0, c1, 1.5), c1);
                assert_eq!(lerp_argb(c0, c1, 0.0), c0);
                assert_eq!(lerp_argb(c0, c1, 1.0), c1);
            }
        }
    }

    #[test]
    fn test_lerp_rgb_truncates_midpoints() {
        // 220 * 0.125 = 27.5, 124 + 63 * 0.125 = 131.875, 101 * 0.125 = 12.625
        assert_eq!(lerp_rgb(0x007C00, 0xDCBB65, 0.125), rgb(27, 131, 12));
    }

    #[test]
    fn test_lerp_rgb_drops_alpha() {
        assert_eq!(alpha(lerp_rgb(0xFF00_0000, 0xFF00_00FF, 0.5)), 0);
    }

    #[test]
    fn test_lerp_argb_interpolates_alpha() {
        let c = lerp_argb(0x0000_0000, 0xC800_0000, 0.5);
        assert_eq!(alpha(c), 100);
    }

    #[test]
    fn test_blend_opaque_over_transparent() {
        assert_eq!(blend(0xFF00_0000, 0x00FF_FFFF), 0xFF00_0000);
    }

    #[test]
    fn test_blend_transparent_over_opaque() {
        assert_eq!(blend(0x00FF_FFFF, 0xFF12_3456), 0xFF12_3456);
    }

    #[test]
    fn test_blend_both_transparent_is_zero() {
        assert_eq!(blend(0x00FF_FFFF, 0x0012_3456), 0);
        assert_eq!(blend(0, 0), 0);
    }

    #[test]
    fn test_blend_half_black_over_white_darkens() {
        let c = blend(0x8000_0000, 0xFFFF_FFFF);
        assert_eq!(alpha(c), 255);
        // 255 * (1 - 128/255) = 127
        assert_eq!(red(c), 127);
        assert_eq!(green(c), 127);
        assert_eq!(blue(c), 127);
    }

    #[test]
    fn test_blend_alpha_truncates() {
        // a = 128/255 + 128/255 * 127/255, and a * 255 = 191.749...
        let c = blend(0x8000_0000, 0x80FF_FFFF);
        assert_eq!(alpha(c), 191);
        assert_eq!(c, argb(191, 84, 84, 84));
    }

    #[test]
    fn test_mix_same_color_quarters_blue() {
        for c in SAMPLES {
            let m = mix(c, c);
            assert_eq!(red(m), red(c));
            assert_eq!(green(m), green(c));
            assert_eq!(blue(m), blue(c) >> 1);
            assert_eq!(alpha(m), 0);
        }
    }

    #[test]
    fn test_mix_truncates() {
        assert_eq!(mix(rgb(1, 2, 3), rgb(2, 3, 4)), rgb(1, 2, 1));
    }
}
