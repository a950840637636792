//! Redstone power level to wire color mapping.

use terratint_color::rgb;

/// Wire color for each power level `0..=15`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerColors(pub [u32; 16]);

impl PowerColors {
    /// The host's stock wire colors: dull red when unpowered, brightening
    /// towards orange at full power.
    pub fn vanilla() -> Self {
        let mut colors = [0; 16];
        for (power, color) in colors.iter_mut().enumerate() {
            let f = power as f32 / 15.0;
            let r = f * 0.6 + if f > 0.0 { 0.4 } else { 0.3 };
            let g = (f * f * 0.7 - 0.5).clamp(0.0, 1.0);
            let b = (f * f * 0.6 - 0.7).clamp(0.0, 1.0);
            *color = rgb(
                (r * 255.0) as u32,
                (g * 255.0) as u32,
                (b * 255.0) as u32,
            );
        }
        Self(colors)
    }

    /// Color for `power`. Levels above 15 read as 15.
    #[inline]
    pub fn color(&self, power: u8) -> u32 {
        self.0[power.min(15) as usize]
    }
}

impl Default for PowerColors {
    fn default() -> Self {
        Self::vanilla()
    }
}

#[cfg(test)]
mod tests {
    use terratint_color::{blue, green, red};

    use super::*;

    #[test]
    fn test_unpowered_is_dark_red() {
        assert_eq!(PowerColors::vanilla().color(0), 0x4C_0000);
    }

    #[test]
    fn test_brightness_increases_with_power() {
        let colors = PowerColors::vanilla();
        for power in 1..16 {
            assert!(red(colors.color(power)) >= red(colors.color(power - 1)));
        }
        assert_eq!(red(colors.color(15)), 0xFF);
        assert!(green(colors.color(15)) > 0);
        assert_eq!(blue(colors.color(15)), 0);
    }

    #[test]
    fn test_power_saturates() {
        let colors = PowerColors::vanilla();
        assert_eq!(colors.color(200), colors.color(15));
    }
}
