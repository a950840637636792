//! Elevation shading: an alpha-only layer composited over block colors.

use terratint_color::{blend, set_alpha};
use terratint_config::HeightmapKind;

const EVEN_SHADE: u32 = 0x22;
const ODD_SHADE: u32 = 0x33;

/// Elevation shading mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Heightmap {
    /// Translucent black whose opacity alternates with height parity, so
    /// every elevation step shows up as a band.
    #[default]
    EvenOdd,
    /// No shading.
    Off,
}

impl From<HeightmapKind> for Heightmap {
    fn from(kind: HeightmapKind) -> Self {
        match kind {
            HeightmapKind::EvenOdd => Self::EvenOdd,
            HeightmapKind::Off => Self::Off,
        }
    }
}

impl Heightmap {
    /// Shade color for a surface at height `y`. RGB is always black.
    ///
    /// Parity is taken with `rem_euclid`, so below `y = 0` odd heights still
    /// get the darker band. Tiles rendered by hosts that shade every negative
    /// height as even differ from these at odd negative heights.
    pub fn shade(self, y: i32) -> u32 {
        match self {
            Self::EvenOdd => {
                let opacity = if y.rem_euclid(2) == 1 {
                    ODD_SHADE
                } else {
                    EVEN_SHADE
                };
                set_alpha(opacity, 0x000000)
            }
            Self::Off => 0,
        }
    }

    /// Composites the shade for `y` over `color`, treating `color` as opaque.
    pub fn shade_over(self, y: i32, color: u32) -> u32 {
        blend(self.shade(y), set_alpha(0xFF, color))
    }
}
