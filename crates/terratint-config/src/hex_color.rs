//! Serde adapter storing packed colors as `#RRGGBB` strings.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// A packed RGB color that serializes as a `#RRGGBB` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct HexColor(pub u32);

impl HexColor {
    /// Returns the packed value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for HexColor {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&terratint_color::to_hex(self.0))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&terratint_color::to_hex(self.0))
    }
}

struct HexColorVisitor;

impl Visitor<'_> for HexColorVisitor {
    type Value = HexColor;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex color string such as \"#7EA44D\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<HexColor, E> {
        terratint_color::from_hex(value)
            .map(HexColor)
            .map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexColorVisitor)
    }
}
