//! Hex text conversion used by the configuration layer.

use crate::ColorError;

/// Parses `#RRGGBB`, `RRGGBB` or the eight digit `AARRGGBB` forms.
///
/// # Errors
///
/// Returns [`ColorError::MalformedColor`] if the string (after removing `#`)
/// is empty, longer than eight digits, or contains a non-hex character.
pub fn from_hex(text: &str) -> Result<u32, ColorError> {
    let digits = text.trim().replace('#', "");
    if digits.is_empty() || digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::MalformedColor(text.to_string()));
    }
    u32::from_str_radix(&digits, 16).map_err(|_| ColorError::MalformedColor(text.to_string()))
}

/// Formats the low 24 bits as `#RRGGBB`.
pub fn to_hex(argb: u32) -> String {
    format!("#{:06X}", argb & 0x00FF_FFFF)
}

/// Formats all 32 bits as `#AARRGGBB`.
pub fn to_hex8(argb: u32) -> String {
    format!("#{argb:08X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(from_hex("#512C0F").unwrap(), 0x512C0F);
        assert_eq!(from_hex("512c0f").unwrap(), 0x512C0F);
        assert_eq!(from_hex("#FF8E6646").unwrap(), 0xFF8E_6646);
    }

    #[test]
    fn test_malformed_colors_rejected() {
        for bad in ["", "#", "#GG0000", "not a color", "+12345", "#123456789"] {
            assert_eq!(
                from_hex(bad),
                Err(ColorError::MalformedColor(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_format_is_zero_padded_uppercase() {
        assert_eq!(to_hex(0x00_7C00), "#007C00");
        assert_eq!(to_hex(0xFFAB_CDEF), "#ABCDEF");
        assert_eq!(to_hex8(0x0A0B_0C0D), "#0A0B0C0D");
    }

    #[test]
    fn test_round_trip_sampled_24_bit_values() {
        for v in (0..=0x00FF_FFFFu32).step_by(4099).chain([0, 0x00FF_FFFF]) {
            assert_eq!(from_hex(&to_hex(v)).unwrap(), v);
        }
    }

    #[test]
    fn test_round_trip_with_alpha() {
        let v = 0x8000_00FF;
        assert_eq!(from_hex(&to_hex8(v)).unwrap(), v);
    }
}
