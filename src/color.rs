//! RGBA hex color parsing for the aspect-ratio bars.
//!
//! Colors are written as 8 hex digits in RRGGBBAA order, with an optional
//! leading `#` (e.g. `#000000FF` for opaque black).

use image::Rgba;

use crate::error::ColorError;

/// Number of hex digits in an RRGGBBAA color string.
const RGBA_HEX_DIGITS: usize = 8;

/// Parse an `#RRGGBBAA` hex string into an RGBA color.
///
/// The leading `#` is optional. Exactly 8 hex digits are required; a 6-digit
/// RGB string without an alpha component is rejected.
///
/// # Errors
///
/// Returns [`ColorError::InvalidLength`] if the digit count is wrong, or
/// [`ColorError::InvalidHex`] if the string contains non-hex characters.
pub fn parse_rgba_hex(color: &str) -> Result<Rgba<u8>, ColorError> {
    let digits = color.strip_prefix('#').unwrap_or(color);

    if digits.len() != RGBA_HEX_DIGITS {
        return Err(ColorError::InvalidLength(digits.len()));
    }

    let bytes = hex::decode(digits)?;
    Ok(Rgba([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_black() {
        assert_eq!(parse_rgba_hex("#000000FF").unwrap(), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_opaque_red() {
        assert_eq!(
            parse_rgba_hex("#FF0000FF").unwrap(),
            Rgba([255, 0, 0, 255])
        );
    }

    #[test]
    fn test_without_hash_prefix() {
        assert_eq!(
            parse_rgba_hex("336699CC").unwrap(),
            Rgba([0x33, 0x66, 0x99, 0xCC])
        );
    }

    #[test]
    fn test_lowercase_digits() {
        assert_eq!(
            parse_rgba_hex("#ff00aa80").unwrap(),
            Rgba([0xFF, 0x00, 0xAA, 0x80])
        );
    }

    #[test]
    fn test_rejects_rgb_without_alpha() {
        let result = parse_rgba_hex("#FF0000");
        assert!(matches!(result, Err(ColorError::InvalidLength(6))));
    }

    #[test]
    fn test_rejects_odd_length() {
        assert!(parse_rgba_hex("#000000F").is_err());
    }

    #[test]
    fn test_rejects_non_hex_characters() {
        let result = parse_rgba_hex("#ZZ0000FF");
        assert!(matches!(result, Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(parse_rgba_hex("").is_err());
        assert!(parse_rgba_hex("#").is_err());
    }
}
