#![forbid(unsafe_code)]

//! Computed-color conversion.
//!
//! Browsers report computed colors as `rgb(r, g, b)` or `rgba(r, g, b, a)`.
//! The panel displays the canonical uppercase hex form. Conversion is pure
//! and total: anything outside the `rgb()`/`rgba()` grammar passes through
//! with uppercase forced (a parse miss is a fallback, never an error).

/// Convert a computed color string to `#RRGGBB` uppercase.
///
/// The alpha channel of `rgba()` is ignored. Inputs that do not match the
/// grammar (already-hex values, named colors, anything unparsable) are
/// returned uppercased but otherwise unchanged.
///
/// ```
/// use typelens_core::color::to_hex;
///
/// assert_eq!(to_hex("rgb(255, 0, 17)"), "#FF0011");
/// assert_eq!(to_hex("rgba(0, 128, 255, 0.5)"), "#0080FF");
/// assert_eq!(to_hex("rebeccapurple"), "REBECCAPURPLE");
/// ```
#[must_use]
pub fn to_hex(raw: &str) -> String {
    match parse_rgb(raw) {
        Some((r, g, b)) => format!("#{r:02X}{g:02X}{b:02X}"),
        None => raw.to_uppercase(),
    }
}

/// Parse `rgb(r, g, b)` / `rgba(r, g, b, a)` into channel values.
///
/// Returns `None` when the input is outside the grammar or a channel falls
/// outside 0–255.
#[must_use]
pub fn parse_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    let body = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?;
    let body = body.strip_suffix(')')?;

    let mut parts = body.split(',').map(str::trim);
    let r = parts.next()?.parse::<u8>().ok()?;
    let g = parts.next()?.parse::<u8>().ok()?;
    let b = parts.next()?.parse::<u8>().ok()?;

    // rgb() must end after three channels; rgba() carries one alpha token
    // which is ignored but must at least be present and numeric.
    match parts.next() {
        None => {
            if lower.starts_with("rgba(") {
                return None;
            }
        }
        Some(alpha) => {
            if !lower.starts_with("rgba(") || alpha.parse::<f64>().is_err() {
                return None;
            }
            if parts.next().is_some() {
                return None;
            }
        }
    }

    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rgb_converts_to_uppercase_hex() {
        assert_eq!(to_hex("rgb(255, 0, 17)"), "#FF0011");
        assert_eq!(to_hex("rgb(0,0,0)"), "#000000");
        assert_eq!(to_hex("rgb(255,255,255)"), "#FFFFFF");
    }

    #[test]
    fn rgba_alpha_is_ignored() {
        assert_eq!(to_hex("rgba(18, 52, 86, 0.25)"), "#123456");
        assert_eq!(to_hex("rgba(1, 2, 3, 1)"), "#010203");
    }

    #[test]
    fn single_digit_channels_are_zero_padded() {
        assert_eq!(to_hex("rgb(1, 2, 3)"), "#010203");
        assert_eq!(to_hex("rgb(10, 11, 12)"), "#0A0B0C");
    }

    #[test]
    fn parse_miss_passes_through_uppercased() {
        assert_eq!(to_hex("#ff0011"), "#FF0011");
        assert_eq!(to_hex("tomato"), "TOMATO");
        assert_eq!(to_hex("rgb(300, 0, 0)"), "RGB(300, 0, 0)");
        assert_eq!(to_hex("rgb(1, 2)"), "RGB(1, 2)");
        assert_eq!(to_hex(""), "");
    }

    #[test]
    fn rgb_with_trailing_alpha_is_a_miss() {
        assert_eq!(parse_rgb("rgb(1, 2, 3, 0.5)"), None);
    }

    #[test]
    fn rgba_without_alpha_is_a_miss() {
        assert_eq!(parse_rgb("rgba(1, 2, 3)"), None);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(to_hex("  rgb(4, 5, 6)  "), "#040506");
    }

    proptest! {
        #[test]
        fn all_valid_channels_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let hex = to_hex(&format!("rgb({r}, {g}, {b})"));
            prop_assert_eq!(hex.len(), 7);
            prop_assert_eq!(&hex, &format!("#{r:02X}{g:02X}{b:02X}"));
        }

        #[test]
        fn conversion_never_panics(s in "\\PC*") {
            let _ = to_hex(&s);
        }
    }
}
