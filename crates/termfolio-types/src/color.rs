//! Hex color validation and conversion.
//!
//! Theme colors are stored as `#RRGGBB` strings. Anything else (shorthand
//! `#rgb`, named colors, missing `#`) is rejected by [`is_hex_color`].

/// An RGB triple decoded from a `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Comma-separated triple, e.g. `0, 255, 0`.
    pub fn to_triple_string(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }
}

/// Whether `s` matches `^#[0-9a-fA-F]{6}$`.
pub fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Decode a six-digit hex color. The leading `#` is optional.
pub fn hex_to_rgb(s: &str) -> Option<Rgb> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_lower_and_upper_case() {
        assert!(is_hex_color("#00ff00"));
        assert!(is_hex_color("#ABCDEF"));
        assert!(is_hex_color("#a1B2c3"));
    }

    #[test]
    fn rejects_malformed() {
        assert!(!is_hex_color("red"));
        assert!(!is_hex_color("#fff"));
        assert!(!is_hex_color("00ff00"));
        assert!(!is_hex_color("#00ff0g"));
        assert!(!is_hex_color("#00ff000"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn decodes_primary_green() {
        assert_eq!(hex_to_rgb("#00ff00"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(hex_to_rgb("123456"), Some(Rgb::new(0x12, 0x34, 0x56)));
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
    }

    #[test]
    fn triple_string_format() {
        assert_eq!(Rgb::new(1, 2, 3).to_triple_string(), "1, 2, 3");
    }

    proptest! {
        #[test]
        fn any_six_hex_digits_are_valid(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let s = format!("#{r:02x}{g:02X}{b:02x}");
            prop_assert!(is_hex_color(&s));
            prop_assert_eq!(hex_to_rgb(&s), Some(Rgb::new(r, g, b)));
        }

        #[test]
        fn validation_never_panics(s in "\\PC*") {
            let _ = is_hex_color(&s);
            let _ = hex_to_rgb(&s);
        }
    }
}
