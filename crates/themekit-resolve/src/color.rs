//! Hex color arithmetic used by the schema migrator.
//!
//! Derived tokens (hover/surface/overlay variants) are computed from base
//! values with small channel shifts or fixed alpha suffixes. Only hex
//! colors are transformable; any other syntax is carried through
//! untouched so migration never invents a value it cannot derive.

/// A parsed `#rrggbb` color. Alpha-carrying inputs keep their suffix
/// through [`shift`](Rgb::shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rgb` or `#rrggbb` (an 8-digit value parses its opaque part).
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        // Values come from theme files; byte-slicing below requires
        // ASCII, so anything else is just not a hex color.
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Rgb {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                })
            }
            6 | 8 => Some(Rgb {
                r: u8::from_str_radix(&hex[0..2], 16).ok()?,
                g: u8::from_str_radix(&hex[2..4], 16).ok()?,
                b: u8::from_str_radix(&hex[4..6], 16).ok()?,
            }),
            _ => None,
        }
    }

    /// Shifts every channel by `delta`, clamping to the channel range.
    pub fn shift(self, delta: i16) -> Self {
        let apply = |c: u8| (c as i16 + delta).clamp(0, 255) as u8;
        Rgb {
            r: apply(self.r),
            g: apply(self.g),
            b: apply(self.b),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived lightness, 0..=255. Integer approximation of the usual
    /// luma weights.
    pub fn luma(self) -> u8 {
        ((self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114) / 1000) as u8
    }
}

/// Darkens a hex color by `amount` (0.0..=1.0). Non-hex input is returned
/// unchanged.
pub fn darken(value: &str, amount: f32) -> String {
    match Rgb::parse(value) {
        Some(rgb) => rgb.shift(-((255.0 * amount) as i16)).to_hex(),
        None => value.to_string(),
    }
}

/// Lightens a hex color by `amount` (0.0..=1.0). Non-hex input is
/// returned unchanged.
pub fn lighten(value: &str, amount: f32) -> String {
    match Rgb::parse(value) {
        Some(rgb) => rgb.shift((255.0 * amount) as i16).to_hex(),
        None => value.to_string(),
    }
}

/// Appends a two-digit hex alpha suffix to an opaque hex color. Shorthand
/// hex is expanded first; non-hex input is returned unchanged.
pub fn with_alpha(value: &str, alpha: &str) -> String {
    match Rgb::parse(value) {
        Some(rgb) => format!("{}{}", rgb.to_hex(), alpha),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!(Rgb::parse("#2563eb"), Some(Rgb { r: 0x25, g: 0x63, b: 0xeb }));
        assert_eq!(Rgb::parse("#fff"), Some(Rgb { r: 255, g: 255, b: 255 }));
        assert_eq!(Rgb::parse("oklch(0.7 0.1 185)"), None);
    }

    #[test]
    fn test_non_ascii_input_is_not_hex() {
        // "€" is three bytes, so "#€abc" hits the six-byte arm; it must
        // come back as not-a-color, never slice mid-character.
        assert_eq!(Rgb::parse("#€abc"), None);
        assert_eq!(darken("#€abc", 0.08), "#€abc");
        assert_eq!(with_alpha("#€abc", "1a"), "#€abc");
    }

    #[test]
    fn test_shift_clamps() {
        assert_eq!(Rgb { r: 250, g: 10, b: 128 }.shift(20), Rgb { r: 255, g: 30, b: 148 });
        assert_eq!(Rgb { r: 5, g: 5, b: 5 }.shift(-20), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_darken_and_lighten() {
        assert_eq!(darken("#808080", 0.08), "#6c6c6c");
        assert_eq!(lighten("#808080", 0.08), "#949494");
        // Non-hex carried through.
        assert_eq!(darken("var(--primary)", 0.08), "var(--primary)");
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#2563eb", "1a"), "#2563eb1a");
        assert_eq!(with_alpha("#fff", "cc"), "#ffffffcc");
        assert_eq!(with_alpha("currentColor", "1a"), "currentColor");
    }

    #[test]
    fn test_luma_ordering() {
        let white = Rgb::parse("#ffffff").unwrap();
        let navy = Rgb::parse("#101040").unwrap();
        assert!(white.luma() > navy.luma());
    }
}
