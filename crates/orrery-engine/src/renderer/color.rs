use serde::{Deserialize, Serialize};

/// sRGB color, 0.0-1.0 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// CSS named colors used by the default scene.
const NAMED: [(&str, u32); 12] = [
    ("black", 0x000000),
    ("white", 0xffffff),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("red", 0xff0000),
    ("green", 0x008000),
    ("blue", 0x0000ff),
    ("yellow", 0xffff00),
    ("gold", 0xffd700),
    ("orange", 0xffa500),
    ("purple", 0x800080),
    ("brown", 0xa52a2a),
];

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(rgb: u32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Parse a CSS color name or `#rrggbb`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 {
                return None;
            }
            return u32::from_str_radix(hex, 16).ok().map(Self::from_hex);
        }
        NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, rgb)| Self::from_hex(rgb))
    }

    /// Like `parse`, falling back to white for unknown colors.
    pub fn parse_or_white(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            log::warn!("unknown color {:?}, using white", s);
            Self::WHITE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Color::parse("Blue"), Some(Color::new(0.0, 0.0, 1.0)));
        assert_eq!(Color::parse("white"), Some(Color::WHITE));
    }

    #[test]
    fn parses_hex() {
        let c = Color::parse("#444444").unwrap();
        assert!((c.r - 68.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.r, c.g);
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("#zzzzzz"), None);
    }

    #[test]
    fn unknown_falls_back_to_white() {
        assert_eq!(Color::parse("chartreuse-ish"), None);
        assert_eq!(Color::parse_or_white("chartreuse-ish"), Color::WHITE);
    }
}
