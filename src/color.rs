//! ARGB color helpers
//!
//! Widget colors are written as packed `0xAARRGGBB` values and `#AARRGGBB`
//! strings in attribute files. Both map onto [`iced::Color`].

use iced::Color;

pub const OPAQUE_WHITE: u32 = 0xFFFF_FFFF;
pub const OPAQUE_BLACK: u32 = 0xFF00_0000;
pub const PLACEHOLDER_GRAY: u32 = 0xFFDD_DDDD;
pub const CHECKED_GRAY: u32 = 0xFFBB_BBBB;
pub const YELLOW: u32 = 0xFFFF_FF00;

/// Build a color from a packed `0xAARRGGBB` value
pub fn from_argb(argb: u32) -> Color {
    let [a, r, g, b] = argb.to_be_bytes();
    Color::from_rgba8(r, g, b, a as f32 / 255.0)
}

/// Pack a color into `0xAARRGGBB`
pub fn to_argb(color: Color) -> u32 {
    let [r, g, b, a] = color.into_rgba8();
    u32::from_be_bytes([a, r, g, b])
}

/// Parse `#AARRGGBB` or `#RRGGBB` (leading `#` optional)
pub fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.trim().trim_start_matches('#');
    let value = u32::from_str_radix(digits, 16).ok()?;
    match digits.len() {
        8 => Some(from_argb(value)),
        6 => Some(from_argb(0xFF00_0000 | value)),
        _ => None,
    }
}

/// Format a color as `#AARRGGBB`
pub fn to_hex(color: Color) -> String {
    format!("#{:08X}", to_argb(color))
}

/// Serde adapter storing colors as hex strings
pub mod hex {
    use iced::Color;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hex(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid color '{}', expected #AARRGGBB", raw)))
    }

    /// Same as the parent module, for optional colors
    pub mod option {
        use iced::Color;
        use serde::{Deserialize, Deserializer, Serializer, de};

        pub fn serialize<S: Serializer>(
            color: &Option<Color>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match color {
                Some(color) => serializer.serialize_some(&super::super::to_hex(*color)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Color>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            raw.map(|raw| {
                super::super::parse_hex(&raw).ok_or_else(|| {
                    de::Error::custom(format!("invalid color '{}', expected #AARRGGBB", raw))
                })
            })
            .transpose()
        }
    }
}
