use crate::error::{Error, Result};

/// One pixel's colour: three independent 8 bit channels.
pub type Color = palette::Srgb<u8>;

pub const BLACK: Color = Color::new(0, 0, 0);

/// Input a value 0 to 255 to get a colour on the red -> green -> blue -> red wheel.
///
/// The domain is split in three bands of 85 steps, the last one absorbing the
/// remainder up to 255. Within a band one channel rises by 3 per step while
/// another falls by 3.
pub fn wheel(position: u8) -> Color {
    if position < 85 {
        Color::new(position * 3, 255 - position * 3, 0)
    } else if position < 170 {
        let offset = position - 85;
        Color::new(255 - offset * 3, 0, offset * 3)
    } else {
        let offset = position - 170;
        Color::new(0, offset * 3, 255 - offset * 3)
    }
}

/// Maps a temperature onto the fixed black -> red -> orange -> white palette.
pub fn heat_color(temperature: u8) -> Color {
    // Scale heat down from 0..255 to 0..191
    let t192 = ((temperature as f32 / 255.0) * 191.0).round() as u8;

    // 0..63 scaled up to 0..252
    let heatramp = (t192 & 0x3F) << 2;

    if t192 > 0x80 {
        Color::new(255, 255, heatramp)
    } else if t192 > 0x40 {
        Color::new(255, heatramp, 0)
    } else {
        Color::new(heatramp, 0, 0)
    }
}

/// Dims every channel to a tenth, truncating.
pub fn dimmed(color: Color) -> Color {
    Color::new(color.red / 10, color.green / 10, color.blue / 10)
}

/// Packs a colour as `0xRRGGBB`.
pub fn pack(color: Color) -> u32 {
    (color.red as u32) << 16 | (color.green as u32) << 8 | color.blue as u32
}

pub fn unpack(packed: u32) -> Color {
    Color::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
}

/// Parses `#rrggbb` (the leading `#` is optional).
pub fn parse_hex(s: &str) -> Result<Color> {
    let digits = s.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(s.to_string()));
    }

    match u32::from_str_radix(digits, 16) {
        Ok(packed) => Ok(unpack(packed)),
        Err(_) => Err(Error::InvalidColor(s.to_string())),
    }
}

pub fn to_hex(color: Color) -> String {
    format!("#{:06x}", pack(color))
}

/// Serde adapter storing colours as `#rrggbb` strings.
pub mod hex {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Color;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hex(&s).map_err(de::Error::custom)
    }
}
