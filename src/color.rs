use egui::Color32;

use crate::error::ColorParseError;

/// Parse a `#rrggbb` string into an opaque color.
pub fn parse_hex(text: &str) -> Result<Color32, ColorParseError> {
    let digits = text
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingHash(text.to_owned()))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::BadDigit(text.to_owned()));
    }
    if digits.len() != 6 {
        return Err(ColorParseError::BadLength(text.to_owned()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ColorParseError::BadDigit(text.to_owned()))
    };
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Format a color as `#rrggbb`, ignoring alpha.
pub fn to_hex(color: Color32) -> String {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Interpolate a color toward white.
///
/// `factor` 0.0 keeps the color, 1.0 yields white. Alpha is preserved.
pub fn lighten(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mix = |c: u8| {
        let c = f32::from(c);
        (c + (255.0 - c) * factor).round().min(255.0) as u8
    };
    Color32::from_rgba_unmultiplied(mix(r), mix(g), mix(b), a)
}

pub(crate) fn to_skia(color: Color32) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

/// Serde adapter storing a [`Color32`] as a `#rrggbb` string.
///
/// Use with `#[serde(with = "crate::color::hex")]`.
pub mod hex {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_hex(&text).map_err(serde::de::Error::custom)
    }
}
