use crate::domain::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::rgb8(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let [r, g, b, _] = self.to_rgba8();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    fn to_rgba8(self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:06x}", self.to_hex())
        } else {
            let [r, g, b, _] = self.to_rgba8();
            format!("rgba({}, {}, {}, {})", r, g, b, self.a.clamp(0.0, 1.0))
        }
    }

    /// Default bar fill.
    pub const ACCENT: Color = Color::rgb8(0x3b, 0x82, 0xf6);
    /// Unfilled remainder of a bar.
    pub const TRACK: Color = Color::rgb8(0xe5, 0xe7, 0xeb);
    /// Label and value text.
    pub const TEXT: Color = Color::rgb8(0x37, 0x41, 0x51);
}

/// Parses CSS hex notation: `#rgb`, `#rrggbb` or `#rrggbbaa`.
impl FromStr for Color {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::ValidationError(format!("unsupported color '{}'", s));
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

        match digits.len() {
            3 => {
                let nibble = |shift: u32| (((value >> shift) & 0xF) * 0x11) as u8;
                Ok(Self::rgb8(nibble(8), nibble(4), nibble(0)))
            }
            6 => Ok(Self::from_hex(value)),
            8 => Ok(Self::from_hex(value >> 8).with_alpha((value & 0xFF) as f32 / 255.0)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// Value Object - fraction of the track a bar fills, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Proportion(f64);

impl Proportion {
    pub const ZERO: Proportion = Proportion(0.0);
    pub const FULL: Proportion = Proportion(1.0);

    /// Clamps `ratio` into `[0, 1]`; NaN becomes zero.
    pub fn new(ratio: f64) -> Self {
        if ratio.is_nan() {
            Self::ZERO
        } else {
            Self(ratio.clamp(0.0, 1.0))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// CSS width, e.g. `50%`.
    pub fn css_width(&self) -> String {
        format!("{}%", self.as_percent())
    }
}

/// Visual configuration shared by every rendering layer. Every field may be
/// omitted in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartStyle {
    pub accent: Color,
    pub track: Color,
    pub label_color: Color,
    pub row_height: f64,
    pub row_gap: f64,
    pub label_width: f64,
    pub value_width: f64,
    pub bar_radius: f64,
    pub font: String,
    /// Fixed decimals for value text; `None` prints the shortest exact form.
    pub value_precision: Option<usize>,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            accent: Color::ACCENT,
            track: Color::TRACK,
            label_color: Color::TEXT,
            row_height: 24.0,
            row_gap: 8.0,
            label_width: 120.0,
            value_width: 64.0,
            bar_radius: 4.0,
            font: "12px sans-serif".to_string(),
            value_precision: None,
        }
    }
}
