//! Accepted shapes for a stop color before it is resolved into a [`Color`].

use serde::Deserialize;

use super::Color;

const fn opaque() -> f64 {
    1.0
}

/// Any value that can be turned into a [`Color`].
///
/// Deserializes from a CSS string (`"red"`, `"#ff0000"`, `"hsl(0, 100%, 50%)"`) or from a
/// channel object (`{"r":255,"g":0,"b":0}`, `{"h":0,"s":1,"v":1}`, `{"h":0,"s":1,"l":0.5}`),
/// each with an optional `a`. Objects with missing or extra keys are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawColorInput")]
pub enum ColorInput {
    /// CSS color string.
    Css(String),
    /// Red, green and blue in `[0, 255]`.
    Rgb {
        /// Red channel.
        r: f64,
        /// Green channel.
        g: f64,
        /// Blue channel.
        b: f64,
        /// Alpha channel, opaque when omitted.
        a: f64,
    },
    /// Hue in degrees, saturation and value in `[0, 1]` (or `[0, 100]` as percentages).
    Hsv {
        /// Hue in degrees.
        h: f64,
        /// Saturation.
        s: f64,
        /// Value.
        v: f64,
        /// Alpha channel, opaque when omitted.
        a: f64,
    },
    /// Hue in degrees, saturation and lightness in `[0, 1]` (or `[0, 100]` as percentages).
    Hsl {
        /// Hue in degrees.
        h: f64,
        /// Saturation.
        s: f64,
        /// Lightness.
        l: f64,
        /// Alpha channel, opaque when omitted.
        a: f64,
    },
    /// Already resolved color.
    Color(Color),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColorInput {
    Css(String),
    Rgb(RawRgb),
    Hsv(RawHsv),
    Hsl(RawHsl),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRgb {
    r: f64,
    g: f64,
    b: f64,
    #[serde(default = "opaque")]
    a: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHsv {
    h: f64,
    s: f64,
    v: f64,
    #[serde(default = "opaque")]
    a: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHsl {
    h: f64,
    s: f64,
    l: f64,
    #[serde(default = "opaque")]
    a: f64,
}

impl From<RawColorInput> for ColorInput {
    fn from(value: RawColorInput) -> Self {
        match value {
            RawColorInput::Css(value) => Self::Css(value),
            RawColorInput::Rgb(RawRgb { r, g, b, a }) => Self::Rgb { r, g, b, a },
            RawColorInput::Hsv(RawHsv { h, s, v, a }) => Self::Hsv { h, s, v, a },
            RawColorInput::Hsl(RawHsl { h, s, l, a }) => Self::Hsl { h, s, l, a },
        }
    }
}

impl ColorInput {
    /// Resolve the input into a color. Only CSS strings can fail.
    pub fn resolve(&self) -> Result<Color, csscolorparser::ParseColorError> {
        match self {
            Self::Css(value) => Color::parse(value),
            Self::Rgb { r, g, b, a } => Ok(Color::from_rgba(*r, *g, *b, *a)),
            Self::Hsv { h, s, v, a } => Ok(Color::from_hsva(*h, unit(*s), unit(*v), *a)),
            Self::Hsl { h, s, l, a } => Ok(Color::from_hsla(*h, unit(*s), unit(*l), *a)),
            Self::Color(color) => Ok(*color),
        }
    }
}

/// Values above 1 are read as percentages.
fn unit(value: f64) -> f64 {
    if value > 1.0 { value / 100.0 } else { value }
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Css(value.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Css(value)
    }
}

impl From<Color> for ColorInput {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}
