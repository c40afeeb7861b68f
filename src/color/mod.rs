//! Color handles used as gradient stops and samples.
//!
//! Parsing of CSS color strings is delegated to `csscolorparser`, HSV/HSL conversions to
//! `palette`. The rest of the crate only reads channel tuples through [`Color::to_rgb`]
//! and [`Color::to_hsv`].

mod input;

use std::{fmt, str::FromStr};

use palette::{FromColor, Hsl, Hsv, Srgb, encoding};
use serde::Serialize;

pub use self::input::ColorInput;

type Hsv64 = Hsv<encoding::Srgb, f64>;
type Hsl64 = Hsl<encoding::Srgb, f64>;

/// Upper bound of the red, green and blue channels.
pub const RGB_CHANNEL_MAX: f64 = 255.0;

/// Straight-alpha sRGB channels, `r`/`g`/`b` in `[0, 255]` and `a` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

/// HSV channels, `h` in degrees `[0, 360)`, `s`/`v`/`a` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsva {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Value (brightness).
    pub v: f64,
    /// Alpha channel.
    pub a: f64,
}

/// An immutable color.
///
/// Channels are kept unrounded so that chained interpolations do not accumulate
/// rounding error; rounding happens when reading through [`Color::to_rgb`] or one of the
/// string renderers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white.
    pub const WHITE: Self = Self {
        r: RGB_CHANNEL_MAX,
        g: RGB_CHANNEL_MAX,
        b: RGB_CHANNEL_MAX,
        a: 1.0,
    };

    /// Parse any CSS color understood by `csscolorparser` (names, hex, `rgb()`, `hsl()`, ...).
    pub fn parse(value: &str) -> Result<Self, csscolorparser::ParseColorError> {
        let parsed = csscolorparser::parse(value)?;
        Ok(Self::from_unit_rgba(
            f64::from(parsed.r),
            f64::from(parsed.g),
            f64::from(parsed.b),
            f64::from(parsed.a),
        ))
    }

    /// Build a color from `[0, 255]` channels; out-of-range values are clamped.
    #[must_use]
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_channel(r, RGB_CHANNEL_MAX),
            g: clamp_channel(g, RGB_CHANNEL_MAX),
            b: clamp_channel(b, RGB_CHANNEL_MAX),
            a: clamp_channel(a, 1.0),
        }
    }

    /// Build a color from HSV channels. The hue wraps, the other channels are clamped.
    #[must_use]
    pub fn from_hsva(h: f64, s: f64, v: f64, a: f64) -> Self {
        let hsv = Hsv64::new(wrap_hue(h), clamp_channel(s, 1.0), clamp_channel(v, 1.0));
        let rgb = Srgb::<f64>::from_color(hsv);
        Self::from_unit_rgba(rgb.red, rgb.green, rgb.blue, a)
    }

    /// Build a color from HSL channels. The hue wraps, the other channels are clamped.
    #[must_use]
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        let hsl = Hsl64::new(wrap_hue(h), clamp_channel(s, 1.0), clamp_channel(l, 1.0));
        let rgb = Srgb::<f64>::from_color(hsl);
        Self::from_unit_rgba(rgb.red, rgb.green, rgb.blue, a)
    }

    fn from_unit_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::from_rgba(
            r * RGB_CHANNEL_MAX,
            g * RGB_CHANNEL_MAX,
            b * RGB_CHANNEL_MAX,
            a,
        )
    }

    /// RGBA tuple with `r`/`g`/`b` rounded to the nearest integer.
    #[must_use]
    pub fn to_rgb(&self) -> Rgba {
        Rgba {
            r: self.r.round(),
            g: self.g.round(),
            b: self.b.round(),
            a: self.a,
        }
    }

    /// HSVA tuple computed from the unrounded channels.
    #[must_use]
    pub fn to_hsv(&self) -> Hsva {
        let rgb = Srgb::<f64>::new(
            self.r / RGB_CHANNEL_MAX,
            self.g / RGB_CHANNEL_MAX,
            self.b / RGB_CHANNEL_MAX,
        );
        let hsv = Hsv64::from_color(rgb);
        Hsva {
            h: wrap_hue(hsv.hue.into_degrees()),
            s: hsv.saturation,
            v: hsv.value,
            a: self.a,
        }
    }

    /// Alpha channel.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// Whether the color has no hue (HSV saturation of exactly 0): black, white, grays.
    #[must_use]
    pub fn is_achromatic(&self) -> bool {
        self.to_hsv().s == 0.0
    }

    /// CSS functional notation: `rgb(r, g, b)` when opaque, `rgba(r, g, b, a)` otherwise.
    #[must_use]
    pub fn to_rgb_string(&self) -> String {
        let Rgba { r, g, b, a } = self.to_rgb();
        let a = (a * 100.0).round() / 100.0;
        if a >= 1.0 {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {a})")
        }
    }

    /// Lowercase `rrggbb` hex digits, alpha ignored.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let Rgba { r, g, b, .. } = self.to_rgb();
        format!("{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b))
    }

    /// `#rrggbb`.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        format!("#{}", self.to_hex())
    }

    /// Blend towards `other` by `amount` (`0` keeps `self`, `1` yields `other`).
    ///
    /// Works on the rounded RGBA tuples of both colors.
    #[must_use]
    pub fn mix(&self, other: &Self, amount: f64) -> Self {
        let from = self.to_rgb();
        let to = other.to_rgb();
        let amount = clamp_channel(amount, 1.0);
        Self::from_rgba(
            (to.r - from.r).mul_add(amount, from.r),
            (to.g - from.g).mul_add(amount, from.g),
            (to.b - from.b).mul_add(amount, from.b),
            (to.a - from.a).mul_add(amount, from.a),
        )
    }
}

impl From<Rgba> for Color {
    fn from(value: Rgba) -> Self {
        Self::from_rgba(value.r, value.g, value.b, value.a)
    }
}

impl From<Hsva> for Color {
    fn from(value: Hsva) -> Self {
        Self::from_hsva(value.h, value.s, value.v, value.a)
    }
}

impl FromStr for Color {
    type Err = csscolorparser::ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgb_string())
    }
}

fn clamp_channel(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

pub(crate) fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    let wrapped = h.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn byte(channel: f64) -> u8 {
    channel.clamp(0.0, RGB_CHANNEL_MAX) as u8
}
