//! Per-segment channel interpolation in RGB and HSV space.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use tracing::debug;

use crate::color::{Color, Hsva, Rgba, wrap_hue};

/// Channel ceilings for `[r, g, b, a]`. Color channels wrap at 256, alpha is clamped.
const RGBA_MAX: [f64; 4] = [256.0, 256.0, 256.0, 1.0];
/// Channel ceilings for `[h, s, v, a]`. Hue wraps at 360, the rest is clamped.
const HSVA_MAX: [f64; 4] = [360.0, 1.0, 1.0, 1.0];

type Channels = [f64; 4];

/// Direction used to travel around the hue wheel during HSV interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueArc {
    /// Hue increases, wrapping from 360 to 0.
    #[default]
    Clockwise,
    /// Hue decreases, wrapping from 0 to 360 (trigonometric order).
    #[serde(alias = "trigonometric")]
    Counterclockwise,
    /// Whichever direction covers less than half a turn.
    Short,
    /// Whichever direction covers at least half a turn.
    Long,
}

impl HueArc {
    /// Legacy boolean flag: `false` is clockwise, `true` is trigonometric order.
    #[must_use]
    pub const fn from_trigonometric(trigonometric: bool) -> Self {
        if trigonometric {
            Self::Counterclockwise
        } else {
            Self::Clockwise
        }
    }

    /// Signed hue travel, in degrees, needed to go from `start` to `end` along this arc.
    ///
    /// Equal hues never produce a full turn. An exact half turn is taken counter-clockwise
    /// by [`HueArc::Short`] and clockwise by [`HueArc::Long`].
    #[must_use]
    pub fn hue_delta(self, start: f64, end: f64) -> f64 {
        let clockwise = (end - start).rem_euclid(360.0);
        let counterclockwise = (start - end).rem_euclid(360.0);
        let turn_clockwise = match self {
            Self::Clockwise => true,
            Self::Counterclockwise => false,
            Self::Short => clockwise < 180.0,
            Self::Long => clockwise >= 180.0,
        };
        if turn_clockwise {
            clockwise
        } else {
            -counterclockwise
        }
    }
}

impl FromStr for HueArc {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clockwise" | "false" => Ok(Self::Clockwise),
            "counterclockwise" | "trigonometric" | "true" => Ok(Self::Counterclockwise),
            "short" => Ok(Self::Short),
            "long" => Ok(Self::Long),
            other => Err(format!(
                "unknown hue arc '{other}' (expected clockwise, counterclockwise, short or long)"
            )),
        }
    }
}

impl fmt::Display for HueArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clockwise => "clockwise",
            Self::Counterclockwise => "counterclockwise",
            Self::Short => "short",
            Self::Long => "long",
        })
    }
}

/// Color space in which a gradient is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Independent linear interpolation of red, green, blue and alpha.
    #[default]
    Rgb,
    /// Linear saturation/value/alpha with the hue following the given arc.
    Hsv(HueArc),
}

/// Colors of one segment: `start` followed by `samples - 1` intermediates, `end` excluded.
pub fn segment(start: &Color, end: &Color, samples: usize, mode: Interpolation) -> Vec<Color> {
    match mode {
        Interpolation::Rgb => rgb_segment(start, end, samples),
        Interpolation::Hsv(arc) => hsv_segment(start, end, samples, arc),
    }
}

/// Color at fraction `t` of the way from `start` to `end`.
pub fn blend(start: &Color, end: &Color, t: f64, mode: Interpolation) -> Color {
    if t <= 0.0 {
        return *start;
    }
    if t >= 1.0 {
        return *end;
    }
    match mode {
        Interpolation::Rgb => rgb_blend(start, end, t),
        Interpolation::Hsv(arc) => match hsv_endpoints(start, end) {
            Some((from, to)) => {
                let mut delta = difference(from, to);
                delta[0] = arc.hue_delta(from[0], to[0]);
                hsv_color(offset(from, delta, t, HSVA_MAX))
            }
            None => rgb_blend(start, end, t),
        },
    }
}

fn rgb_segment(start: &Color, end: &Color, samples: usize) -> Vec<Color> {
    let from = rgba_channels(start.to_rgb());
    let step = stepize(from, rgba_channels(end.to_rgb()), samples);
    collect_segment(start, samples, |i| rgb_color(offset(from, step, i, RGBA_MAX)))
}

fn hsv_segment(start: &Color, end: &Color, samples: usize, arc: HueArc) -> Vec<Color> {
    let Some((from, to)) = hsv_endpoints(start, end) else {
        return rgb_segment(start, end, samples);
    };
    let mut step = stepize(from, to, samples);
    step[0] = per_sample(arc.hue_delta(from[0], to[0]), samples);
    collect_segment(start, samples, |i| hsv_color(offset(from, step, i, HSVA_MAX)))
}

fn rgb_blend(start: &Color, end: &Color, t: f64) -> Color {
    let from = rgba_channels(start.to_rgb());
    let delta = difference(from, rgba_channels(end.to_rgb()));
    rgb_color(offset(from, delta, t, RGBA_MAX))
}

/// HSV channels of both endpoints, or `None` when either one has no hue.
fn hsv_endpoints(start: &Color, end: &Color) -> Option<(Channels, Channels)> {
    let from = start.to_hsv();
    let to = end.to_hsv();
    if from.s == 0.0 || to.s == 0.0 {
        debug!(
            start = %start.to_hex_string(),
            end = %end.to_hex_string(),
            "achromatic endpoint, interpolating in rgb"
        );
        return None;
    }
    Some((hsva_channels(from), hsva_channels(to)))
}

#[allow(clippy::cast_precision_loss)]
fn collect_segment(start: &Color, samples: usize, sample: impl Fn(f64) -> Color) -> Vec<Color> {
    let mut colors = Vec::with_capacity(samples);
    if samples == 0 {
        return colors;
    }
    colors.push(*start);
    colors.extend((1..samples).map(|i| sample(i as f64)));
    colors
}

fn stepize(start: Channels, end: Channels, samples: usize) -> Channels {
    let delta = difference(start, end);
    delta.map(|d| per_sample(d, samples))
}

#[allow(clippy::cast_precision_loss)]
fn per_sample(delta: f64, samples: usize) -> f64 {
    if samples == 0 { 0.0 } else { delta / samples as f64 }
}

fn difference(start: Channels, end: Channels) -> Channels {
    std::array::from_fn(|k| end[k] - start[k])
}

fn offset(start: Channels, step: Channels, factor: f64, max: Channels) -> Channels {
    std::array::from_fn(|k| wrap_channel(step[k].mul_add(factor, start[k]), max[k]))
}

/// Channels with a ceiling of 1 are clamped, the others wrap around their ceiling.
fn wrap_channel(value: f64, max: f64) -> f64 {
    if max == 1.0 {
        value.clamp(0.0, 1.0)
    } else if value < 0.0 {
        value + max
    } else {
        value % max
    }
}

const fn rgba_channels(rgba: Rgba) -> Channels {
    [rgba.r, rgba.g, rgba.b, rgba.a]
}

const fn hsva_channels(hsva: Hsva) -> Channels {
    [hsva.h, hsva.s, hsva.v, hsva.a]
}

fn rgb_color([r, g, b, a]: Channels) -> Color {
    Color::from_rgba(r, g, b, a)
}

fn hsv_color([h, s, v, a]: Channels) -> Color {
    Color::from_hsva(wrap_hue(h), s, v, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(Color::to_hex).collect()
    }

    fn hue(h: f64) -> Color {
        Color::from_hsva(h, 1.0, 1.0, 1.0)
    }

    fn hues(colors: &[Color]) -> Vec<f64> {
        colors.iter().map(|c| c.to_hsv().h.round()).collect()
    }

    #[test]
    fn rgb_segment_excludes_end() {
        let colors = segment(&Color::BLACK, &Color::WHITE, 4, Interpolation::Rgb);
        assert_eq!(hexes(&colors), vec!["000000", "404040", "808080", "bfbfbf"]);
    }

    #[test]
    fn single_sample_segment_is_just_the_start() {
        let colors = segment(&Color::WHITE, &Color::BLACK, 1, Interpolation::Rgb);
        assert_eq!(colors, vec![Color::WHITE]);
    }

    #[test]
    fn empty_segment_yields_nothing() {
        assert!(segment(&Color::WHITE, &Color::BLACK, 0, Interpolation::Rgb).is_empty());
    }

    #[test]
    fn rgb_interpolates_alpha() {
        let transparent = Color::from_rgba(0.0, 0.0, 0.0, 0.0);
        let colors = segment(&transparent, &Color::BLACK, 4, Interpolation::Rgb);
        let alphas: Vec<f64> = colors.iter().map(Color::alpha).collect();
        assert_eq!(alphas, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn clockwise_wraps_through_zero() {
        let colors = segment(
            &hue(300.0),
            &hue(60.0),
            4,
            Interpolation::Hsv(HueArc::Clockwise),
        );
        assert_eq!(hues(&colors), vec![300.0, 330.0, 0.0, 30.0]);
    }

    #[test]
    fn counterclockwise_goes_the_other_way() {
        let colors = segment(
            &hue(60.0),
            &hue(300.0),
            4,
            Interpolation::Hsv(HueArc::Counterclockwise),
        );
        assert_eq!(hues(&colors), vec![60.0, 30.0, 0.0, 330.0]);
    }

    #[test]
    fn short_and_long_pick_by_arc_length() {
        assert_eq!(HueArc::Short.hue_delta(300.0, 60.0), 120.0);
        assert_eq!(HueArc::Long.hue_delta(300.0, 60.0), -240.0);
        assert_eq!(HueArc::Short.hue_delta(60.0, 300.0), -120.0);
        assert_eq!(HueArc::Long.hue_delta(60.0, 300.0), 240.0);
    }

    #[test]
    fn half_turn_ties_and_equal_hues() {
        assert_eq!(HueArc::Short.hue_delta(0.0, 180.0), -180.0);
        assert_eq!(HueArc::Long.hue_delta(0.0, 180.0), 180.0);
        assert_eq!(HueArc::Long.hue_delta(90.0, 90.0), 0.0);
        assert_eq!(HueArc::Short.hue_delta(90.0, 90.0), 0.0);
    }

    #[test]
    fn achromatic_endpoint_falls_back_to_rgb() {
        let gray = Color::from_rgba(86.0, 86.0, 86.0, 1.0);
        let teal = Color::from_rgba(45.0, 163.0, 185.0, 1.0);
        assert_eq!(
            hexes(&segment(&gray, &teal, 5, Interpolation::Hsv(HueArc::Short))),
            hexes(&segment(&gray, &teal, 5, Interpolation::Rgb))
        );
    }

    #[test]
    fn blend_is_exact_midpoint() {
        let mid = blend(&Color::WHITE, &Color::BLACK, 0.5, Interpolation::Rgb);
        assert_eq!(mid.to_rgb().r, 128.0);

        let mid = blend(
            &Color::parse("red").unwrap(),
            &Color::parse("blue").unwrap(),
            0.5,
            Interpolation::Hsv(HueArc::Clockwise),
        );
        assert!((mid.to_hsv().h - 120.0).abs() < 1e-9);
    }

    #[test]
    fn blend_endpoints_are_the_stop_colors() {
        let start = Color::from_rgba(10.4, 20.6, 30.0, 1.0);
        assert_eq!(blend(&start, &Color::WHITE, 0.0, Interpolation::Rgb), start);
        assert_eq!(
            blend(&start, &Color::WHITE, 1.0, Interpolation::Rgb),
            Color::WHITE
        );
    }

    #[test]
    fn parses_arc_names() {
        assert_eq!("short".parse::<HueArc>().unwrap(), HueArc::Short);
        assert_eq!("true".parse::<HueArc>().unwrap(), HueArc::Counterclockwise);
        assert_eq!(HueArc::from_trigonometric(false), HueArc::Clockwise);
        assert!("sideways".parse::<HueArc>().is_err());
    }
}
