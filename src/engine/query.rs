//! Color lookup at a single position, without sampling the whole gradient.

use crate::{
    color::Color,
    error::{GradientError, GradientResult, StopsError},
    stops::ColorStop,
};

use super::interpolate::{Interpolation, blend};

/// Color of the gradient at `pos`, evaluated exactly rather than from a sampled grid.
///
/// `stops` must be a normalized stop list (at least two stops, from 0 to 1).
pub fn color_at(stops: &[ColorStop], pos: f64, mode: Interpolation) -> GradientResult<Color> {
    if !(0.0..=1.0).contains(&pos) {
        return Err(GradientError::InvalidPosition { pos });
    }

    let Some(last) = stops.last().copied() else {
        return Err(StopsError::TooFew { count: 0 }.into());
    };
    // past the last segment (pos == 1): both ends collapse onto the final stop
    let (start, end) = stops
        .windows(2)
        .find(|pair| pair[0].pos <= pos && pos < pair[1].pos)
        .map_or((last, last), |pair| (pair[0], pair[1]));

    let width = end.pos - start.pos;
    let t = if width > 0.0 {
        (pos - start.pos) / width
    } else {
        0.0
    };
    Ok(blend(&start.color, &end.color, t, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HueArc;

    fn stops(colors: &[(Color, f64)]) -> Vec<ColorStop> {
        colors
            .iter()
            .map(|(color, pos)| ColorStop::new(*color, *pos))
            .collect()
    }

    #[test]
    fn endpoints_are_stop_colors() {
        let stops = stops(&[(Color::BLACK, 0.0), (Color::WHITE, 1.0)]);
        assert_eq!(color_at(&stops, 0.0, Interpolation::Rgb).unwrap(), Color::BLACK);
        assert_eq!(color_at(&stops, 1.0, Interpolation::Rgb).unwrap(), Color::WHITE);
    }

    #[test]
    fn uses_the_enclosing_segment() {
        let red = Color::parse("red").unwrap();
        let stops = stops(&[(Color::BLACK, 0.0), (Color::WHITE, 0.5), (red, 1.0)]);
        let color = color_at(&stops, 0.75, Interpolation::Rgb).unwrap();
        assert_eq!(color.to_hex(), "ff8080");
    }

    #[test]
    fn hard_edge_switches_without_blending() {
        let red = Color::parse("red").unwrap();
        let blue = Color::parse("blue").unwrap();
        let stops = stops(&[(red, 0.0), (red, 0.5), (blue, 0.5), (blue, 1.0)]);

        assert_eq!(color_at(&stops, 0.4999, Interpolation::Rgb).unwrap(), red);
        assert_eq!(color_at(&stops, 0.5, Interpolation::Rgb).unwrap(), blue);
    }

    #[test]
    fn hsv_follows_the_requested_arc() {
        let red = Color::parse("red").unwrap();
        let blue = Color::parse("blue").unwrap();
        let stops = stops(&[(red, 0.0), (blue, 1.0)]);

        let clockwise = color_at(&stops, 0.5, Interpolation::Hsv(HueArc::Clockwise)).unwrap();
        let short = color_at(&stops, 0.5, Interpolation::Hsv(HueArc::Short)).unwrap();
        assert!((clockwise.to_hsv().h - 120.0).abs() < 1e-9);
        assert!((short.to_hsv().h - 300.0).abs() < 1e-9);
    }

    #[test]
    fn hsv_lookup_falls_back_to_rgb_for_gray_endpoints() {
        let gray = Color::parse("#808080").unwrap();
        let blue = Color::parse("blue").unwrap();
        let stops = stops(&[(gray, 0.0), (blue, 1.0)]);

        for pos in [0.25, 0.5, 0.9] {
            let rgb = color_at(&stops, pos, Interpolation::Rgb).unwrap();
            for arc in [HueArc::Clockwise, HueArc::Short, HueArc::Long] {
                assert_eq!(color_at(&stops, pos, Interpolation::Hsv(arc)).unwrap(), rgb);
            }
        }
        let mid = color_at(&stops, 0.5, Interpolation::Hsv(HueArc::Clockwise)).unwrap();
        assert_eq!(mid.to_hex(), "4040c0");
    }

    #[test]
    fn rejects_positions_outside_the_unit_range() {
        let stops = stops(&[(Color::BLACK, 0.0), (Color::WHITE, 1.0)]);
        for pos in [-0.01, 1.01, f64::NAN] {
            assert!(matches!(
                color_at(&stops, pos, Interpolation::Rgb),
                Err(GradientError::InvalidPosition { .. })
            ));
        }
    }
}
