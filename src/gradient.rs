//! Gradient value: validated stops plus sampling, lookup and CSS rendering.

use std::fmt;

use tracing::debug;

use crate::{
    color::Color,
    css::{self, CssKind},
    engine::{HueArc, Interpolation, interpolate, query, substeps},
    error::GradientResult,
    stops::{self, ColorStop, StopInput},
};

/// An immutable list of at least two color stops running from position 0 to position 1.
///
/// Operations that derive a new gradient ([`Gradient::reverse`], [`Gradient::looped`])
/// return an independent value.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<ColorStop>,
}

impl Gradient {
    /// Build a gradient from bare colors or stop descriptors.
    ///
    /// ```
    /// use neon_gradient::{Gradient, StopInput};
    ///
    /// let even = Gradient::new(["red", "green", "blue"])?;
    /// let placed = Gradient::new([
    ///     StopInput::at("black", 0.0),
    ///     StopInput::placeholder(0.2),
    ///     StopInput::at("white", 1.0),
    /// ])?;
    /// assert_eq!(even.len(), 3);
    /// assert_eq!(placed.len(), 3);
    /// # Ok::<(), neon_gradient::GradientError>(())
    /// ```
    pub fn new<I>(stops: I) -> GradientResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<StopInput>,
    {
        let inputs: Vec<StopInput> = stops.into_iter().map(Into::into).collect();
        Ok(Self {
            stops: stops::normalize(&inputs)?,
        })
    }

    /// Build a gradient from already resolved stops.
    pub fn from_stops(stops: Vec<ColorStop>) -> GradientResult<Self> {
        Ok(Self {
            stops: stops::normalize_resolved(stops)?,
        })
    }

    /// Normalized stops, first at 0 and last at 1.
    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Number of normalized stops (boundary stops included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false: a gradient holds at least two stops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Same stops in reverse order, each moved to `1 - pos`.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let stops = self
            .stops
            .iter()
            .rev()
            .map(|stop| ColorStop::new(stop.color, 1.0 - stop.pos))
            .collect();
        Self { stops }
    }

    /// Gradient that runs through the stops and then back to the first one.
    #[must_use]
    pub fn looped(&self) -> Self {
        let forward = self
            .stops
            .iter()
            .map(|stop| ColorStop::new(stop.color, stop.pos / 2.0));
        let backward = self.stops[..self.stops.len() - 1]
            .iter()
            .rev()
            .map(|stop| ColorStop::new(stop.color, 1.0 - stop.pos / 2.0));
        Self {
            stops: forward.chain(backward).collect(),
        }
    }

    /// `steps` colors sampled with RGB interpolation.
    pub fn rgb(&self, steps: usize) -> GradientResult<Vec<Color>> {
        self.sample(steps, Interpolation::Rgb)
    }

    /// `steps` colors sampled with HSV interpolation along `arc`.
    ///
    /// Segments with a grayscale endpoint are interpolated in RGB.
    pub fn hsv(&self, steps: usize, arc: HueArc) -> GradientResult<Vec<Color>> {
        self.sample(steps, Interpolation::Hsv(arc))
    }

    /// Exact RGB color at `pos`.
    pub fn rgb_at(&self, pos: f64) -> GradientResult<Color> {
        query::color_at(&self.stops, pos, Interpolation::Rgb)
    }

    /// Exact HSV color at `pos`, turning clockwise around the hue wheel.
    ///
    /// The hue always increases from one stop to the next, so blue (240) to red (0) passes
    /// through magenta: at the midpoint the hue is 300, not 120. Use
    /// [`Gradient::hsv_at_with`] to pick another direction.
    pub fn hsv_at(&self, pos: f64) -> GradientResult<Color> {
        self.hsv_at_with(pos, HueArc::default())
    }

    /// Exact HSV color at `pos` along `arc`.
    pub fn hsv_at_with(&self, pos: f64, arc: HueArc) -> GradientResult<Color> {
        query::color_at(&self.stops, pos, Interpolation::Hsv(arc))
    }

    /// CSS gradient listing every stop. `direction` defaults per [`CssKind`].
    #[must_use]
    pub fn css(&self, kind: CssKind, direction: Option<&str>) -> String {
        css::render(&self.stops, kind, direction)
    }

    fn sample(&self, steps: usize, mode: Interpolation) -> GradientResult<Vec<Color>> {
        let positions: Vec<f64> = self.stops.iter().map(|stop| stop.pos).collect();
        let shares = substeps::allocate(&positions, steps)?;
        debug!(steps, segments = shares.len(), ?mode, "sampling gradient");

        let mut colors = Vec::with_capacity(steps);
        for (pair, samples) in self.stops.windows(2).zip(shares) {
            colors.extend(interpolate::segment(
                &pair[0].color,
                &pair[1].color,
                samples,
                mode,
            ));
        }
        if let Some(last) = self.stops.last() {
            colors.push(last.color);
        }
        Ok(colors)
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css(CssKind::Linear, None))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::error::{GradientError, StepsError};

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(Color::to_hex).collect()
    }

    #[test]
    fn rgb_samples_black_to_white() {
        let gradient = Gradient::new(["black", "white"]).unwrap();
        assert_eq!(
            hexes(&gradient.rgb(5).unwrap()),
            vec!["000000", "404040", "808080", "bfbfbf", "ffffff"]
        );
    }

    #[test]
    fn samples_keep_stop_colors_at_both_ends() {
        let gradient = Gradient::new(["#ff8000", "#123456", "rgba(10, 200, 30, 0.4)"]).unwrap();
        for colors in [
            gradient.rgb(9).unwrap(),
            gradient.hsv(9, HueArc::Long).unwrap(),
        ] {
            assert_eq!(colors.len(), 9);
            assert_eq!(colors[0], gradient.stops()[0].color);
            assert_eq!(colors[8], gradient.stops()[2].color);
        }
    }

    #[test]
    fn rejects_too_few_steps() {
        let gradient = Gradient::new(["red", "green", "blue"]).unwrap();
        assert!(matches!(
            gradient.rgb(1),
            Err(GradientError::InvalidSteps(StepsError::TooFew { steps: 1 }))
        ));
        assert!(matches!(
            gradient.hsv(2, HueArc::Short),
            Err(GradientError::InvalidSteps(StepsError::FewerThanStops {
                steps: 2,
                stops: 3
            }))
        ));
    }

    #[test]
    fn reverse_flips_order_and_positions() {
        let gradient = Gradient::new([
            StopInput::at("red", 0.0),
            StopInput::at("green", 0.3),
            StopInput::at("blue", 1.0),
        ])
        .unwrap();
        let reversed = gradient.reverse();
        let positions: Vec<f64> = reversed.stops().iter().map(|stop| stop.pos).collect();
        assert_eq!(positions, vec![0.0, 0.7, 1.0]);
        assert_eq!(reversed.stops()[0].color.to_hex(), "0000ff");

        let twice = reversed.reverse();
        for (back, original) in twice.stops().iter().zip(gradient.stops()) {
            assert_eq!(back.color, original.color);
            assert!((back.pos - original.pos).abs() < 1e-12);
        }
    }

    #[test]
    fn looped_runs_there_and_back() {
        let gradient = Gradient::new(["black", "white"]).unwrap().looped();
        let positions: Vec<f64> = gradient.stops().iter().map(|stop| stop.pos).collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0]);

        let colors = gradient.rgb(5).unwrap();
        assert_eq!(colors[0], Color::BLACK);
        assert_eq!(colors[2], Color::WHITE);
        assert_eq!(colors[4], Color::BLACK);
    }

    #[test]
    fn position_queries_delegate_to_exact_lookup() {
        let gradient = Gradient::new(["white", "black"]).unwrap();
        assert_eq!(gradient.rgb_at(0.5).unwrap().to_rgb().r, 128.0);
        assert_eq!(gradient.rgb_at(1.0).unwrap(), Color::BLACK);

        let gradient = Gradient::new(["red", "blue"]).unwrap();
        assert!((gradient.hsv_at(0.5).unwrap().to_hsv().h - 120.0).abs() < 1e-9);
        assert!((gradient.hsv_at_with(0.5, HueArc::Short).unwrap().to_hsv().h - 300.0).abs() < 1e-9);
        let backward = gradient.reverse();
        assert!((backward.hsv_at(0.5).unwrap().to_hsv().h - 300.0).abs() < 1e-9);
        assert!(matches!(
            gradient.rgb_at(2.0),
            Err(GradientError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn display_is_linear_css() {
        let gradient = Gradient::new(["#f00", "#0f0", "#00f"]).unwrap();
        assert_eq!(
            gradient.to_string(),
            "linear-gradient(to right, rgb(255, 0, 0) 0%, rgb(0, 255, 0) 50%, rgb(0, 0, 255) 100%)"
        );
        assert_eq!(gradient.to_string(), gradient.css(CssKind::Linear, None));
    }

    #[test]
    fn from_stops_completes_boundaries() {
        let gradient = Gradient::from_stops(vec![
            ColorStop::new(Color::BLACK, 0.2),
            ColorStop::new(Color::WHITE, 0.8),
        ])
        .unwrap();
        assert_eq!(gradient.len(), 4);
        assert!(!gradient.is_empty());
    }

    proptest! {
        #[test]
        fn sample_count_matches_request(
            channels in prop::collection::vec((0u8..=255, 0u8..=255, 0u8..=255), 2..6),
            extra in 0usize..40,
        ) {
            let colors: Vec<Color> = channels
                .iter()
                .map(|(r, g, b)| Color::from_rgba(f64::from(*r), f64::from(*g), f64::from(*b), 1.0))
                .collect();
            let gradient = Gradient::new(colors).unwrap();
            let steps = gradient.len() + extra;

            prop_assert_eq!(gradient.rgb(steps).unwrap().len(), steps);
            prop_assert_eq!(gradient.hsv(steps, HueArc::Short).unwrap().len(), steps);
        }
    }
}
