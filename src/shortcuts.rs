//! One-call helpers that build a [`Gradient`] and run a single operation on it.

use crate::{
    color::Color,
    css::CssKind,
    engine::HueArc,
    error::GradientResult,
    gradient::Gradient,
    stops::StopInput,
};

/// `Gradient::new(stops)?.rgb(steps)`
pub fn rgb<I>(stops: I, steps: usize) -> GradientResult<Vec<Color>>
where
    I: IntoIterator,
    I::Item: Into<StopInput>,
{
    Gradient::new(stops)?.rgb(steps)
}

/// `Gradient::new(stops)?.hsv(steps, arc)`
pub fn hsv<I>(stops: I, steps: usize, arc: HueArc) -> GradientResult<Vec<Color>>
where
    I: IntoIterator,
    I::Item: Into<StopInput>,
{
    Gradient::new(stops)?.hsv(steps, arc)
}

/// `Gradient::new(stops)?.css(kind, direction)`
pub fn css<I>(stops: I, kind: CssKind, direction: Option<&str>) -> GradientResult<String>
where
    I: IntoIterator,
    I::Item: Into<StopInput>,
{
    Ok(Gradient::new(stops)?.css(kind, direction))
}

/// `Gradient::new(stops)?.rgb_at(pos)`
pub fn rgb_at<I>(stops: I, pos: f64) -> GradientResult<Color>
where
    I: IntoIterator,
    I::Item: Into<StopInput>,
{
    Gradient::new(stops)?.rgb_at(pos)
}

/// `Gradient::new(stops)?.hsv_at(pos)`
pub fn hsv_at<I>(stops: I, pos: f64) -> GradientResult<Color>
where
    I: IntoIterator,
    I::Item: Into<StopInput>,
{
    Gradient::new(stops)?.hsv_at(pos)
}
