//! Stop descriptors and their normalization into an ordered, validated stop list.

use serde::Deserialize;
use tracing::debug;

use crate::{
    color::{Color, ColorInput},
    error::{GradientError, GradientResult, StopsError},
};

/// A color anchored at a normalized position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Stop color.
    pub color: Color,
    /// Position in `[0, 1]`.
    pub pos: f64,
}

impl ColorStop {
    /// Pair a color with a position.
    #[must_use]
    pub const fn new(color: Color, pos: f64) -> Self {
        Self { color, pos }
    }
}

/// One entry of the constructor input.
///
/// Within one list, either every entry declares a position (`Positioned` and
/// `Placeholder`) or none does (`Bare` and `Unpositioned`). Descriptor objects with
/// extra keys are rejected, so a malformed color never degrades into a placeholder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawStopInput")]
pub enum StopInput {
    /// `{"color": ..., "pos": ...}`
    Positioned {
        /// Stop color.
        color: ColorInput,
        /// Declared position.
        pos: f64,
    },
    /// `{"pos": ...}`: the color is the midpoint of both neighbors.
    Placeholder {
        /// Declared position.
        pos: f64,
    },
    /// `{"color": ...}`: spaced evenly with the rest of the list.
    Unpositioned {
        /// Stop color.
        color: ColorInput,
    },
    /// A bare color, spaced evenly with the rest of the list.
    Bare(ColorInput),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStopInput {
    Positioned(RawPositioned),
    Placeholder(RawPlaceholder),
    Unpositioned(RawUnpositioned),
    Bare(ColorInput),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPositioned {
    color: ColorInput,
    pos: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPlaceholder {
    pos: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUnpositioned {
    color: ColorInput,
}

impl From<RawStopInput> for StopInput {
    fn from(value: RawStopInput) -> Self {
        match value {
            RawStopInput::Positioned(RawPositioned { color, pos }) => {
                Self::Positioned { color, pos }
            }
            RawStopInput::Placeholder(RawPlaceholder { pos }) => Self::Placeholder { pos },
            RawStopInput::Unpositioned(RawUnpositioned { color }) => Self::Unpositioned { color },
            RawStopInput::Bare(color) => Self::Bare(color),
        }
    }
}

impl StopInput {
    /// Stop with an explicit position.
    pub fn at(color: impl Into<ColorInput>, pos: f64) -> Self {
        Self::Positioned {
            color: color.into(),
            pos,
        }
    }

    /// Position-only stop.
    #[must_use]
    pub const fn placeholder(pos: f64) -> Self {
        Self::Placeholder { pos }
    }

    fn pos(&self) -> Option<f64> {
        match self {
            Self::Positioned { pos, .. } | Self::Placeholder { pos } => Some(*pos),
            Self::Unpositioned { .. } | Self::Bare(_) => None,
        }
    }

    fn color(&self) -> Option<&ColorInput> {
        match self {
            Self::Positioned { color, .. } | Self::Unpositioned { color } | Self::Bare(color) => {
                Some(color)
            }
            Self::Placeholder { .. } => None,
        }
    }
}

impl From<&str> for StopInput {
    fn from(value: &str) -> Self {
        Self::Bare(value.into())
    }
}

impl From<String> for StopInput {
    fn from(value: String) -> Self {
        Self::Bare(value.into())
    }
}

impl From<Color> for StopInput {
    fn from(value: Color) -> Self {
        Self::Bare(value.into())
    }
}

impl From<ColorInput> for StopInput {
    fn from(value: ColorInput) -> Self {
        Self::Bare(value)
    }
}

impl From<ColorStop> for StopInput {
    fn from(value: ColorStop) -> Self {
        Self::at(value.color, value.pos)
    }
}

/// Validate the input and produce the canonical stop list.
///
/// The result holds at least two stops, starts at position 0, ends at position 1 and has
/// non-decreasing positions.
pub(crate) fn normalize(inputs: &[StopInput]) -> GradientResult<Vec<ColorStop>> {
    let count = inputs.len();
    if count < 2 {
        return Err(StopsError::TooFew { count }.into());
    }

    let colors = inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            input
                .color()
                .map(|color| {
                    color
                        .resolve()
                        .map_err(|source| GradientError::InvalidColor { index, source })
                })
                .transpose()
        })
        .collect::<GradientResult<Vec<Option<Color>>>>()?;

    let positioned = inputs[0].pos().is_some();
    let mut previous: Option<f64> = None;
    let mut placeholders = 0usize;
    let mut stops = Vec::with_capacity(count + 2);

    for (index, input) in inputs.iter().enumerate() {
        if input.pos().is_some() != positioned {
            return Err(StopsError::MixedPositions { index }.into());
        }

        let color = match colors[index] {
            Some(color) => color,
            None => {
                placeholders += 1;
                placeholder_color(&colors, index)?
            }
        };

        let pos = match input.pos() {
            Some(pos) => {
                check_position(index, pos, previous)?;
                previous = Some(pos);
                pos
            }
            None => uniform_position(index, count),
        };

        stops.push(ColorStop::new(color, pos));
    }

    if placeholders > 0 {
        debug!(placeholders, "resolved position-only stops");
    }
    complete_boundaries(&mut stops);

    debug!(
        inputs = count,
        stops = stops.len(),
        positioned,
        "normalized gradient stops"
    );
    Ok(stops)
}

/// Validate already-resolved stops and complete their boundaries.
pub(crate) fn normalize_resolved(stops: Vec<ColorStop>) -> GradientResult<Vec<ColorStop>> {
    let count = stops.len();
    if count < 2 {
        return Err(StopsError::TooFew { count }.into());
    }

    let mut previous = None;
    for (index, stop) in stops.iter().enumerate() {
        check_position(index, stop.pos, previous)?;
        previous = Some(stop.pos);
    }

    let mut stops = stops;
    complete_boundaries(&mut stops);
    Ok(stops)
}

#[allow(clippy::cast_precision_loss)]
fn uniform_position(index: usize, count: usize) -> f64 {
    index as f64 / (count - 1) as f64
}

fn check_position(index: usize, pos: f64, previous: Option<f64>) -> Result<(), StopsError> {
    if !(0.0..=1.0).contains(&pos) {
        return Err(StopsError::OutOfRange { index, pos });
    }
    match previous {
        Some(previous) if pos < previous => Err(StopsError::Unordered {
            index,
            pos,
            previous,
        }),
        _ => Ok(()),
    }
}

/// Midpoint of the two neighbors, both of which must be colored stops.
fn placeholder_color(colors: &[Option<Color>], index: usize) -> Result<Color, StopsError> {
    let before = index.checked_sub(1).and_then(|i| colors.get(i)).copied().flatten();
    let after = colors.get(index + 1).copied().flatten();
    match (before, after) {
        (Some(before), Some(after)) => Ok(before.mix(&after, 0.5)),
        _ => Err(StopsError::MisplacedPlaceholder { index }),
    }
}

/// Expects at least one stop.
fn complete_boundaries(stops: &mut Vec<ColorStop>) {
    let (Some(first), Some(last)) = (stops.first().copied(), stops.last().copied()) else {
        return;
    };
    if first.pos != 0.0 {
        debug!(pos = first.pos, "inserting start boundary stop");
        stops.insert(0, ColorStop::new(first.color, 0.0));
    }
    if last.pos != 1.0 {
        debug!(pos = last.pos, "inserting end boundary stop");
        stops.push(ColorStop::new(last.color, 1.0));
    }
}
