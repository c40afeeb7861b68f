//! Color gradients between positioned stops.
//!
//! A [`Gradient`] is built from colors or stop descriptors, then sampled into a fixed
//! number of colors ([`Gradient::rgb`], [`Gradient::hsv`]), queried at a single position
//! ([`Gradient::rgb_at`], [`Gradient::hsv_at`]) or rendered as a CSS gradient
//! ([`Gradient::css`]). The [`shortcuts`] module offers the same operations as one-call
//! functions.

pub mod color;
pub mod config;
pub mod css;
pub mod engine;
mod error;
mod gradient;
pub mod shortcuts;
pub mod stops;

pub use self::{
    color::{Color, ColorInput, Hsva, Rgba},
    config::GradientConfig,
    css::CssKind,
    engine::{HueArc, Interpolation},
    error::{GradientError, GradientResult, StepsError, StopsError},
    gradient::Gradient,
    stops::{ColorStop, StopInput},
};
