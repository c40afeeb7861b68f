//! CSS `linear-gradient()` / `radial-gradient()` rendering.

use std::{fmt, fmt::Write as _, str::FromStr};

use serde::Deserialize;

use crate::stops::ColorStop;

/// Default direction of a linear gradient.
pub const DEFAULT_LINEAR_DIRECTION: &str = "to right";
/// Default shape of a radial gradient.
pub const DEFAULT_RADIAL_DIRECTION: &str = "ellipse at center";

/// Kind of CSS gradient function to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssKind {
    /// `linear-gradient(...)`
    #[default]
    Linear,
    /// `radial-gradient(...)`
    Radial,
}

impl CssKind {
    /// Direction used when the caller doesn't provide one.
    #[must_use]
    pub const fn default_direction(self) -> &'static str {
        match self {
            Self::Linear => DEFAULT_LINEAR_DIRECTION,
            Self::Radial => DEFAULT_RADIAL_DIRECTION,
        }
    }

    const fn function(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Radial => "radial",
        }
    }
}

impl FromStr for CssKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "radial" => Ok(Self::Radial),
            other => Err(format!("unknown css gradient kind '{other}' (expected linear or radial)")),
        }
    }
}

impl fmt::Display for CssKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function())
    }
}

/// Render every stop as `<kind>-gradient(<direction>, <color> <percent>%, ...)`.
pub fn render(stops: &[ColorStop], kind: CssKind, direction: Option<&str>) -> String {
    let direction = direction.unwrap_or_else(|| kind.default_direction());
    let mut css = format!("{}-gradient({direction}", kind.function());
    for stop in stops {
        // writing into a String cannot fail
        let _ = write!(css, ", {} {}%", stop.color.to_rgb_string(), stop.pos * 100.0);
    }
    css.push(')');
    css
}
