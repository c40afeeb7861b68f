//! Defaults for the command line tool, optionally overridden by a JSON file.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    css::{CssKind, DEFAULT_LINEAR_DIRECTION, DEFAULT_RADIAL_DIRECTION},
    engine::HueArc,
};

/// Default location on disk where the tool looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/gradient.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "NEON_GRADIENT_CONFIG_PATH";
/// Sample count used when none is requested.
const DEFAULT_STEPS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable defaults applied when a command omits an option.
pub struct GradientConfig {
    /// Number of samples for `rgb` and `hsv`.
    pub steps: usize,
    /// Hue direction for `hsv` and `hsv-at`.
    pub hue_arc: HueArc,
    /// Direction of linear CSS gradients.
    pub linear_direction: String,
    /// Shape of radial CSS gradients.
    pub radial_direction: String,
}

impl GradientConfig {
    /// Load the configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json_str(&contents) {
                Ok(config) => {
                    info!(
                        path = %path.display(),
                        steps = config.steps,
                        hue_arc = %config.hue_arc,
                        "loaded gradient defaults from config"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Parse a JSON document. Omitted fields keep their default.
    pub fn from_json_str(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<RawConfig>(contents).map(Into::into)
    }

    /// Direction configured for `kind`.
    #[must_use]
    pub fn direction(&self, kind: CssKind) -> &str {
        match kind {
            CssKind::Linear => &self.linear_direction,
            CssKind::Radial => &self.radial_direction,
        }
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            hue_arc: HueArc::default(),
            linear_direction: DEFAULT_LINEAR_DIRECTION.to_owned(),
            radial_direction: DEFAULT_RADIAL_DIRECTION.to_owned(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    steps: Option<usize>,
    hue_arc: Option<HueArc>,
    linear_direction: Option<String>,
    radial_direction: Option<String>,
}

impl From<RawConfig> for GradientConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            steps: value.steps.unwrap_or(defaults.steps),
            hue_arc: value.hue_arc.unwrap_or(defaults.hue_arc),
            linear_direction: value.linear_direction.unwrap_or(defaults.linear_direction),
            radial_direction: value.radial_direction.unwrap_or(defaults.radial_direction),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
