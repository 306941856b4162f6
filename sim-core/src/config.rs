use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Scenario used to construct a [`crate::integrator::LorenzAttractor`].
///
/// Missing keys fall back to [`Config::default`], so a scenario file only
/// needs to name the values it changes:
///
/// ```yaml
/// initial_x: 0.0
/// initial_y: 1.0
/// initial_z: 1.05
/// time_step: 0.01
/// ```
///
/// Values are passed through the integrator's constructor untouched, which
/// means a `0.0` time step still ends up as `1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub initial_x: f64,
    pub initial_y: f64,
    pub initial_z: f64,
    pub time_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_x: 0.0,
            initial_y: 1.0,
            initial_z: 1.05,
            time_step: 0.01,
        }
    }
}

impl Config {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
