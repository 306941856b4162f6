use thiserror::Error;

/// Failures raised while advancing a [`crate::integrator::LorenzAttractor`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorError {
    /// `next()` was called while the trajectory is empty, which only
    /// happens after `reset()`.
    #[error("cannot advance: trajectory is empty (it was cleared by reset)")]
    InvalidState,
}

/// Failures raised while loading a scenario [`crate::config::Config`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed scenario file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
