//! Lorenz attractor integration library.
//!
//! Main components:
//! - [`integrator`]: the stateful forward-Euler integrator and its trajectory.
//! - [`lorenz`]: Lorenz parameters, derivative and single-step update.
//! - [`config`]: scenario configuration (initial point and time step).
//! - [`error`]: error types for integration and configuration.
//! - [`types`]: shared type aliases.

pub mod config;
pub mod error;
pub mod integrator;
pub mod lorenz;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, IntegratorError};
pub use integrator::LorenzAttractor;
pub use lorenz::LorenzParams;
pub use types::Point;
