//! The Lorenz system of ordinary differential equations.
//!
//! ```text
//! dx/dt = σ (y − x)
//! dy/dt = x (ρ − z) − y
//! dz/dt = x y − β z
//! ```
//!
//! The free functions here are stateless; [`crate::integrator`] keeps the
//! trajectory and calls [`euler_step`] once per advance.

use crate::types::Point;
use glam::DVec3;

/// System parameters of the Lorenz equations.
///
/// σ, ρ and β are proportional to the Prandtl number, the Rayleigh number
/// and the geometry of the two-dimensional fluid layer respectively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorenzParams {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl LorenzParams {
    /// σ = 10, ρ = 28, β = 8/3: the chaotic regime Lorenz studied.
    pub const CLASSIC: Self = Self {
        sigma: 10.0,
        rho: 28.0,
        beta: 8.0 / 3.0,
    };
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Evaluates the right-hand side of the Lorenz equations at `p`.
///
/// ### Parameters
/// - `p` - Current phase-space point.
/// - `params` - System parameters.
///
/// ### Returns
/// The time derivative `(dx/dt, dy/dt, dz/dt)` at `p`.
pub fn derivative(p: Point, params: &LorenzParams) -> DVec3 {
    DVec3::new(
        params.sigma * (p.y - p.x),
        p.x * (params.rho - p.z) - p.y,
        p.x * p.y - params.beta * p.z,
    )
}

/// Advances `p` by one explicit (forward Euler) step of length `dt`.
///
/// Each component is `p + derivative(p) * dt`; no overflow handling is done,
/// so large magnitudes run into `inf`/`NaN` under normal IEEE-754 rules.
pub fn euler_step(p: Point, params: &LorenzParams, dt: f64) -> Point {
    p + derivative(p, params) * dt
}

/// Returns the equilibria of the system.
///
/// The origin is always a fixed point. For `ρ > 1` the two symmetric
/// convection equilibria `(±√(β(ρ−1)), ±√(β(ρ−1)), ρ−1)` are appended.
pub fn fixed_points(params: &LorenzParams) -> Vec<Point> {
    let mut points = vec![DVec3::ZERO];
    if params.rho > 1.0 {
        let c = (params.beta * (params.rho - 1.0)).sqrt();
        let z = params.rho - 1.0;
        points.push(DVec3::new(c, c, z));
        points.push(DVec3::new(-c, -c, z));
    }
    points
}
