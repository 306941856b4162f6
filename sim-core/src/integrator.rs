//! Stateful forward-Euler integrator for the Lorenz system.
//!
//! A [`LorenzAttractor`] is in one of two states:
//!
//! - **Seeded**: the trajectory holds at least one point and
//!   [`LorenzAttractor::next`] can advance from its last entry. Every
//!   freshly constructed integrator starts here.
//! - **Cleared**: the trajectory is empty. [`LorenzAttractor::reset`]
//!   moves the integrator here, and `next()` then fails with
//!   [`IntegratorError::InvalidState`]. Only re-construction gets back to
//!   Seeded.

use crate::{
    config::Config,
    error::IntegratorError,
    lorenz::{self, LorenzParams},
    types::Point,
};
use glam::DVec3;
use tracing::{debug, trace, warn};

/// Treats `0.0`, `-0.0` and `NaN` as "not provided".
fn or_if_falsy(value: f64, fallback: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        fallback
    } else {
        value
    }
}

/// Integrates the Lorenz system one step at a time and records every point.
///
/// ### Fields
/// - `params` - σ, ρ, β; fixed to [`LorenzParams::CLASSIC`] at construction.
/// - `position` - Live position, set at construction and restored by `reset`.
///   It is not advanced by `next`; see [`LorenzAttractor::last_point`].
/// - `initial_position` - Construction-time position, kept for `reset`.
/// - `dt` - Time step used by every `next` call.
/// - `trajectory` - All points computed so far, oldest first.
/// - `time` - Simulated time, the sum of all steps taken.
#[derive(Clone, Debug)]
pub struct LorenzAttractor {
    params: LorenzParams,
    position: Point,
    initial_position: Point,
    dt: f64,
    trajectory: Vec<Point>,
    time: f64,
}

impl LorenzAttractor {
    /// Creates an integrator seeded with `(initial_x, initial_y, initial_z)`.
    ///
    /// Any argument that is `0.0` or `NaN` counts as omitted: the
    /// coordinates then default to `0.0` and `dt` defaults to `1.0`.
    /// A deliberate zero time step is therefore indistinguishable from no
    /// time step and silently becomes `1.0`.
    ///
    /// The defaulted values are also what seeds the trajectory and what
    /// `reset` restores, so a `NaN` coordinate reads back as `0.0` everywhere
    /// rather than leaving a `NaN` seed behind.
    ///
    /// No range validation is done; every other value is accepted as-is.
    pub fn new(initial_x: f64, initial_y: f64, initial_z: f64, dt: f64) -> Self {
        let initial_position = DVec3::new(
            or_if_falsy(initial_x, 0.0),
            or_if_falsy(initial_y, 0.0),
            or_if_falsy(initial_z, 0.0),
        );
        let dt = or_if_falsy(dt, 1.0);

        debug!(?initial_position, dt, "created lorenz attractor");

        Self {
            params: LorenzParams::CLASSIC,
            position: initial_position,
            initial_position,
            dt,
            trajectory: vec![initial_position],
            time: 0.0,
        }
    }

    /// Creates an integrator from a scenario, applying the same defaulting
    /// rules as [`LorenzAttractor::new`].
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.initial_x, cfg.initial_y, cfg.initial_z, cfg.time_step)
    }

    /// Computes the next point from the last trajectory entry.
    ///
    /// The new point is appended to the trajectory and the simulated time
    /// advances by one time step.
    ///
    /// ### Returns
    /// - `Ok(point)` with the freshly computed point.
    /// - `Err(IntegratorError::InvalidState)` if the trajectory is empty,
    ///   which is the case right after [`LorenzAttractor::reset`].
    pub fn next(&mut self) -> Result<Point, IntegratorError> {
        let Some(&last) = self.trajectory.last() else {
            warn!("next() called on a cleared trajectory");
            return Err(IntegratorError::InvalidState);
        };

        let p = lorenz::euler_step(last, &self.params, self.dt);
        self.trajectory.push(p);
        self.time += self.dt;

        trace!(x = p.x, y = p.y, z = p.z, time = self.time, "step");
        Ok(p)
    }

    /// Returns the live position to the initial one and clears the state.
    ///
    /// The trajectory is emptied, not reseeded with the initial point, so
    /// the integrator ends up Cleared and `next()` fails until it is
    /// re-constructed.
    pub fn reset(&mut self) {
        self.trajectory.clear();
        self.time = 0.0;
        self.position = self.initial_position;

        debug!(position = ?self.position, "reset lorenz attractor");
    }

    pub fn parameters(&self) -> LorenzParams {
        self.params
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn initial_position(&self) -> Point {
        self.initial_position
    }

    pub fn time_step(&self) -> f64 {
        self.dt
    }

    pub fn elapsed_time(&self) -> f64 {
        self.time
    }

    pub fn trajectory(&self) -> &[Point] {
        &self.trajectory
    }

    /// Most recently computed point, or `None` when Cleared.
    pub fn last_point(&self) -> Option<Point> {
        self.trajectory.last().copied()
    }

    /// `true` while `next()` can be called.
    pub fn is_seeded(&self) -> bool {
        !self.trajectory.is_empty()
    }
}

impl Default for LorenzAttractor {
    /// Every argument omitted: origin start, time step `1.0`.
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    const EPS: f64 = 1e-9;

    fn documented_attractor() -> LorenzAttractor {
        LorenzAttractor::new(0.0, 1.0, 1.05, 0.01)
    }

    #[test]
    fn new_seeds_trajectory_with_initial_point() {
        let a = documented_attractor();

        let initial = DVec3::new(0.0, 1.0, 1.05);
        assert_eq!(a.trajectory(), &[initial]);
        assert_eq!(a.position(), initial);
        assert_eq!(a.initial_position(), initial);
        assert_eq!(a.elapsed_time(), 0.0);
        assert_eq!(a.parameters(), LorenzParams::CLASSIC);
        assert!(a.is_seeded());
    }

    #[test]
    fn first_next_matches_closed_form_euler_update() {
        let mut a = documented_attractor();
        let p = a.next().unwrap();

        // x = 0 + 10 * (1 - 0) * 0.01, y = 1 + (0 * (28 - 1.05) - 1) * 0.01,
        // z = 1.05 + (0 * 1 - 8/3 * 1.05) * 0.01.
        assert!((p.x - 0.1).abs() < EPS);
        assert!((p.y - 0.99).abs() < EPS);
        assert!((p.z - 1.022).abs() < EPS);
        assert_eq!(a.last_point(), Some(p));
    }

    #[test]
    fn next_does_not_move_live_position() {
        let mut a = documented_attractor();
        a.next().unwrap();
        a.next().unwrap();

        assert_eq!(a.position(), a.initial_position());
        assert_ne!(a.last_point(), Some(a.initial_position()));
    }

    #[test]
    fn successive_calls_build_on_previous_point() {
        let mut a = documented_attractor();
        let first = a.next().unwrap();
        let second = a.next().unwrap();

        let expected = lorenz::euler_step(first, &LorenzParams::CLASSIC, 0.01);
        assert_ne!(first, second);
        assert_eq!(second, expected);
    }

    #[test]
    fn trajectory_and_time_grow_with_each_step() {
        let mut a = documented_attractor();
        let n = 250;
        for _ in 0..n {
            a.next().unwrap();
        }

        assert_eq!(a.trajectory().len(), 1 + n);
        assert!((a.elapsed_time() - n as f64 * 0.01).abs() < EPS);
        assert!(
            (a.elapsed_time() - a.time_step() * (a.trajectory().len() - 1) as f64).abs() < EPS
        );
    }

    #[test]
    fn reset_clears_trajectory_without_reseeding() {
        let mut a = documented_attractor();
        for _ in 0..10 {
            a.next().unwrap();
        }

        a.reset();

        assert!(a.trajectory().is_empty());
        assert_eq!(a.elapsed_time(), 0.0);
        assert_eq!(a.position(), a.initial_position());
        assert!(!a.is_seeded());
        assert_eq!(a.last_point(), None);
    }

    #[test]
    fn next_after_reset_fails_with_invalid_state() {
        let mut a = documented_attractor();
        a.next().unwrap();
        a.reset();

        assert_eq!(a.next(), Err(IntegratorError::InvalidState));
        // A failed advance leaves the cleared state untouched.
        assert!(a.trajectory().is_empty());
        assert_eq!(a.elapsed_time(), 0.0);
    }

    #[test]
    fn zero_time_step_defaults_to_one() {
        let mut a = LorenzAttractor::new(0.0, 1.0, 1.05, 0.0);
        assert_eq!(a.time_step(), 1.0);

        let p = a.next().unwrap();
        // With dt = 1: x = 0 + 10 * (1 - 0) * 1.
        assert_eq!(p.x, 10.0);
        assert_eq!(a.elapsed_time(), 1.0);
    }

    #[test]
    fn explicit_time_step_is_used_exactly() {
        let a = LorenzAttractor::new(0.0, 1.0, 1.05, 0.01);
        assert_eq!(a.time_step(), 0.01);
    }

    #[test]
    fn nan_arguments_count_as_omitted() {
        let a = LorenzAttractor::new(f64::NAN, 2.0, f64::NAN, f64::NAN);

        assert_eq!(a.initial_position(), DVec3::new(0.0, 2.0, 0.0));
        assert_eq!(a.time_step(), 1.0);
    }

    #[test]
    fn nan_coordinates_seed_and_reset_to_defaulted_values() {
        let mut a = LorenzAttractor::new(f64::NAN, 1.0, 1.05, 0.01);

        // The seed holds the defaulted coordinate, so stepping stays finite.
        assert_eq!(a.trajectory(), &[DVec3::new(0.0, 1.0, 1.05)]);
        assert!(a.next().unwrap().is_finite());

        a.reset();
        assert_eq!(a.position(), DVec3::new(0.0, 1.0, 1.05));
        assert!(!a.position().is_nan());
    }

    #[test]
    fn default_is_origin_with_unit_step() {
        let mut a = LorenzAttractor::default();

        assert_eq!(a.initial_position(), DVec3::ZERO);
        assert_eq!(a.time_step(), 1.0);
        // The origin is a fixed point.
        assert_eq!(a.next().unwrap(), DVec3::ZERO);
    }

    #[test]
    fn from_config_uses_scenario_values() {
        let cfg = Config::default();
        let a = LorenzAttractor::from_config(&cfg);

        assert_eq!(a.initial_position(), DVec3::new(0.0, 1.0, 1.05));
        assert_eq!(a.time_step(), 0.01);
    }

    #[test]
    fn negative_and_large_inputs_are_accepted_as_is() {
        let mut a = LorenzAttractor::new(-1e150, 1e150, -3.0, -0.5);

        assert_eq!(a.initial_position(), DVec3::new(-1e150, 1e150, -3.0));
        assert_eq!(a.time_step(), -0.5);

        // Keep stepping into overflow territory; nothing panics.
        for _ in 0..20 {
            a.next().unwrap();
        }
        assert_eq!(a.trajectory().len(), 21);
    }

    #[test]
    fn identical_construction_gives_identical_trajectories() {
        let mut rng = StdRng::seed_from_u64(0x10_2e_17);

        for _ in 0..20 {
            let x = rng.random_range(-20.0..=20.0);
            let y = rng.random_range(-20.0..=20.0);
            let z = rng.random_range(0.0..=50.0);
            let dt = rng.random_range(0.001..=0.02);

            let mut a = LorenzAttractor::new(x, y, z, dt);
            let mut b = LorenzAttractor::new(x, y, z, dt);
            for _ in 0..500 {
                assert_eq!(a.next(), b.next());
            }
            assert_eq!(a.trajectory(), b.trajectory());
            assert_eq!(a.elapsed_time(), b.elapsed_time());
        }
    }
}
