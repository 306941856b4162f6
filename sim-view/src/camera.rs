//! Perspective orbit camera for drawing 3D points with egui's 2D painter.

use glam::{DMat4, DVec3};
use lorenz_core::{LorenzParams, lorenz};

const NEAR: f64 = 0.1;
const FAR: f64 = 1000.0;
const MIN_DISTANCE: f64 = 1.0;
const MAX_DISTANCE: f64 = 500.0;
/// Keeps the camera from flipping over the poles.
const MAX_PITCH: f64 = 1.5;
/// Radians of orbit per dragged pixel.
const DRAG_SPEED: f64 = 0.005;

/// Camera orbiting a target point on a sphere of radius `distance`.
///
/// `yaw = 0, pitch = 0` places the eye on the `+z` side of the target,
/// looking down `-z` with `+y` up.
///
/// ### Fields
/// - `target` - World-space point the camera looks at.
/// - `distance` - Distance from the eye to `target`.
/// - `yaw` - Rotation around the world `y` axis (radians).
/// - `pitch` - Elevation above the `xz` plane (radians).
/// - `fov_y` - Vertical field of view (radians).
/// - `auto_rotate` - Whether [`OrbitCamera::update`] spins the camera.
/// - `auto_rotate_speed` - Auto-rotation rate (radians per second).
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: DVec3,
    pub distance: f64,
    pub yaw: f64,
    pub pitch: f64,
    pub fov_y: f64,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
}

/// Centre of the attractor's two lobes: the mean of the two convection
/// equilibria returned by [`lorenz::fixed_points`].
///
/// For the classic parameters this is `(0, 0, ρ − 1) = (0, 0, 27)`. When
/// the origin is the only equilibrium the origin is returned.
pub fn attractor_center(params: &LorenzParams) -> DVec3 {
    let points = lorenz::fixed_points(params);
    let lobes = &points[1..];
    if lobes.is_empty() {
        return DVec3::ZERO;
    }
    lobes.iter().copied().sum::<DVec3>() / lobes.len() as f64
}

impl Default for OrbitCamera {
    /// Looks at the centre of the classic attractor from 50 units down `+z`,
    /// one turn every 30 s.
    fn default() -> Self {
        Self {
            target: attractor_center(&LorenzParams::CLASSIC),
            distance: 50.0,
            yaw: 0.0,
            pitch: 0.0,
            fov_y: 75f64.to_radians(),
            auto_rotate: true,
            auto_rotate_speed: std::f64::consts::TAU / 30.0,
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> DVec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * DVec3::new(cp * sy, sp, cp * cy)
    }

    /// Combined projection and view matrix for the given aspect ratio.
    pub fn view_proj(&self, aspect: f64) -> DMat4 {
        let proj = DMat4::perspective_rh(self.fov_y, aspect, NEAR, FAR);
        let view = DMat4::look_at_rh(self.eye(), self.target, DVec3::Y);
        proj * view
    }

    /// Projects a world-space point into `rect`.
    ///
    /// ### Returns
    /// - `Some((pos, depth))` with the screen position and the view-space
    ///   depth of the point.
    /// - `None` if the point lies behind the near plane.
    pub fn project(&self, p: DVec3, rect: egui::Rect) -> Option<(egui::Pos2, f64)> {
        let aspect = (rect.width() / rect.height().max(1.0)) as f64;
        let clip = self.view_proj(aspect) * p.extend(1.0);
        if clip.w <= NEAR {
            return None;
        }

        let ndc = clip.truncate() / clip.w;
        let center = rect.center();
        Some((
            egui::pos2(
                center.x + (ndc.x as f32) * rect.width() * 0.5,
                center.y - (ndc.y as f32) * rect.height() * 0.5,
            ),
            clip.w,
        ))
    }

    /// Screen-space radius (pixels) of a sphere of `radius` at `depth`.
    pub fn screen_radius(&self, radius: f64, depth: f64, rect: egui::Rect) -> f32 {
        let focal = rect.height() as f64 * 0.5 / (self.fov_y * 0.5).tan();
        (radius * focal / depth) as f32
    }

    /// Orbits the camera by a mouse drag delta (pixels).
    pub fn orbit(&mut self, delta: egui::Vec2) {
        self.yaw -= delta.x as f64 * DRAG_SPEED;
        self.pitch = (self.pitch + delta.y as f64 * DRAG_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Moves the eye towards (positive `scroll`) or away from the target.
    pub fn zoom(&mut self, scroll: f32) {
        let factor = (1.0 - scroll as f64 * 0.001).clamp(0.5, 2.0);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Advances auto-rotation by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        if self.auto_rotate {
            self.yaw = (self.yaw + self.auto_rotate_speed * dt) % std::f64::consts::TAU;
        }
    }
}
