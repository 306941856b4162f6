use glam::DVec3;

/// A point in Lorenz phase space.
///
/// `x` is proportional to the rate of convection, `y` to the horizontal
/// temperature variation and `z` to the vertical temperature variation.
pub type Point = DVec3;
