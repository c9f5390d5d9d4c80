//! The classical Lorenz system

use super::{Attractor, offset, rk4_sum};

/// Prandtl number σ
pub const SIGMA: f64 = 10.0;

/// Rayleigh number ρ
pub const RHO: f64 = 28.0;

/// Geometric factor β
pub const BETA: f64 = 8.0 / 3.0;

/// A point `(x, y, z)` on the Lorenz trajectory.
///
/// ```text
/// ẋ = σ·(y − x)
/// ẏ = x·(ρ − z) − y
/// ż = x·y − β·z
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorenzState {
    /// Convection intensity
    pub x: f64,
    /// Horizontal temperature difference
    pub y: f64,
    /// Vertical temperature deviation
    pub z: f64,
}

impl Attractor for LorenzState {
    const NAME: &'static str = "lorenz";

    fn derivative(&self) -> Self {
        Self {
            x: SIGMA * (self.y - self.x),
            y: self.x * (RHO - self.z) - self.y,
            z: self.x * self.y - BETA * self.z,
        }
    }

    fn offset(&self, h: f64, k: &Self) -> Self {
        Self { x: offset(self.x, h, k.x), y: offset(self.y, h, k.y), z: offset(self.z, h, k.z) }
    }

    fn blend(&self, dt: f64, k1: &Self, k2: &Self, k3: &Self, k4: &Self) -> Self {
        Self {
            x: rk4_sum(self.x, dt, k1.x, k2.x, k3.x, k4.x),
            y: rk4_sum(self.y, dt, k1.y, k2.y, k3.y, k4.y),
            z: rk4_sum(self.z, dt, k1.z, k2.z, k3.z, k4.z),
        }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
