//! Fixed-step RK4 integration of the chaotic flows
//!
//! Each state type knows its own vector field; [`Attractor::step`] applies
//! the classical fourth-order Runge-Kutta scheme on top of it:
//!
//! ```text
//! k1 = f(v)
//! k2 = f(v + (dt/2)·k1)
//! k3 = f(v + (dt/2)·k2)
//! k4 = f(v + dt·k3)
//! v' = v + (dt/6)·(((k1 + 2·k2) + 2·k3) + k4)
//! ```
//!
//! # Reproducibility
//!
//! Output is bit-exact across platforms only if every implementation rounds
//! the same operations in the same order. All component-wise arithmetic goes
//! through [`offset`] and [`rk4_sum`], which fix the sum tree. Rust never
//! contracts `a * b + c` into a fused multiply-add on its own, so the
//! expressions below are evaluated exactly as written.

pub mod hyperchaotic;
pub mod lorenz;

pub use hyperchaotic::HyperState;
pub use lorenz::LorenzState;

use crate::error::ChaosKeyError;

/// A continuous-time dynamical system integrated with fixed-step RK4.
pub trait Attractor: Copy {
    /// Human-readable system name, reported on divergence.
    const NAME: &'static str;

    /// Evaluate the vector field at this state.
    fn derivative(&self) -> Self;

    /// Component-wise `self + h·k`.
    fn offset(&self, h: f64, k: &Self) -> Self;

    /// Component-wise RK4 accumulation of the four slopes.
    fn blend(&self, dt: f64, k1: &Self, k2: &Self, k3: &Self, k4: &Self) -> Self;

    /// True if every coordinate is finite.
    fn is_finite(&self) -> bool;

    /// Advance the state by one RK4 step of size `dt`.
    ///
    /// Pure: the receiver is not modified and no hidden state is kept.
    ///
    /// # Errors
    ///
    /// - `Divergence`: if any coordinate of the new state is non-finite. The
    ///   reported step is 1, relative to the receiver.
    fn step(&self, dt: f64) -> Result<Self, ChaosKeyError> {
        let half = 0.5 * dt;

        let k1 = self.derivative();
        let k2 = self.offset(half, &k1).derivative();
        let k3 = self.offset(half, &k2).derivative();
        let k4 = self.offset(dt, &k3).derivative();

        let next = self.blend(dt, &k1, &k2, &k3, &k4);
        if next.is_finite() {
            Ok(next)
        } else {
            Err(ChaosKeyError::Divergence { system: Self::NAME, step: 1 })
        }
    }
}

/// `v + h·k` for a single coordinate.
#[inline]
pub(crate) fn offset(v: f64, h: f64, k: f64) -> f64 {
    v + h * k
}

/// `v + (dt/6)·(k1 + 2·k2 + 2·k3 + k4)` for a single coordinate, summed
/// left to right.
#[inline]
pub(crate) fn rk4_sum(v: f64, dt: f64, k1: f64, k2: f64, k3: f64, k4: f64) -> f64 {
    v + (dt / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
}
