//! Five-dimensional hyperchaotic system
//!
//! A Lorenz-type core `(m, n, p)` extended with two feedback coordinates
//! `(r, q)`. The `q` term injected into `ṅ` couples the extension back into
//! the core.
//!
//! `r` and `q` are not bounded: they grow roughly linearly with time, and
//! at `dt = 0.01` the explicit scheme loses stability after about 22 000
//! steps. Callers see this as a `Divergence` error.

use super::{Attractor, offset, rk4_sum};

/// Coupling between `m` and `n`
pub const A: f64 = 30.0;

/// Drive term in `ṅ`
pub const B: f64 = 11.0;

/// Damping of `p`
pub const C: f64 = 90.0;

/// A point `(m, n, p, r, q)` on the hyperchaotic trajectory.
///
/// ```text
/// ṁ = a·(n − m)
/// ṅ = m·(b − p) − n + q
/// ṗ = m·n − c·p
/// ṙ = n·p − r
/// q̇ = r − q
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HyperState {
    /// Core coordinate driven towards `n`
    pub m: f64,
    /// Core coordinate fed by `q`
    pub n: f64,
    /// Damped core coordinate
    pub p: f64,
    /// First feedback coordinate, driven by `n·p`
    pub r: f64,
    /// Second feedback coordinate, relaxes towards `r`
    pub q: f64,
}

impl Attractor for HyperState {
    const NAME: &'static str = "hyperchaotic";

    fn derivative(&self) -> Self {
        Self {
            m: A * (self.n - self.m),
            n: self.m * (B - self.p) - self.n + self.q,
            p: self.m * self.n - C * self.p,
            r: self.n * self.p - self.r,
            q: self.r - self.q,
        }
    }

    fn offset(&self, h: f64, k: &Self) -> Self {
        Self {
            m: offset(self.m, h, k.m),
            n: offset(self.n, h, k.n),
            p: offset(self.p, h, k.p),
            r: offset(self.r, h, k.r),
            q: offset(self.q, h, k.q),
        }
    }

    fn blend(&self, dt: f64, k1: &Self, k2: &Self, k3: &Self, k4: &Self) -> Self {
        Self {
            m: rk4_sum(self.m, dt, k1.m, k2.m, k3.m, k4.m),
            n: rk4_sum(self.n, dt, k1.n, k2.n, k3.n, k4.n),
            p: rk4_sum(self.p, dt, k1.p, k2.p, k3.p, k4.p),
            r: rk4_sum(self.r, dt, k1.r, k2.r, k3.r, k4.r),
            q: rk4_sum(self.q, dt, k1.q, k2.q, k3.q, k4.q),
        }
    }

    fn is_finite(&self) -> bool {
        self.m.is_finite()
            && self.n.is_finite()
            && self.p.is_finite()
            && self.r.is_finite()
            && self.q.is_finite()
    }
}
