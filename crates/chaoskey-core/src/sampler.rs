//! Initial-state sampling from the chaos seed
//!
//! The seed drives a SplitMix64 generator whose outputs are mapped to
//! doubles in `[0, 1)`. Eight draws fill the Lorenz and hyperchaotic
//! starting points in a fixed order:
//!
//! ```text
//! draw:   1  2  3 | 4  5  6  7  8
//! coord:  x  y  z | m  n  p  r  q
//! range:  [-10,10)| [0, 30)
//! ```

use crate::attractor::{HyperState, LorenzState};

/// SplitMix64 increment (golden-ratio constant)
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// First finalizer multiplier
const MIX_1: u64 = 0xBF58_476D_1CE4_E5B9;

/// Second finalizer multiplier
const MIX_2: u64 = 0x94D0_49BB_1331_11EB;

/// 2^-53, the spacing of doubles in `[0.5, 1)`
const UNIT_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Width of the Lorenz sampling interval
const LORENZ_SPAN: f64 = 20.0;

/// Offset that centers Lorenz samples on the origin
const LORENZ_OFFSET: f64 = 10.0;

/// Width of the hyperchaotic sampling interval
const HYPER_SPAN: f64 = 30.0;

/// SplitMix64 pseudorandom generator.
///
/// Fully specified and platform independent, unlike a standard-library
/// generator whose algorithm may change between releases.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator whose internal state starts at `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the generator and return the next 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(MIX_1);
        z = (z ^ (z >> 27)).wrapping_mul(MIX_2);
        z ^ (z >> 31)
    }

    /// Next double in `[0, 1)` built from the top 53 bits of an output.
    pub fn next_f64(&mut self) -> f64 {
        ((self.next_u64() >> 11) as f64) * UNIT_SCALE
    }
}

/// Expand a seed into deterministic Lorenz and hyperchaotic starting states.
///
/// The seed's two's-complement bit pattern initialises [`SplitMix64`].
pub fn sample(seed: i64) -> (LorenzState, HyperState) {
    let mut rng = SplitMix64::new(seed as u64);

    let mut lorenz_coord = || LORENZ_SPAN * rng.next_f64() - LORENZ_OFFSET;
    let x = lorenz_coord();
    let y = lorenz_coord();
    let z = lorenz_coord();

    let mut hyper_coord = || HYPER_SPAN * rng.next_f64();
    let m = hyper_coord();
    let n = hyper_coord();
    let p = hyper_coord();
    let r = hyper_coord();
    let q = hyper_coord();

    (LorenzState { x, y, z }, HyperState { m, n, p, r, q })
}
