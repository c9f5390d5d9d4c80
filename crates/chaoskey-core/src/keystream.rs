//! Key stream assembly from the coupled trajectories
//!
//! After every RK4 step the eight state coordinates are written to their own
//! streams as big-endian IEEE-754 bytes, and three XOR mixes fill the
//! remaining streams:
//!
//! ```text
//! stream   0  1  2 | 3  4  5  6  7 | 8      9      10
//! source   x  y  z | m  n  p  r  q | x^m    y^n    z^p^q
//! ```
//!
//! Every stream grows by exactly eight bytes per step, so all eleven end at
//! `8·N` bytes.

use std::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::{
    attractor::{Attractor, HyperState, LorenzState},
    error::ChaosKeyError,
    kdf::derive_seed,
    params::{BYTES_PER_STEP, ChaosParams},
    sampler::sample,
};

/// Number of subkey streams produced per generation
pub const STREAM_COUNT: usize = 11;

/// Stream carrying Lorenz `x`
pub const LORENZ_X: usize = 0;
/// Stream carrying Lorenz `y`
pub const LORENZ_Y: usize = 1;
/// Stream carrying Lorenz `z`
pub const LORENZ_Z: usize = 2;
/// Stream carrying hyperchaotic `m`
pub const HYPER_M: usize = 3;
/// Stream carrying hyperchaotic `n`
pub const HYPER_N: usize = 4;
/// Stream carrying hyperchaotic `p`
pub const HYPER_P: usize = 5;
/// Stream carrying hyperchaotic `r`
pub const HYPER_R: usize = 6;
/// Stream carrying hyperchaotic `q`
pub const HYPER_Q: usize = 7;
/// Stream carrying `x ⊕ m`
pub const MIX_XM: usize = 8;
/// Stream carrying `y ⊕ n`
pub const MIX_YN: usize = 9;
/// Stream carrying `z ⊕ p ⊕ q`
pub const MIX_ZPQ: usize = 10;

/// The eleven subkey byte streams derived from one `(master_key, nonce)`.
///
/// Immutable once built. Bytes are zeroized on drop, including when
/// generation fails part way through. Equality is constant-time over the
/// stream contents; only the stream lengths are treated as public.
#[derive(Clone)]
pub struct KeyStreams {
    streams: [Vec<u8>; STREAM_COUNT],
    steps: u32,
}

impl KeyStreams {
    /// Wrap caller-provided streams.
    ///
    /// # Errors
    ///
    /// - `InvalidSubkeys`: if there are not exactly eleven streams, if their
    ///   lengths differ, or if the length is not a whole number of steps
    pub fn from_streams(streams: Vec<Vec<u8>>) -> Result<Self, ChaosKeyError> {
        let count = streams.len();
        let streams: [Vec<u8>; STREAM_COUNT] =
            streams.try_into().map_err(|mut rejected: Vec<Vec<u8>>| {
                rejected.iter_mut().for_each(Zeroize::zeroize);
                ChaosKeyError::InvalidSubkeys {
                    reason: format!("expected {STREAM_COUNT} streams, got {count}"),
                }
            })?;

        let len = streams[0].len();
        let mut bundle = Self { streams, steps: 0 };

        if let Some(index) = bundle.streams.iter().position(|s| s.len() != len) {
            return Err(ChaosKeyError::InvalidSubkeys {
                reason: format!(
                    "stream {index} has {} bytes, stream 0 has {len}",
                    bundle.streams[index].len()
                ),
            });
        }
        if !len.is_multiple_of(BYTES_PER_STEP) {
            return Err(ChaosKeyError::InvalidSubkeys {
                reason: format!("stream length {len} is not a multiple of {BYTES_PER_STEP}"),
            });
        }

        bundle.steps = u32::try_from(len / BYTES_PER_STEP).map_err(|_| {
            ChaosKeyError::InvalidSubkeys { reason: format!("stream length {len} is too large") }
        })?;
        Ok(bundle)
    }

    /// Number of integration steps the streams were built from.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Length of every stream in bytes.
    pub fn stream_len(&self) -> usize {
        self.streams[0].len()
    }

    /// Stream at `index`, or `None` if `index >= STREAM_COUNT`.
    pub fn stream(&self, index: usize) -> Option<&[u8]> {
        self.streams.get(index).map(Vec::as_slice)
    }

    /// All eleven streams in order.
    pub fn streams(&self) -> &[Vec<u8>; STREAM_COUNT] {
        &self.streams
    }

    /// Check the structural invariants of the bundle.
    ///
    /// True if all streams have equal length and streams 8, 9 and 10 are the
    /// byte-wise XOR of their source streams at every offset.
    pub fn verify_mix(&self) -> bool {
        let len = self.stream_len();
        if self.streams.iter().any(|s| s.len() != len) {
            return false;
        }

        (0..len).all(|j| {
            let s = &self.streams;
            s[MIX_XM][j] == s[LORENZ_X][j] ^ s[HYPER_M][j]
                && s[MIX_YN][j] == s[LORENZ_Y][j] ^ s[HYPER_N][j]
                && s[MIX_ZPQ][j] == s[LORENZ_Z][j] ^ s[HYPER_P][j] ^ s[HYPER_Q][j]
        })
    }

    fn with_capacity(len: usize) -> Result<Self, ChaosKeyError> {
        let mut bundle = Self { streams: Default::default(), steps: 0 };
        for stream in &mut bundle.streams {
            stream.try_reserve_exact(len).map_err(|e| ChaosKeyError::InvalidParams {
                reason: format!("cannot allocate {len}-byte key stream: {e}"),
            })?;
        }
        Ok(bundle)
    }

    fn push_step(&mut self, lorenz: &LorenzState, hyper: &HyperState) {
        let x = lorenz.x.to_be_bytes();
        let y = lorenz.y.to_be_bytes();
        let z = lorenz.z.to_be_bytes();
        let m = hyper.m.to_be_bytes();
        let n = hyper.n.to_be_bytes();
        let p = hyper.p.to_be_bytes();
        let r = hyper.r.to_be_bytes();
        let q = hyper.q.to_be_bytes();

        let rows = [x, y, z, m, n, p, r, q, xor(x, m), xor(y, n), xor(xor(z, p), q)];
        for (stream, row) in self.streams.iter_mut().zip(rows) {
            stream.extend_from_slice(&row);
        }
        self.steps += 1;
    }
}

impl ConstantTimeEq for KeyStreams {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.streams
            .iter()
            .zip(&other.streams)
            .fold(self.steps.ct_eq(&other.steps), |acc, (a, b)| acc & a.as_slice().ct_eq(b))
    }
}

impl PartialEq for KeyStreams {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for KeyStreams {}

impl fmt::Debug for KeyStreams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyStreams")
            .field("steps", &self.steps)
            .field("stream_len", &self.stream_len())
            .finish_non_exhaustive()
    }
}

impl Drop for KeyStreams {
    fn drop(&mut self) {
        for stream in &mut self.streams {
            stream.zeroize();
        }
    }
}

/// Integrate both attractors from `seed` and assemble the eleven streams.
///
/// # Errors
///
/// - `InvalidParams`: if `steps` is zero or odd, or `dt` is not a finite
///   positive number. Reported before any integration.
/// - `Divergence`: if either system produced a non-finite coordinate. The
///   partial streams are zeroized and dropped.
pub fn generate(seed: i64, steps: u32, dt: f64) -> Result<KeyStreams, ChaosKeyError> {
    let params = ChaosParams::new(steps, dt);
    params.validate()?;

    tracing::debug!(steps, dt, "generating chaos key streams");

    let (mut lorenz, mut hyper) = sample(seed);
    let mut bundle = KeyStreams::with_capacity(params.stream_len())?;

    for step in 1..=steps {
        lorenz = lorenz.step(dt).map_err(|e| diverged(e, step, dt))?;
        hyper = hyper.step(dt).map_err(|e| diverged(e, step, dt))?;
        bundle.push_step(&lorenz, &hyper);
    }

    debug_assert!(bundle.streams.iter().all(|s| s.len() == params.stream_len()));
    tracing::debug!(stream_len = bundle.stream_len(), "chaos key streams ready");

    Ok(bundle)
}

/// Derive the seed from `(master_key, nonce)` and generate the streams.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_from_key(
    master_key: &[u8],
    nonce: &[u8],
    params: &ChaosParams,
) -> Result<KeyStreams, ChaosKeyError> {
    generate(derive_seed(master_key, nonce), params.steps, params.dt)
}

fn diverged(err: ChaosKeyError, step: u32, dt: f64) -> ChaosKeyError {
    let err = err.at_step(step);
    if let ChaosKeyError::Divergence { system, step } = &err {
        tracing::warn!(system, step, dt, "chaotic integration diverged");
    }
    err
}

fn xor(a: [u8; 8], b: [u8; 8]) -> [u8; 8] {
    std::array::from_fn(|i| a[i] ^ b[i])
}
