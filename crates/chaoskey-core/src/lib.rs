//! Chaoskey Key Derivation
//!
//! Deterministic derivation of the eleven subkey streams consumed by the
//! chaoskey 512-bit block cipher. Pure functions, no global state: the same
//! `(master_key, nonce, steps, dt)` yields the same bytes on every platform
//! with IEEE-754 double precision.
//!
//! # Pipeline
//!
//! ```text
//! (master_key, nonce)
//!        │
//!        ▼
//! SHA3-512 → Seed (i64)
//!        │
//!        ▼
//! SplitMix64 → Lorenz (x,y,z) + Hyperchaotic (m,n,p,r,q)
//!        │
//!        ▼
//! N × RK4 steps → 11 big-endian byte streams of 8·N bytes
//!        │
//!        ▼
//! SubkeySchedule → 128-bit round keys
//! ```
//!
//! # Reproducibility
//!
//! The chaotic dynamics amplify any rounding difference into total
//! divergence within tens of steps. Bit-exact output therefore depends on:
//! - A pinned generator (SplitMix64) and `u64 → f64` mapping
//! - Fixed evaluation order in every derivative and RK4 accumulation
//! - No fused multiply-add or re-association
//! - Big-endian serialisation of the raw IEEE-754 bit pattern
//!
//! # Security
//!
//! Key material:
//! - Key stream bytes are zeroized on drop, including partial streams
//!   discarded after a divergence
//! - `Debug` output never contains key bytes
//! - Bundle equality is constant-time over the stream contents
//!
//! Known weaknesses:
//! - Master key and nonce are concatenated without framing; use a
//!   fixed-length nonce
//! - The seed carries at most 64 bits of entropy regardless of key length
//!
//! # Concurrency
//!
//! Every entry point is synchronous and side-effect free. Distinct inputs
//! can be processed on independent threads without coordination.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod attractor;
pub mod error;
pub mod kdf;
pub mod keystream;
pub mod params;
pub mod sampler;
pub mod schedule;

pub use attractor::{Attractor, HyperState, LorenzState};
pub use error::ChaosKeyError;
pub use kdf::derive_seed;
pub use keystream::{KeyStreams, STREAM_COUNT, generate, generate_from_key};
pub use params::{ChaosParams, DEFAULT_DT, DEFAULT_STEPS, MAX_STEPS};
pub use sampler::{SplitMix64, sample};
pub use schedule::{BLOCK_SIZE, RoundKey, SUBKEY_SIZE, SubkeySchedule};
