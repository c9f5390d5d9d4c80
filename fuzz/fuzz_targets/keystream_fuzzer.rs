//! Fuzz target for key stream derivation
//!
//! Tests seed derivation, parameter validation and integration under
//! adversarial inputs.
//!
//! # Strategy
//!
//! - Arbitrary master keys and nonces (empty, small, large)
//! - Boundary step counts (0, odd, small even)
//! - Arbitrary timesteps, including NaN, infinities, negatives and huge values
//!
//! # Invariants
//!
//! - Derivation never panics
//! - Invalid parameters are rejected before integration
//! - Successful output has eleven streams of `8·steps` bytes
//! - Streams 8, 9, 10 obey the XOR law
//! - Successful output is accepted by the subkey intake
//! - Derivation is deterministic (same inputs → same output)

#![no_main]

use arbitrary::Arbitrary;
use chaoskey_core::{ChaosKeyError, ChaosParams, STREAM_COUNT, SubkeySchedule, generate_from_key};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct KeyStreamScenario {
    /// Master key (variable length)
    master_key: Vec<u8>,
    /// Nonce (variable length)
    nonce: Vec<u8>,
    /// Step count, kept small so each run stays fast
    steps: u8,
    /// Timestep, either drawn from interesting values or raw bits
    dt: Timestep,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Timestep {
    Recommended,
    Small,
    Huge,
    Zero,
    Negative,
    NotANumber,
    Infinite,
    Raw(u64),
}

impl Timestep {
    fn value(self) -> f64 {
        match self {
            Self::Recommended => 0.01,
            Self::Small => 1e-6,
            Self::Huge => 100.0,
            Self::Zero => 0.0,
            Self::Negative => -0.01,
            Self::NotANumber => f64::NAN,
            Self::Infinite => f64::INFINITY,
            Self::Raw(bits) => f64::from_bits(bits),
        }
    }
}

fuzz_target!(|scenario: KeyStreamScenario| {
    let params = ChaosParams::new(u32::from(scenario.steps), scenario.dt.value());
    let result = generate_from_key(&scenario.master_key, &scenario.nonce, &params);

    let valid = params.validate().is_ok();

    match result {
        Ok(streams) => {
            assert!(valid, "invalid params produced output: {params:?}");
            assert_eq!(streams.streams().len(), STREAM_COUNT);
            for stream in streams.streams() {
                assert_eq!(stream.len(), 8 * usize::from(scenario.steps));
            }
            assert!(streams.verify_mix(), "xor law violated");

            let again = generate_from_key(&scenario.master_key, &scenario.nonce, &params);
            assert_eq!(again.as_ref().ok(), Some(&streams), "derivation must be deterministic");

            assert!(SubkeySchedule::new(streams).is_ok(), "intake rejected generated streams");
        },
        Err(ChaosKeyError::InvalidParams { .. }) => {
            assert!(!valid, "valid params rejected: {params:?}");
        },
        Err(ChaosKeyError::Divergence { step, .. }) => {
            assert!(valid);
            assert!(step >= 1 && step <= params.steps);
        },
        Err(err) => panic!("unexpected error: {err}"),
    }
});
