//! Error types for chaos key derivation

use thiserror::Error;

/// Errors from key stream derivation and subkey intake.
///
/// Nothing is recovered locally. Every variant propagates to the caller and
/// no partial key material accompanies it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChaosKeyError {
    /// Step count or timestep rejected before any integration ran
    #[error("invalid parameters: {reason}")]
    InvalidParams {
        /// Which parameter was rejected and why
        reason: String,
    },

    /// An integration step produced a non-finite coordinate
    #[error("{system} integration diverged at step {step}")]
    Divergence {
        /// Name of the dynamical system that blew up
        system: &'static str,
        /// 1-based step number that produced the non-finite state
        step: u32,
    },

    /// The initial-state generator ran out of output.
    ///
    /// SplitMix64 has no finite period in practice, so this is never
    /// produced by this crate. Reserved for finite-period substitutes.
    #[error("prng exhausted after {draws} draws")]
    PrngExhaustion {
        /// Number of draws taken before exhaustion
        draws: u64,
    },

    /// Subkey material does not satisfy the cipher intake contract
    #[error("invalid subkeys: {reason}")]
    InvalidSubkeys {
        /// Which part of the contract was violated
        reason: String,
    },
}

impl ChaosKeyError {
    /// Returns true if this error is fatal (unrecoverable)
    ///
    /// Fatal errors mean the chosen parameters cannot produce key material
    /// at all; retrying without changing them is pointless. Non-fatal errors
    /// are rejected inputs that the caller can correct.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Divergence { .. } => true,
            Self::PrngExhaustion { .. } => true,

            Self::InvalidParams { .. } => false,
            Self::InvalidSubkeys { .. } => false,
        }
    }

    /// Re-tag a divergence with the step at which it happened.
    ///
    /// Integrators only know they failed one step from the state they were
    /// given; the assembler knows the absolute position in the trajectory.
    pub(crate) fn at_step(self, step: u32) -> Self {
        match self {
            Self::Divergence { system, .. } => Self::Divergence { system, step },
            other => other,
        }
    }
}
