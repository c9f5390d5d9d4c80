//! Integration parameters

use crate::error::ChaosKeyError;

/// Bytes appended to every stream per integration step (one `f64`)
pub const BYTES_PER_STEP: usize = 8;

/// Step count used when none is configured
pub const DEFAULT_STEPS: u32 = 10;

/// Recommended timestep
pub const DEFAULT_DT: f64 = 0.01;

/// Largest accepted step count.
///
/// Bounds the pre-allocated output at `11 · 8 · MAX_STEPS` bytes (88 MB).
pub const MAX_STEPS: u32 = 1_000_000;

/// Step count and timestep for one key stream generation.
///
/// Both values are part of the reproducibility contract: identical
/// `(master_key, nonce, steps, dt)` always yield identical streams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaosParams {
    /// Number of RK4 steps `N`. Must be non-zero and even so that every
    /// stream is a whole number of 128-bit subkeys.
    pub steps: u32,
    /// Integration timestep. Must be finite and strictly positive.
    pub dt: f64,
}

impl Default for ChaosParams {
    fn default() -> Self {
        Self { steps: DEFAULT_STEPS, dt: DEFAULT_DT }
    }
}

impl ChaosParams {
    /// Create parameters without validating them.
    pub const fn new(steps: u32, dt: f64) -> Self {
        Self { steps, dt }
    }

    /// Check the parameters before any integration runs.
    ///
    /// # Errors
    ///
    /// - `InvalidParams`: if `steps` is zero, odd or above [`MAX_STEPS`], if
    ///   `dt` is not finite or not strictly positive, or if the stream length
    ///   overflows `usize`
    pub fn validate(&self) -> Result<(), ChaosKeyError> {
        if self.steps == 0 {
            return Err(invalid("step count must be at least 1"));
        }
        if !self.steps.is_multiple_of(2) {
            return Err(invalid(format!("step count must be even, got {}", self.steps)));
        }
        if self.steps > MAX_STEPS {
            return Err(invalid(format!(
                "step count {} exceeds the maximum of {MAX_STEPS}",
                self.steps
            )));
        }
        if !self.dt.is_finite() {
            return Err(invalid(format!("timestep must be finite, got {}", self.dt)));
        }
        if self.dt <= 0.0 {
            return Err(invalid(format!("timestep must be positive, got {}", self.dt)));
        }
        if self.checked_stream_len().is_none() {
            return Err(invalid(format!("{} steps overflow the stream length", self.steps)));
        }
        Ok(())
    }

    /// Length in bytes of each of the eleven streams (`8·N`).
    ///
    /// Saturates on platforms where `8·N` does not fit in `usize`;
    /// [`validate`](Self::validate) rejects those parameters.
    pub fn stream_len(&self) -> usize {
        self.checked_stream_len().unwrap_or(usize::MAX)
    }

    fn checked_stream_len(&self) -> Option<usize> {
        usize::try_from(self.steps).ok()?.checked_mul(BYTES_PER_STEP)
    }
}

fn invalid(reason: impl Into<String>) -> ChaosKeyError {
    ChaosKeyError::InvalidParams { reason: reason.into() }
}
