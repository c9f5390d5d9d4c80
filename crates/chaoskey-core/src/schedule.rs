//! Subkey intake for the 512-bit block cipher
//!
//! The cipher's key schedule consumes eleven equal-length streams and reads
//! each one as a sequence of 128-bit round keys. This module enforces that
//! contract; the round function itself lives with the cipher.

use crate::{error::ChaosKeyError, keystream::KeyStreams};

/// Cipher block size in bytes (512 bits)
pub const BLOCK_SIZE: usize = 64;

/// Round key size in bytes (128 bits)
pub const SUBKEY_SIZE: usize = 16;

/// A round key taken from one subkey stream
pub type RoundKey = [u8; SUBKEY_SIZE];

/// Validated subkey material, owned by the cipher.
///
/// Built by moving a [`KeyStreams`] bundle in; the bundle is zeroized when
/// the schedule is dropped.
#[derive(Debug)]
pub struct SubkeySchedule {
    streams: KeyStreams,
}

impl SubkeySchedule {
    /// Take ownership of a key stream bundle.
    ///
    /// # Errors
    ///
    /// - `InvalidSubkeys`: if the streams are empty or their length is not a
    ///   multiple of [`SUBKEY_SIZE`] (odd step count)
    pub fn new(streams: KeyStreams) -> Result<Self, ChaosKeyError> {
        let len = streams.stream_len();
        if len == 0 {
            return Err(ChaosKeyError::InvalidSubkeys {
                reason: "subkey streams are empty".to_string(),
            });
        }
        if !len.is_multiple_of(SUBKEY_SIZE) {
            return Err(ChaosKeyError::InvalidSubkeys {
                reason: format!("stream length {len} is not a multiple of {SUBKEY_SIZE}"),
            });
        }
        Ok(Self { streams })
    }

    /// Build a schedule from raw byte sequences, as handed over by a caller
    /// that did not use [`generate`](crate::generate).
    ///
    /// # Errors
    ///
    /// - `InvalidSubkeys`: wrong stream count, unequal lengths, or a length
    ///   that is not a positive multiple of [`SUBKEY_SIZE`]
    pub fn from_streams(subkeys: Vec<Vec<u8>>) -> Result<Self, ChaosKeyError> {
        Self::new(KeyStreams::from_streams(subkeys)?)
    }

    /// Number of round keys in every stream.
    pub fn rounds(&self) -> usize {
        self.streams.stream_len() / SUBKEY_SIZE
    }

    /// All round keys of stream `index`, or `None` if out of range.
    pub fn round_keys(&self, index: usize) -> Option<&[RoundKey]> {
        let (keys, rest) = self.streams.stream(index)?.as_chunks::<SUBKEY_SIZE>();
        debug_assert!(rest.is_empty());
        Some(keys)
    }

    /// Round key `round` of stream `index`.
    pub fn round_key(&self, index: usize, round: usize) -> Option<&RoundKey> {
        self.round_keys(index)?.get(round)
    }

    /// The underlying key stream bundle.
    pub fn streams(&self) -> &KeyStreams {
        &self.streams
    }
}
