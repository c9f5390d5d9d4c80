//! Output formatting and validation checks for the CLI.

use std::{fmt, io::Write};

use chaoskey_core::{
    BLOCK_SIZE, ChaosKeyError, ChaosParams, KeyStreams, SUBKEY_SIZE, SubkeySchedule, generate,
};
use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither a master key nor an explicit seed was given
    #[error("a master key or an explicit seed is required")]
    MissingKey,

    /// A validation check failed
    #[error("validation failed: {0}")]
    Validation(String),

    /// Key derivation failed
    #[error(transparent)]
    Key(#[from] ChaosKeyError),

    /// Writing output failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of one validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Short name of the invariant
    pub name: &'static str,
    /// Whether it held
    pub passed: bool,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "ok" } else { "FAILED" };
        write!(f, "{:<24} {status}", self.name)
    }
}

/// Run every invariant check against streams derived from `seed`.
///
/// Generation errors are returned as errors, not as failed checks.
pub fn validate(seed: i64, params: &ChaosParams) -> Result<Vec<Check>, CliError> {
    let first = generate(seed, params.steps, params.dt)?;
    let second = generate(seed, params.steps, params.dt)?;

    let expected_len = params.stream_len();
    let checks = vec![
        Check { name: "determinism", passed: first == second },
        Check {
            name: "stream length",
            passed: first.streams().iter().all(|s| s.len() == expected_len),
        },
        Check { name: "xor mix", passed: first.verify_mix() },
        Check { name: "subkey intake", passed: SubkeySchedule::new(first).is_ok() },
    ];

    tracing::info!(
        passed = checks.iter().filter(|c| c.passed).count(),
        total = checks.len(),
        "validation finished"
    );

    Ok(checks)
}

/// Return the first failed check as an error.
pub fn first_failure(checks: &[Check]) -> Result<(), CliError> {
    match checks.iter().find(|c| !c.passed) {
        Some(failed) => Err(CliError::Validation(failed.name.to_string())),
        None => Ok(()),
    }
}

/// Write a one-line summary that contains no key material.
pub fn write_summary(out: &mut impl Write, streams: &KeyStreams) -> std::io::Result<()> {
    let len = streams.stream_len();
    writeln!(
        out,
        "{} streams x {len} bytes ({} steps, {} round keys, {} cipher blocks)",
        streams.streams().len(),
        streams.steps(),
        len / SUBKEY_SIZE,
        len / BLOCK_SIZE,
    )
}

/// Write every stream as a hex line.
pub fn write_streams(out: &mut impl Write, streams: &KeyStreams) -> std::io::Result<()> {
    for (i, stream) in streams.streams().iter().enumerate() {
        writeln!(out, "stream {i:>2}: {}", hex::encode(stream))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_passes_for_default_params() {
        let checks = validate(42, &ChaosParams::default()).unwrap();

        assert_eq!(checks.len(), 4);
        assert!(checks.iter().all(|c| c.passed));
    }

    #[test]
    fn validate_propagates_divergence() {
        let result = validate(42, &ChaosParams::new(2, 100.0));
        assert!(matches!(result, Err(CliError::Key(ChaosKeyError::Divergence { .. }))));
    }

    #[test]
    fn summary_has_no_key_bytes() {
        let streams = generate(7, 16, 0.01).unwrap();
        let mut out = Vec::new();
        write_summary(&mut out, &streams).unwrap();

        insta::assert_snapshot!(
            String::from_utf8(out).unwrap().trim_end(),
            @"11 streams x 128 bytes (16 steps, 8 round keys, 2 cipher blocks)"
        );
    }

    #[test]
    fn verbose_dump_has_one_line_per_stream() {
        let streams = generate(7, 2, 0.01).unwrap();
        let mut out = Vec::new();
        write_streams(&mut out, &streams).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("stream  0: "));
        assert!(lines[10].starts_with("stream 10: "));
        assert_eq!(lines[3].len(), "stream  3: ".len() + 32);
    }

    #[test]
    fn first_failure_names_failed_check() {
        let checks = [
            Check { name: "determinism", passed: true },
            Check { name: "xor mix", passed: false },
            Check { name: "subkey intake", passed: false },
        ];

        assert!(matches!(
            first_failure(&checks),
            Err(CliError::Validation(name)) if name == "xor mix"
        ));
        assert!(first_failure(&checks[..1]).is_ok());
    }

    #[test]
    fn check_display() {
        let check = Check { name: "xor mix", passed: false };
        assert_eq!(check.to_string(), format!("{:<24} FAILED", "xor mix"));
    }
}
