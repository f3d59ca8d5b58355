//! Pattern analysis sections - detect repetitive and sequential patterns.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

const PATTERN_PENALTY: f64 = 0.5;

const ASCENDING_RUNS: [&str; 2] = ["abcdefghijklmnopqrstuvwxyz", "0123456789"];
const RUN_WINDOW: usize = 3;

/// Penalizes any character repeated 3+ times in a row (e.g., "aaa").
///
/// Newlines never count as a repeated character.
pub fn repetition_section(password: &SecretString) -> SectionOutcome {
    let mut prev = None;
    let mut repeated_count = 0;
    for c in password.expose_secret().chars() {
        if c != '\n' && prev == Some(c) {
            repeated_count += 1;
            if repeated_count >= 3 {
                return SectionOutcome::penalty(
                    PATTERN_PENALTY,
                    "Avoid repeating the same character multiple times (e.g., 'aaa', '111').",
                );
            }
        } else {
            repeated_count = 1;
        }
        prev = Some(c);
    }
    SectionOutcome::neutral()
}

/// Penalizes any 3-character ascending run of letters or digits, case-insensitive.
pub fn sequence_section(password: &SecretString) -> SectionOutcome {
    let lowered = password.expose_secret().to_lowercase();
    let has_run = ASCENDING_RUNS.iter().any(|run| {
        (0..=run.len() - RUN_WINDOW).any(|i| lowered.contains(&run[i..i + RUN_WINDOW]))
    });

    if has_run {
        SectionOutcome::penalty(PATTERN_PENALTY, "Avoid sequential patterns like 'abc', '123'.")
    } else {
        SectionOutcome::neutral()
    }
}
