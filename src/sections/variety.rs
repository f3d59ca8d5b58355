//! Character variety sections - mixed case, digits, special characters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;
use crate::charset::is_special;

/// Rewards a mix of ASCII upper and lower case letters.
pub fn case_mix_section(password: &SecretString) -> SectionOutcome {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if has_upper && has_lower {
        SectionOutcome::bonus(1.0)
    } else {
        SectionOutcome::advice("Include both uppercase and lowercase letters.")
    }
}

/// Rewards at least one ASCII digit.
pub fn digit_section(password: &SecretString) -> SectionOutcome {
    if password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        SectionOutcome::bonus(1.0)
    } else {
        SectionOutcome::advice("Add at least one number (0-9).")
    }
}

/// Rewards at least one of `!@#$%^&*`.
pub fn special_section(password: &SecretString) -> SectionOutcome {
    if password.expose_secret().chars().any(is_special) {
        SectionOutcome::bonus(1.0)
    } else {
        SectionOutcome::advice("Include at least one special character (!@#$%^&*).")
    }
}
