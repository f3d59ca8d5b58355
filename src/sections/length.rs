//! Length section - rewards longer passwords.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

/// Scores the password length, counted in characters.
///
/// # Returns
/// - `+1.5` for 12 or more characters
/// - `+1.0` for 8 to 11 characters
/// - no bonus and a reason when shorter than 8
pub fn length_section(password: &SecretString) -> SectionOutcome {
    let len = password.expose_secret().chars().count();
    if len >= RECOMMENDED_LENGTH {
        SectionOutcome::bonus(1.5)
    } else if len >= MIN_LENGTH {
        SectionOutcome::bonus(1.0)
    } else {
        SectionOutcome::advice(&format!(
            "Password should be at least {} characters long ({}+ recommended).",
            MIN_LENGTH, RECOMMENDED_LENGTH
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_length_section_too_short() {
        let result = length_section(&secret("Short1!"));
        assert_eq!(
            result,
            SectionOutcome::advice("Password should be at least 8 characters long (12+ recommended).")
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section(&secret("12345678")), SectionOutcome::bonus(1.0));
    }

    #[test]
    fn test_length_section_just_below_recommended() {
        assert_eq!(length_section(&secret("12345678901")), SectionOutcome::bonus(1.0));
    }

    #[test]
    fn test_length_section_exactly_recommended() {
        assert_eq!(length_section(&secret("123456789012")), SectionOutcome::bonus(1.5));
    }

    #[test]
    fn test_length_section_recommended() {
        assert_eq!(length_section(&secret("LongEnough123!")), SectionOutcome::bonus(1.5));
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        let result = length_section(&secret("ééééééé"));
        assert_eq!(result.delta, 0.0);
        assert!(result.feedback.is_some());
    }
}
