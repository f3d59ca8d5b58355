//! Blacklist section - checks if password is in common password list.

use crate::blacklist::is_blacklisted;
use secrecy::{ExposeSecret, SecretString};

/// Checks if the password is in the blacklist of common passwords.
///
/// # Returns
/// - `Some(reason)` if password is blacklisted
/// - `None` if password is not in blacklist
pub fn blacklist_section(password: &SecretString) -> Option<String> {
    if is_blacklisted(password.expose_secret()) {
        return Some("This is a commonly used password and easily guessable!".to_string());
    }
    None
}
