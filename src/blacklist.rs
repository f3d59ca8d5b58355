//! Blacklist management module
//!
//! Holds the built-in list of well-known weak passwords and any extra
//! entries loaded from a file at startup.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Environment variable naming an extra blacklist file.
pub const BLACKLIST_PATH_VAR: &str = "PWD_BLACKLIST_PATH";

const BUILTIN_PASSWORDS: [&str; 20] = [
    "password", "123456", "qwerty", "admin", "welcome",
    "password123", "abc123", "letmein", "monkey", "1234567890",
    "trustno1", "dragon", "baseball", "football", "superman",
    "iloveyou", "starwars", "master", "login", "princess",
];

static EXTRA_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the extra blacklist file path from `PWD_BLACKLIST_PATH`, if set.
pub fn get_blacklist_path() -> Option<PathBuf> {
    std::env::var_os(BLACKLIST_PATH_VAR).map(PathBuf::from)
}

/// Extends the blacklist from the file named by `PWD_BLACKLIST_PATH`.
///
/// Without the variable this is a no-op and the built-in list stays in use.
/// Returns the number of blacklisted passwords afterwards.
///
/// # Errors
///
/// Same as [`init_blacklist_from_path`].
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    match get_blacklist_path() {
        Some(path) => init_blacklist_from_path(path),
        None => Ok(blacklist_len()),
    }
}

/// Extends the blacklist with one password per line from `path`.
///
/// Lines are trimmed and lowercased, blank lines skipped. Only the first
/// successful load takes effect; later calls return the current size.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    if EXTRA_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
    {
        return Ok(blacklist_len());
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty() && !BUILTIN_PASSWORDS.contains(&l.as_str()))
        .collect();

    {
        let mut guard = EXTRA_PASSWORDS
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another caller may have won the race since the read check.
        if guard.is_none() {
            *guard = Some(set);
        }
    }

    let count = blacklist_len();

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns every blacklisted password, lowercased.
pub fn get_blacklist() -> HashSet<String> {
    let mut set: HashSet<String> = BUILTIN_PASSWORDS.iter().map(|p| p.to_string()).collect();
    let guard = EXTRA_PASSWORDS.read().unwrap_or_else(PoisonError::into_inner);
    if let Some(extra) = guard.as_ref() {
        set.extend(extra.iter().cloned());
    }
    set
}

/// Checks if a password is in the blacklist (case-insensitive).
pub fn is_blacklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    if BUILTIN_PASSWORDS.contains(&lowered.as_str()) {
        return true;
    }
    EXTRA_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|extra| extra.contains(&lowered))
}

fn blacklist_len() -> usize {
    let extra = EXTRA_PASSWORDS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map_or(0, HashSet::len);
    BUILTIN_PASSWORDS.len() + extra
}

/// Drops any loaded entries, leaving only the built-in list.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = EXTRA_PASSWORDS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: serial tests, no concurrent env access
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: serial tests, no concurrent env access
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_unset() {
        remove_env(BLACKLIST_PATH_VAR);
        assert_eq!(get_blacklist_path(), None);
    }

    #[test]
    #[serial]
    fn test_get_blacklist_path_from_env() {
        let custom_path = "/custom/path/blacklist.txt";
        set_env(BLACKLIST_PATH_VAR, custom_path);

        assert_eq!(get_blacklist_path(), Some(PathBuf::from(custom_path)));

        remove_env(BLACKLIST_PATH_VAR);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_without_env_keeps_builtin() {
        reset_blacklist_for_testing();
        remove_env(BLACKLIST_PATH_VAR);

        let count = init_blacklist().expect("no-op init should succeed");
        assert_eq!(count, 20);
        assert_eq!(get_blacklist().len(), 20);
    }

    #[test]
    #[serial]
    fn test_builtin_entries_any_case() {
        reset_blacklist_for_testing();
        for pwd in BUILTIN_PASSWORDS {
            assert!(is_blacklisted(pwd));
            assert!(is_blacklisted(&pwd.to_uppercase()));
        }
        assert!(is_blacklisted("PassWord"));
        assert!(is_blacklisted("LetMeIn"));
    }

    #[test]
    #[serial]
    fn test_not_blacklisted() {
        reset_blacklist_for_testing();
        assert!(!is_blacklisted("veryuncommonpassword987"));
        assert!(!is_blacklisted("password1"));
        assert!(!is_blacklisted(" password"));
        assert!(!is_blacklisted(""));
    }

    #[test]
    #[serial]
    fn test_init_blacklist_file_not_found() {
        reset_blacklist_for_testing();
        set_env(BLACKLIST_PATH_VAR, "/nonexistent/path/blacklist.txt");

        let result = init_blacklist();
        match result {
            Err(BlacklistError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }

        remove_env(BLACKLIST_PATH_VAR);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_empty_file() {
        reset_blacklist_for_testing();
        let temp_file = setup_with_tempfile(&["", "   "]);

        let result = init_blacklist_from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
        assert_eq!(get_blacklist().len(), 20);
    }

    #[test]
    #[serial]
    fn test_init_blacklist_extends_builtin() {
        reset_blacklist_for_testing();
        let temp_file = setup_with_tempfile(&["Hunter2", "  correcthorse  ", "qwerty", ""]);

        let path = temp_file.path().to_str().unwrap();
        set_env(BLACKLIST_PATH_VAR, path);

        let count = init_blacklist().expect("init should succeed");
        assert_eq!(count, 22);

        assert!(is_blacklisted("hunter2"));
        assert!(is_blacklisted("HUNTER2"));
        assert!(is_blacklisted("correcthorse"));
        assert!(is_blacklisted("password"));

        remove_env(BLACKLIST_PATH_VAR);
        reset_blacklist_for_testing();
    }

    #[test]
    #[serial]
    fn test_init_blacklist_is_idempotent() {
        reset_blacklist_for_testing();
        let first = setup_with_tempfile(&["firstlist"]);
        let second = setup_with_tempfile(&["secondlist", "another"]);

        assert_eq!(init_blacklist_from_path(first.path()).unwrap(), 21);
        assert_eq!(init_blacklist_from_path(second.path()).unwrap(), 21);
        assert!(is_blacklisted("firstlist"));
        assert!(!is_blacklisted("secondlist"));

        reset_blacklist_for_testing();
    }
}
