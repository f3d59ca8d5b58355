//! Random password generator.
//!
//! Every generated password contains at least one lowercase letter, one
//! uppercase letter, one digit and one special character, so it always
//! passes the scorer's variety checks. Repeated or sequential characters
//! are not filtered out.

use rand::seq::SliceRandom;
use rand::Rng;
use secrecy::SecretString;

use crate::charset::{self, CLASSES};

/// Shortest password the generator produces.
pub const MIN_LENGTH: usize = 8;
/// Upper bound callers are expected to offer. Not enforced here.
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 12;

/// Generates a password of `length` characters using the thread RNG.
///
/// Lengths below [`MIN_LENGTH`] are raised to it.
pub fn generate_password(length: usize) -> SecretString {
    generate_password_with(&mut rand::thread_rng(), length)
}

/// Generates a password of [`DEFAULT_LENGTH`] characters.
pub fn generate_default_password() -> SecretString {
    generate_password(DEFAULT_LENGTH)
}

/// Generates a password drawing from the given random source.
pub fn generate_password_with<R: Rng>(rng: &mut R, length: usize) -> SecretString {
    let length = length.max(MIN_LENGTH);

    // One of each class, then the rest from the full pool.
    let mut password: Vec<u8> = CLASSES.iter().map(|class| pick(rng, class)).collect();

    let pool = charset::all();
    password.extend((CLASSES.len()..length).map(|_| pick(rng, &pool)));

    password.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of {} characters", password.len());

    let password: String = password.into_iter().map(char::from).collect();
    SecretString::new(password.into())
}

fn pick<R: Rng>(rng: &mut R, class: &[u8]) -> u8 {
    class[rng.gen_range(0..class.len())]
}
