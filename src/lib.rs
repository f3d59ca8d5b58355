//! Password strength meter library
//!
//! Scores passwords with a handful of heuristic checks (length, character
//! variety, repeated and sequential patterns, a blacklist of common
//! passwords) and generates random passwords that pass those checks.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable and channel-based scoring
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BLACKLIST_PATH`: Optional file of extra blacklisted passwords,
//!   one per line, read by [`init_blacklist`]
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{init_blacklist, generate_password, score_password};
//! use secrecy::SecretString;
//!
//! // Load extra blacklist entries (call once at startup)
//! init_blacklist().expect("Failed to load blacklist");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let result = score_password(&password, None);
//!
//! #[cfg(not(feature = "async"))]
//! let result = score_password(&password);
//!
//! println!("{}", result);
//! for line in &result.feedback {
//!     println!("{}", line);
//! }
//!
//! let generated = generate_password(16);
//! ```

// Internal modules
mod blacklist;
mod charset;
mod color;
mod evaluator;
mod generator;
mod sections;
mod types;

// Public API
pub use blacklist::{
    get_blacklist, get_blacklist_path, init_blacklist, init_blacklist_from_path, is_blacklisted,
    BlacklistError, BLACKLIST_PATH_VAR,
};
pub use charset::{DIGITS, LOWERCASE, SPECIAL, UPPERCASE};
pub use color::color_for;
pub use evaluator::score_password;
pub use generator::{
    generate_default_password, generate_password, generate_password_with, DEFAULT_LENGTH,
    MAX_LENGTH, MIN_LENGTH,
};
pub use types::{Rating, ScoreResult, UnknownRating, MAX_SCORE};

#[cfg(feature = "async")]
pub use evaluator::score_password_tx;
