//! Character classes shared by the scorer and the generator.

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*";

/// Every class, in the order the generator guarantees them.
pub const CLASSES: [&[u8]; 4] = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL];

pub fn is_special(c: char) -> bool {
    c.is_ascii() && SPECIAL.contains(&(c as u8))
}

/// Union of all classes.
pub fn all() -> Vec<u8> {
    CLASSES.iter().flat_map(|class| class.iter().copied()).collect()
}
