//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength.

mod blacklist;
mod length;
mod pattern;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use pattern::{repetition_section, sequence_section};
pub use variety::{case_mix_section, digit_section, special_section};

use secrecy::SecretString;

/// What a scoring section contributes to the running total.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOutcome {
    pub delta: f64,
    pub feedback: Option<String>,
}

impl SectionOutcome {
    pub fn bonus(delta: f64) -> Self {
        Self { delta, feedback: None }
    }

    pub fn advice(message: &str) -> Self {
        Self { delta: 0.0, feedback: Some(message.to_string()) }
    }

    pub fn penalty(delta: f64, message: &str) -> Self {
        Self { delta: -delta, feedback: Some(message.to_string()) }
    }

    pub fn neutral() -> Self {
        Self::bonus(0.0)
    }
}

pub type Section = fn(&SecretString) -> SectionOutcome;

/// Scoring sections, in evaluation order.
pub const SECTIONS: [(&str, Section); 6] = [
    ("length", length_section),
    ("case", case_mix_section),
    ("digit", digit_section),
    ("special", special_section),
    ("repetition", repetition_section),
    ("sequence", sequence_section),
];
