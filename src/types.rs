//! Evaluation result types: the qualitative rating and the scored result.

use std::fmt;
use std::str::FromStr;

/// Score at which a rating saturates. Scores may exceed it.
pub const MAX_SCORE: f64 = 4.0;

/// Qualitative password rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    /// Nothing to evaluate (empty input or cancelled evaluation).
    NotRated,
    /// Forced by the blacklist, regardless of other properties.
    VeryWeak,
    Weak,
    Fair,
    Moderate,
    Strong,
}

impl Rating {
    /// Maps a clamped score to its rating.
    ///
    /// Never yields `NotRated` or `VeryWeak`: those only come from the
    /// evaluator's early returns.
    pub fn from_score(score: f64) -> Self {
        if score >= 4.0 {
            Rating::Strong
        } else if score >= 3.0 {
            Rating::Moderate
        } else if score >= 2.0 {
            Rating::Fair
        } else {
            Rating::Weak
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Rating::NotRated => "Not Rated",
            Rating::VeryWeak => "Very Weak",
            Rating::Weak => "Weak",
            Rating::Fair => "Fair",
            Rating::Moderate => "Moderate",
            Rating::Strong => "Strong",
        }
    }

    /// Display color for this rating. See [`crate::color_for`].
    pub fn color(self) -> &'static str {
        match self {
            Rating::Strong => "green",
            Rating::Moderate => "orange",
            Rating::Fair => "yellow",
            Rating::Weak => "red",
            Rating::VeryWeak => "darkred",
            Rating::NotRated => "gray",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the rating labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown rating: {0}")]
pub struct UnknownRating(pub String);

impl FromStr for Rating {
    type Err = UnknownRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Rated" => Ok(Rating::NotRated),
            "Very Weak" => Ok(Rating::VeryWeak),
            "Weak" => Ok(Rating::Weak),
            "Fair" => Ok(Rating::Fair),
            "Moderate" => Ok(Rating::Moderate),
            "Strong" => Ok(Rating::Strong),
            other => Err(UnknownRating(other.to_string())),
        }
    }
}

/// Outcome of a single password evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub rating: Rating,
    /// Non-negative, rounded to one decimal.
    pub score: f64,
    /// Messages in the order the checks produced them.
    pub feedback: Vec<String>,
}

impl ScoreResult {
    pub(crate) fn unrated(message: &str) -> Self {
        Self {
            rating: Rating::NotRated,
            score: 0.0,
            feedback: vec![message.to_string()],
        }
    }

    pub fn color(&self) -> &'static str {
        self.rating.color()
    }

    /// Fraction of [`MAX_SCORE`] reached, capped at 1.0.
    pub fn progress(&self) -> f64 {
        (self.score / MAX_SCORE).min(1.0)
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Score: {:.1}/{})", self.rating, self.score, MAX_SCORE)
    }
}
