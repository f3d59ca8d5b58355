//! Password strength evaluator - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{blacklist_section, SECTIONS};
use crate::types::{Rating, ScoreResult};

const EMPTY_MESSAGE: &str = "Please enter a password to check";
#[cfg(feature = "async")]
const CANCELLED_MESSAGE: &str = "Evaluation cancelled";

/// Scores a password and explains the score.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `ScoreResult` with the rating, the score rounded to one decimal and
/// the feedback in check order.
pub fn score_password(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> ScoreResult {
    if password.expose_secret().is_empty() {
        return ScoreResult::unrated(EMPTY_MESSAGE);
    }

    if let Some(reason) = blacklist_section(password) {
        return ScoreResult {
            rating: Rating::VeryWeak,
            score: 0.0,
            feedback: vec![reason],
        };
    }

    let mut feedback = Vec::new();
    let mut score = 0.0_f64;

    for (_section_name, section_fn) in SECTIONS {
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Evaluation cancelled before section: {}", _section_name);
                    return ScoreResult::unrated(CANCELLED_MESSAGE);
                }
            }
        }

        let outcome = section_fn(password);
        score += outcome.delta;
        feedback.extend(outcome.feedback);
    }

    let score = score.max(0.0);
    let rating = Rating::from_score(score);

    // Strong only gets a message when nothing else was said.
    let summary = match rating {
        Rating::Strong if feedback.is_empty() => Some("Strong Password! Excellent job!"),
        Rating::Strong => None,
        Rating::Moderate => {
            Some("Moderate Password - Consider improving with the suggestions above.")
        }
        Rating::Fair => Some("Fair Password - Please improve using the suggestions above."),
        Rating::Weak => {
            Some("Weak Password - Significantly improve it using the suggestions above.")
        }
        Rating::NotRated | Rating::VeryWeak => None,
    };
    feedback.extend(summary.map(str::to_string));

    let result = ScoreResult {
        rating,
        score: (score * 10.0).round() / 10.0,
        feedback,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!("Password scored: {} ({})", result.rating, result.score);

    result
}

/// Async version that sends the score via channel.
///
/// Waits a short analysis delay before scoring, so an interactive caller
/// can show progress.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreResult>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(500)).await;
    let result = score_password(password, Some(token));

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password score: {}", _e);
    }
}
