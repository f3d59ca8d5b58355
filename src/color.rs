//! Rating to display color lookup.

use crate::types::Rating;

const FALLBACK_COLOR: &str = "gray";

/// Returns the display color for a rating label.
///
/// Unrecognized labels map to `"gray"`.
pub fn color_for(rating: &str) -> &'static str {
    rating
        .parse::<Rating>()
        .map(Rating::color)
        .unwrap_or(FALLBACK_COLOR)
}
