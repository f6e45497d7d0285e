//! Categorical sentiment labels.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
            SentimentLabel::Negative => write!(f, "negative"),
        }
    }
}

/// Classify a sentiment score against a threshold.
///
/// Comparisons are strict: a score exactly at the threshold (or its
/// negation) is neutral.
#[must_use]
pub fn sentiment_label(score: f64, threshold: f64) -> SentimentLabel {
    if score > threshold {
        SentimentLabel::Positive
    } else if score < -threshold {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
