//! Sentiment scoring for collected content.
//!
//! Exposes the [`SentimentScorer`] capability trait the pipeline consumes
//! and a lexicon-based implementation. The pipeline has no opinion on how
//! a score is produced beyond its range and the empty-text rule; swapping
//! in a model-backed scorer means implementing the trait and handing it to
//! the driver.

pub mod label;
pub mod scorer;

pub use label::{sentiment_label, SentimentLabel};
pub use scorer::{LexiconScorer, SentimentScorer};
