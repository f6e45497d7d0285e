//! Share-of-voice scoring and aggregation.
//!
//! Takes the collected item set and the brand list, scores each item
//! (mention counts, engagement, sentiment weighting), and rolls the scored
//! set up into per-brand totals and shares: raw mention share, weighted
//! share of voice, and share of positive voice.

pub mod aggregate;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod score;
pub mod types;

pub use aggregate::{aggregate, compute_shares};
pub use error::MatchError;
pub use matcher::BrandMatcher;
pub use pipeline::{run_analysis, AnalysisOutput, AnalyzeContext};
pub use score::{engagement_score, wsov_weight};
pub use types::{BrandSummaryRow, MetricBlock, PublisherCount, ScoredItem, SentimentCounts, Summary};
