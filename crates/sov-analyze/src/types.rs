//! Derived records: the scored item, the summary, and the flattened
//! per-brand table.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use sov_core::Item;
use sov_sentiment::SentimentLabel;

/// An item plus everything the scoring pass derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: Item,
    /// Concatenated title + snippet + raw text the matcher and scorer ran
    /// over; carried into the row-level artifact.
    pub scan_text: String,
    /// Mention count per brand, in brand-set order.
    pub mentions: IndexMap<String, u32>,
    /// Brand with the highest mention count; `None` when nothing matched.
    /// Ties go to the earlier brand in brand-set order.
    pub dominant_brand: Option<String>,
    /// Sentiment score in `[-1, 1]`.
    pub sentiment: f64,
    pub sentiment_label: SentimentLabel,
    pub engagement: f64,
    /// Sentiment-weighted engagement this item spreads over its mentions.
    pub wsov_item: f64,
    /// Parsed publication timestamp; `None` when absent or unparseable.
    pub published: Option<DateTime<Utc>>,
}

impl ScoredItem {
    #[must_use]
    pub fn total_mentions(&self) -> u32 {
        self.mentions.values().sum()
    }
}

/// Totals and their normalized shares for one metric.
#[derive(Debug, Clone, Serialize)]
pub struct MetricBlock<T> {
    pub totals: IndexMap<String, T>,
    pub share: IndexMap<String, f64>,
}

/// Per-brand tally of item sentiment labels.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SentimentCounts {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentCounts {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PublisherCount {
    pub publisher: String,
    pub count: u64,
}

/// The aggregate result for the whole batch.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub project: String,
    pub query: String,
    pub total_items: usize,
    pub brands: Vec<String>,
    /// Raw mention share: unweighted mention counts.
    pub rms: MetricBlock<u64>,
    /// Weighted share of voice: engagement- and sentiment-weighted.
    pub wsov: MetricBlock<f64>,
    /// Share of positive voice: wsov restricted to positive items.
    pub sopv: MetricBlock<f64>,
    pub sentiment_breakdown: IndexMap<String, SentimentCounts>,
    pub top_publishers: Vec<PublisherCount>,
}

/// One flattened row of the per-brand summary table.
#[derive(Debug, Clone, Serialize)]
pub struct BrandSummaryRow {
    pub brand: String,
    pub mentions: u64,
    pub wsov: f64,
    pub sopv: f64,
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}
