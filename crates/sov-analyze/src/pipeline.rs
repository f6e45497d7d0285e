//! Analysis pipeline orchestration.

use std::collections::HashSet;

use sov_core::{parse_published_at, BrandSet, Item};
use sov_sentiment::{sentiment_label, SentimentScorer};

use crate::aggregate::aggregate;
use crate::matcher::BrandMatcher;
use crate::score::{engagement_score, wsov_weight};
use crate::types::{BrandSummaryRow, ScoredItem, Summary};

/// Everything the driver threads through the scoring pass: compiled
/// matchers, the sentiment scorer capability, and the label threshold.
pub struct AnalyzeContext<'a> {
    pub project: &'a str,
    pub query: &'a str,
    pub brands: &'a BrandSet,
    pub matcher: &'a BrandMatcher,
    pub scorer: &'a dyn SentimentScorer,
    pub threshold: f64,
}

/// The two result artifacts plus the row-level scored table.
pub struct AnalysisOutput {
    pub scored: Vec<ScoredItem>,
    pub summary: Summary,
    pub brand_rows: Vec<BrandSummaryRow>,
}

/// Run the full analysis over a collected batch.
///
/// 1. Deduplicate items by url, first occurrence wins.
/// 2. Score each item: mention counts, dominant brand, sentiment,
///    engagement, weighted value, parsed publication date.
/// 3. Aggregate once over the scored set.
///
/// Returns `None` (with an error log, matching the collector workflow)
/// when the deduplicated batch is empty; the aggregator is not invoked.
#[must_use]
pub fn run_analysis(ctx: &AnalyzeContext<'_>, items: Vec<Item>) -> Option<AnalysisOutput> {
    let mut seen = HashSet::new();
    let deduped: Vec<Item> = items
        .into_iter()
        .filter(|item| seen.insert(item.url.clone()))
        .collect();

    if deduped.is_empty() {
        tracing::error!("no data rows found; run collectors first");
        return None;
    }

    tracing::info!(rows = deduped.len(), "scoring items");
    let scored: Vec<ScoredItem> = deduped
        .into_iter()
        .map(|item| score_item(ctx, item))
        .collect();

    let (summary, brand_rows) = aggregate(&scored, ctx.brands, ctx.project, ctx.query);

    Some(AnalysisOutput {
        scored,
        summary,
        brand_rows,
    })
}

fn score_item(ctx: &AnalyzeContext<'_>, item: Item) -> ScoredItem {
    let scan_text = format!("{} {} {}", item.title, item.snippet, item.raw_text);

    let mentions = ctx.matcher.count_mentions(&scan_text);
    // Strict comparison keeps the first brand on ties.
    let mut dominant_brand: Option<(&String, u32)> = None;
    for (brand, &count) in &mentions {
        if count > 0 && dominant_brand.is_none_or(|(_, best)| count > best) {
            dominant_brand = Some((brand, count));
        }
    }
    let dominant_brand = dominant_brand.map(|(brand, _)| brand.clone());

    let sentiment = ctx.scorer.score(&scan_text);
    let label = sentiment_label(sentiment, ctx.threshold);
    let engagement = engagement_score(item.views, item.likes, item.comments);
    let wsov_item = wsov_weight(engagement, sentiment);
    let published = item
        .published_at
        .as_deref()
        .and_then(parse_published_at);

    ScoredItem {
        item,
        scan_text,
        mentions,
        dominant_brand,
        sentiment,
        sentiment_label: label,
        engagement,
        wsov_item,
        published,
    }
}
