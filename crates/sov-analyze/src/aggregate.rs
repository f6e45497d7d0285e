//! Per-brand rollups over the scored item set.

use indexmap::IndexMap;

use sov_core::BrandSet;
use sov_sentiment::SentimentLabel;

use crate::types::{
    BrandSummaryRow, MetricBlock, PublisherCount, ScoredItem, SentimentCounts, Summary,
};

const TOP_PUBLISHER_LIMIT: usize = 10;

/// Normalize totals into shares.
///
/// Divides every value by the sum of all values; a zero (or negative) sum
/// is floored to 1.0, so all-zero totals yield all-zero shares rather than
/// a division error.
#[must_use]
pub fn compute_shares(totals: &IndexMap<String, f64>) -> IndexMap<String, f64> {
    let sum: f64 = totals.values().sum();
    let denom = if sum > 0.0 { sum } else { 1.0 };
    totals.iter().map(|(k, v)| (k.clone(), v / denom)).collect()
}

/// Roll the scored set up into the batch summary and the flattened
/// per-brand table.
///
/// Per item: every brand's mention count feeds the raw totals; items with
/// mentions and a positive weighted value spread that value over their
/// mentioned brands proportionally to mention count (and into the positive
/// bucket as well when the item is labeled positive); every mentioned
/// brand's sentiment counter ticks once per item.
#[must_use]
pub fn aggregate(
    items: &[ScoredItem],
    brands: &BrandSet,
    project: &str,
    query: &str,
) -> (Summary, Vec<BrandSummaryRow>) {
    let mut rms: IndexMap<String, u64> =
        brands.iter().map(|b| (b.clone(), 0)).collect();
    let mut wsov: IndexMap<String, f64> =
        brands.iter().map(|b| (b.clone(), 0.0)).collect();
    let mut sopv: IndexMap<String, f64> =
        brands.iter().map(|b| (b.clone(), 0.0)).collect();
    let mut sentiment_counts: IndexMap<String, SentimentCounts> = brands
        .iter()
        .map(|b| (b.clone(), SentimentCounts::default()))
        .collect();

    for item in items {
        let total = item.total_mentions();
        let weight = item.wsov_item;

        for (brand, &count) in &item.mentions {
            if let Some(t) = rms.get_mut(brand) {
                *t += u64::from(count);
            }
        }

        if total > 0 && weight > 0.0 {
            for (brand, &count) in &item.mentions {
                if count > 0 {
                    let share = f64::from(count) / f64::from(total) * weight;
                    if let Some(t) = wsov.get_mut(brand) {
                        *t += share;
                    }
                    if item.sentiment_label == SentimentLabel::Positive {
                        if let Some(t) = sopv.get_mut(brand) {
                            *t += share;
                        }
                    }
                }
            }
        }

        for (brand, &count) in &item.mentions {
            if count > 0 {
                if let Some(c) = sentiment_counts.get_mut(brand) {
                    c.record(item.sentiment_label);
                }
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let rms_f64: IndexMap<String, f64> =
        rms.iter().map(|(k, &v)| (k.clone(), v as f64)).collect();

    let brand_rows = brands
        .iter()
        .map(|b| BrandSummaryRow {
            brand: b.clone(),
            mentions: rms[b],
            wsov: wsov[b],
            sopv: sopv[b],
            positive: sentiment_counts[b].positive,
            neutral: sentiment_counts[b].neutral,
            negative: sentiment_counts[b].negative,
        })
        .collect();

    let summary = Summary {
        project: project.to_string(),
        query: query.to_string(),
        total_items: items.len(),
        brands: brands.names().to_vec(),
        rms: MetricBlock {
            share: compute_shares(&rms_f64),
            totals: rms,
        },
        wsov: MetricBlock {
            share: compute_shares(&wsov),
            totals: wsov,
        },
        sopv: MetricBlock {
            share: compute_shares(&sopv),
            totals: sopv,
        },
        sentiment_breakdown: sentiment_counts,
        top_publishers: top_publishers(items),
    };

    (summary, brand_rows)
}

/// Item counts per publisher, descending, top 10.
///
/// Publishers enter the map in first-seen order and the sort is stable, so
/// ties keep that order. Items without a publisher are skipped.
fn top_publishers(items: &[ScoredItem]) -> Vec<PublisherCount> {
    let mut counts: IndexMap<&str, u64> = IndexMap::new();
    for item in items {
        let publisher = item.item.publisher.trim();
        if !publisher.is_empty() {
            *counts.entry(publisher).or_insert(0) += 1;
        }
    }
    let mut ranked: Vec<(&str, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(TOP_PUBLISHER_LIMIT)
        .map(|(publisher, count)| PublisherCount {
            publisher: publisher.to_string(),
            count,
        })
        .collect()
}
