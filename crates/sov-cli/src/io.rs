//! Item file reading and the three output artifacts.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use csv::Writer;

use sov_analyze::{BrandSummaryRow, ScoredItem, Summary};
use sov_core::Item;

/// Collect every `.json`/`.jsonl` file in a directory, sorted by name.
///
/// A missing directory is not fatal: it logs a warning and yields an
/// empty list, so the run falls through to the no-data path.
pub fn scan_data_dir(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "data dir missing, nothing to scan");
        return Ok(Vec::new());
    }
    let mut paths = Vec::new();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read data dir '{}'", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        let ext = path.extension().and_then(|e| e.to_str());
        if matches!(ext, Some("json" | "jsonl")) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Read item records from JSON array or JSON Lines files.
///
/// Missing files are logged and skipped so a partial collector run still
/// analyzes. In line-delimited files, unparseable lines are logged and
/// skipped; a malformed array file is an error.
pub fn read_items(paths: &[PathBuf]) -> anyhow::Result<Vec<Item>> {
    let mut items = Vec::new();
    for path in paths {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "input file missing, skipping");
            continue;
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        if content.trim_start().starts_with('[') {
            let mut batch: Vec<Item> = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse '{}'", path.display()))?;
            items.append(&mut batch);
        } else {
            for (lineno, line) in content.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                match serde_json::from_str::<Item>(line) {
                    Ok(item) => items.push(item),
                    Err(e) => tracing::warn!(
                        path = %path.display(),
                        line = lineno + 1,
                        error = %e,
                        "skipping unparseable line"
                    ),
                }
            }
        }
    }
    Ok(items)
}

/// The unified column order collectors write, plus the derived columns.
const SCORED_COLUMNS: &[&str] = &[
    "platform",
    "query",
    "rank",
    "url",
    "title",
    "snippet",
    "publisher",
    "views",
    "likes",
    "comments",
    "published_at",
    "raw_text",
    "scan_text",
    "brand_mentions_json",
    "dominant_brand",
    "sentiment",
    "sentiment_label",
    "engagement",
    "wsov_item",
];

pub fn write_scored_csv(path: &Path, scored: &[ScoredItem]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(SCORED_COLUMNS)?;
    for row in scored {
        let item = &row.item;
        writer.write_record([
            item.platform.clone(),
            item.query.clone(),
            item.rank.map(|r| r.to_string()).unwrap_or_default(),
            item.url.clone(),
            item.title.clone(),
            item.snippet.clone(),
            item.publisher.clone(),
            item.views.to_string(),
            item.likes.to_string(),
            item.comments.to_string(),
            row.published.map(|d| d.to_rfc3339()).unwrap_or_default(),
            item.raw_text.clone(),
            row.scan_text.clone(),
            serde_json::to_string(&row.mentions)?,
            row.dominant_brand.clone().unwrap_or_default(),
            row.sentiment.to_string(),
            row.sentiment_label.to_string(),
            row.engagement.to_string(),
            row.wsov_item.to_string(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write '{}'", path.display()))
}

pub fn write_brand_summary_csv(path: &Path, rows: &[BrandSummaryRow]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;
    let mut writer = Writer::from_writer(file);

    // Headers come from the struct's field names on the first serialize.
    for row in rows {
        writer.serialize(row)?;
    }
    if rows.is_empty() {
        writer.write_record([
            "brand", "mentions", "wsov", "sopv", "positive", "neutral", "negative",
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write '{}'", path.display()))
}

pub fn write_summary_json(path: &Path, summary: &Summary) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write '{}'", path.display()))
}
