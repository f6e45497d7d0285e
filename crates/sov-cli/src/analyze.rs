//! The `analyze` command: load config, read items, run the pipeline,
//! write artifacts.

use std::path::{Path, PathBuf};

use anyhow::Context;

use sov_analyze::{run_analysis, AnalyzeContext, BrandMatcher};
use sov_core::{load_config, BrandSet};
use sov_sentiment::LexiconScorer;

pub(crate) fn run(config_path: &Path, inputs: &[PathBuf], out_dir: &Path) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let brands = BrandSet::from(&config.brands);
    let matcher = BrandMatcher::compile(&brands)?;
    let scorer = LexiconScorer;

    let input_paths = if inputs.is_empty() {
        crate::io::scan_data_dir(&config.output.data_dir)?
    } else {
        inputs.to_vec()
    };
    tracing::info!(files = input_paths.len(), "reading item files");
    let items = crate::io::read_items(&input_paths)?;

    let ctx = AnalyzeContext {
        project: &config.project_name,
        query: &config.keywords.seeds[0],
        brands: &brands,
        matcher: &matcher,
        scorer: &scorer,
        threshold: config.sentiment.threshold,
    };

    let Some(output) = run_analysis(&ctx, items) else {
        return Ok(());
    };

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create out dir '{}'", out_dir.display()))?;
    crate::io::write_scored_csv(&out_dir.join("scored.csv"), &output.scored)?;
    crate::io::write_summary_json(&out_dir.join("summary.json"), &output.summary)?;
    crate::io::write_brand_summary_csv(&out_dir.join("brand_summary.csv"), &output.brand_rows)?;

    tracing::info!(
        rows = output.scored.len(),
        out_dir = %out_dir.display(),
        "saved scored.csv, summary.json, brand_summary.csv"
    );
    Ok(())
}
