//! One-shot batch pipeline over the given-names dataset.
//!
//! read → optional geography filter and column drop → fold the name column
//! → append derived columns → write → per-column grouping report.
//!
//! Folding each row is independent of every other row, so the fold step maps
//! over the column in parallel. Results stay index-aligned with the rows,
//! which keeps row order intact no matter how the work is scheduled.

use crate::dataset::Dataset;
use crate::error::NormalizeResult;
use crate::normalize::{fold_accents, fold_phonetic};
use crate::report::{self, FoldedPair, GroupingStats};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

/// Which derived columns a run produces.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantSet {
    /// Accent-folded column only
    Accent,
    /// Phonetic-folded column only
    Phonetic,
    /// Both folded columns
    Both,
}

/// Row filter on a geography-level column, plus the columns to drop once
/// the filter has been applied.
#[derive(Debug, Clone)]
pub struct GeoFilter {
    pub column: String,
    pub level: String,
    pub drop: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub name_column: String,
    pub variants: VariantSet,
    pub geo_filter: Option<GeoFilter>,
    pub sample_size: usize,
}

/// Grouping report for one derived column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub column: String,
    pub stats: GroupingStats,
    pub examples: Vec<FoldedPair>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub columns: Vec<ColumnReport>,
}

type Fold = fn(&str) -> String;

pub fn run(options: &PipelineOptions) -> NormalizeResult<RunSummary> {
    tracing::info!("Reading input file: {}", options.input.display());
    let mut dataset = Dataset::read(&options.input)?;
    let rows_read = dataset.len();
    tracing::info!("Read {} rows, {} columns", rows_read, dataset.headers().len());

    if let Some(filter) = &options.geo_filter {
        let kept = dataset.filter_rows(&filter.column, &filter.level)?;
        tracing::info!(
            "Kept {} of {} rows where {} = '{}'",
            kept,
            rows_read,
            filter.column,
            filter.level
        );
        dataset.drop_columns(&filter.drop);
    }
    let rows_kept = dataset.len();

    let names = dataset.column(&options.name_column)?;

    let mut columns = Vec::new();
    for (suffix, fold) in selected_folds(options.variants) {
        let column = format!("{}_{}", options.name_column, suffix);
        tracing::info!("Deriving column '{}'", column);

        let folded = fold_column(&names, fold);
        let stats = report::compute_reduction(&names, &folded);
        let examples = report::sample_divergent_pairs(&names, &folded, options.sample_size);
        dataset.push_column(&column, folded)?;
        columns.push(ColumnReport {
            column,
            stats,
            examples,
        });
    }

    tracing::info!("Writing output file: {}", options.output.display());
    dataset.write(&options.output)?;

    Ok(RunSummary {
        rows_read,
        rows_kept,
        columns,
    })
}

fn selected_folds(variants: VariantSet) -> Vec<(&'static str, Fold)> {
    match variants {
        VariantSet::Accent => vec![("accent_normalized", fold_accents as Fold)],
        VariantSet::Phonetic => vec![("phonetic_normalized", fold_phonetic as Fold)],
        VariantSet::Both => vec![
            ("accent_normalized", fold_accents as Fold),
            ("phonetic_normalized", fold_phonetic as Fold),
        ],
    }
}

fn fold_column(names: &[String], fold: Fold) -> Vec<String> {
    let pb = ProgressBar::new(names.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let folded = names
        .par_iter()
        .map(|name| {
            let value = fold(name);
            pb.inc(1);
            value
        })
        .collect();
    pb.finish_and_clear();
    folded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_folds() {
        assert_eq!(selected_folds(VariantSet::Accent).len(), 1);
        assert_eq!(selected_folds(VariantSet::Phonetic).len(), 1);
        assert_eq!(selected_folds(VariantSet::Both).len(), 2);
    }

    #[test]
    fn test_fold_column_keeps_row_order() {
        let names: Vec<String> = ["Léa", "Sophie", "Paul"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let folded = fold_column(&names, fold_phonetic);
        assert_eq!(folded, vec!["lea", "sofi", "paul"]);
    }
}
