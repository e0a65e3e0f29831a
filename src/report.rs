//! Grouping statistics for folded name columns.
//!
//! Folding is useful exactly in proportion to how many spelling variants it
//! collapses together. This module measures that: distinct originals vs
//! distinct folded values, and a diagnostic sample of pairs where folding
//! actually changed something.

use serde::Serialize;
use std::collections::HashSet;

/// Distinct-value counts for one folded column, relative to the originals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupingStats {
    pub distinct_original: usize,
    pub distinct_normalized: usize,
    /// How many original spellings collapsed into another group.
    pub reduction: usize,
}

/// A folded name shown next to its original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldedPair {
    pub original: String,
    pub folded: String,
}

/// Count distinct values on both sides of an index-aligned fold.
///
/// Folding maps each original to exactly one folded value, so the folded
/// side can never have more distinct values than the original side.
pub fn compute_reduction(originals: &[String], normalized: &[String]) -> GroupingStats {
    let distinct_original = distinct_count(originals);
    let distinct_normalized = distinct_count(normalized);
    GroupingStats {
        distinct_original,
        distinct_normalized,
        reduction: distinct_original.saturating_sub(distinct_normalized),
    }
}

fn distinct_count(values: &[String]) -> usize {
    values.iter().map(String::as_str).collect::<HashSet<_>>().len()
}

/// Sample up to `max` distinct (original, folded) pairs where the lowercased
/// original differs from its folded form. First-seen order is kept so the
/// sample is stable across runs.
pub fn sample_divergent_pairs(
    originals: &[String],
    normalized: &[String],
    max: usize,
) -> Vec<FoldedPair> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut sample = Vec::new();
    for (original, folded) in originals.iter().zip(normalized) {
        if sample.len() >= max {
            break;
        }
        if original.to_lowercase() == *folded {
            continue;
        }
        if seen.insert((original.as_str(), folded.as_str())) {
            sample.push(FoldedPair {
                original: original.clone(),
                folded: folded.clone(),
            });
        }
    }
    sample
}
