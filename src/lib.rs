pub mod dataset;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod report;

pub use dataset::Dataset;
pub use error::{NormalizeError, NormalizeResult};
pub use normalize::{fold_accents, fold_phonetic};
pub use pipeline::{run, GeoFilter, PipelineOptions, RunSummary, VariantSet};
pub use report::{compute_reduction, sample_divergent_pairs, FoldedPair, GroupingStats};
