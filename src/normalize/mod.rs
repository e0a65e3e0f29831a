//! Name folding functions for grouping spelling variants.
//!
//! Two folding levels are provided, both pure and total:
//! - **fold_accents**: lowercases, trims, and maps accented letters to their
//!   base letter. "Léa" and "Lea" fold to the same string.
//! - **fold_phonetic**: applies accent folding, then a fixed ordered chain of
//!   French phonetic reductions. "Sophie" and "Sofie" fold to "sofi".
//!
//! The phonetic chain is aggressive by design: it exists to group rows for
//! aggregation, not to produce a display form.

pub mod accent;
pub mod phonetic;

pub use accent::fold_accents;
pub use phonetic::fold_phonetic;
