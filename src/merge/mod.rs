//! Merging the exhibitor feed into the hall skeleton.
//!
//! - [`aggregator`] - classifies one row and folds it into the in-progress
//!   hall collection
//! - [`pipeline`] - whole-document orchestration and the skeleton fallback

pub mod aggregator;
pub mod pipeline;

pub use aggregator::apply_row;
pub use pipeline::{merge_document, merge_or_fallback, MergeOutcome};
