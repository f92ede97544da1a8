//! Whole-document merge pipeline.
//!
//! Takes the raw feed text and the static hall skeleton and produces the
//! finished hall collection. Document-level failures resolve to the
//! untouched skeleton; the [`MergeOutcome`] enum keeps the distinction
//! visible to tests and diagnostics while consumers only ever see halls.

use crate::error::{MergeError, MergeResult};
use crate::logs::{log_success, log_warning};
use crate::merge::aggregator::{apply_row, BrandIndex};
use crate::models::Hall;
use crate::parser::split_fields;

/// Outcome of loading the exhibitor feed.
///
/// Both variants carry a complete, renderable hall collection; `FellBack`
/// means the feed could not be used and the halls are the bare skeleton.
#[derive(Debug, Clone, PartialEq)]
pub enum MergeOutcome {
    /// The feed parsed; halls carry the merged exhibitor data.
    Parsed(Vec<Hall>),
    /// The feed was unusable; halls are the unmodified skeleton.
    FellBack { halls: Vec<Hall>, reason: String },
}

impl MergeOutcome {
    /// The hall collection, regardless of how it was produced.
    pub fn halls(&self) -> &[Hall] {
        match self {
            Self::Parsed(halls) => halls,
            Self::FellBack { halls, .. } => halls,
        }
    }

    /// Consume the outcome, keeping only the halls.
    pub fn into_halls(self) -> Vec<Hall> {
        match self {
            Self::Parsed(halls) => halls,
            Self::FellBack { halls, .. } => halls,
        }
    }

    /// Whether the skeleton fallback was taken.
    pub fn fell_back(&self) -> bool {
        matches!(self, Self::FellBack { .. })
    }
}

/// Merge a raw feed document into a fresh copy of the skeleton.
///
/// The first line is the header and is discarded without inspection. Blank
/// lines and rows with fewer than three fields are skipped. Every hall's
/// brand list starts empty: skeleton brand data, if any, is discarded, not
/// merged. Halls are never added or removed.
pub fn merge_document(text: &str, skeleton: &[Hall]) -> MergeResult<Vec<Hall>> {
    let mut lines = text.lines();
    if lines.next().is_none() {
        return Err(MergeError::EmptyDocument);
    }

    let mut halls: Vec<Hall> = skeleton
        .iter()
        .map(|hall| Hall { brands: Vec::new(), ..hall.clone() })
        .collect();
    let mut index = BrandIndex::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_fields(line);
        apply_row(&fields, &mut halls, &mut index);
    }

    log_success(format!(
        "merged {} exhibitors across {} halls",
        index.len(),
        halls.len()
    ));

    Ok(halls)
}

/// Merge, falling back to the untouched skeleton on any document-level
/// failure. This is the all-or-nothing contract the UI relies on: it always
/// receives a valid hall collection, never a partially mutated one.
pub fn merge_or_fallback(text: &str, skeleton: &[Hall]) -> MergeOutcome {
    match merge_document(text, skeleton) {
        Ok(halls) => MergeOutcome::Parsed(halls),
        Err(err) => {
            log_warning(format!("feed unusable, showing bare floor plan: {err}"));
            MergeOutcome::FellBack {
                halls: skeleton.to_vec(),
                reason: err.to_string(),
            }
        }
    }
}
