//! # Expomap - exhibition floor-plan data core
//!
//! Expomap merges an exhibitor CSV feed into a static hall skeleton and
//! publishes the result as one immutable snapshot for the map UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Feed (CSV) │────▶│  Tokenizer  │────▶│  Aggregator │────▶│  Hall       │
//! │  fetched    │     │  (quotes,   │     │  (classify, │     │  collection │
//! │  at startup │     │   encoding) │     │   dedup)    │     │  (snapshot) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! Any failure along the way degrades to the untouched skeleton: the UI
//! always receives a valid, renderable hall collection.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use expomap::{load_catalog, skeleton, MapState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let skel = skeleton::default_halls();
//!     let outcome = load_catalog("https://example.com/exhibitors.csv", &skel).await;
//!     let state = MapState::new(outcome.into_halls());
//!     println!("{} halls", state.halls().len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - error types and result aliases
//! - [`models`] - domain types (Hall, Brand, VehicleEntry, Category)
//! - [`skeleton`] - the static hall layout and JSON layout files
//! - [`parser`] - quote-aware row tokenizer and encoding handling
//! - [`merge`] - row aggregation and the document pipeline
//! - [`fetch`] - async feed retrieval with skeleton fallback
//! - [`state`] - the published snapshot: lookup, selection, search
//! - [`logs`] - diagnostic log bus

// Core modules
pub mod error;
pub mod models;

// Static layout
pub mod skeleton;

// Parsing
pub mod parser;

// Aggregation
pub mod merge;

// Feed retrieval
pub mod fetch;

// Published snapshot
pub mod state;

// Diagnostics
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{FetchError, MergeError, SkeletonError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Brand, Category, Hall, VehicleEntry};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{decode_bytes, decode_content, detect_encoding, split_fields};

// =============================================================================
// Re-exports - Merge pipeline
// =============================================================================

pub use merge::{apply_row, merge_document, merge_or_fallback, MergeOutcome};

// =============================================================================
// Re-exports - Fetch
// =============================================================================

pub use fetch::load_catalog;

// =============================================================================
// Re-exports - State
// =============================================================================

pub use state::{MapState, SearchHit, Selection};
