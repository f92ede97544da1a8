//! Domain models for the exhibition floor plan.
//!
//! This module contains the data structures the rest of the crate produces
//! and the UI layer consumes:
//!
//! - [`Hall`] - a fixed exhibition space from the venue skeleton
//! - [`Brand`] - one exhibitor's booth presence within a hall
//! - [`VehicleEntry`] - a vehicle shown at a booth (highlighted or regular)
//! - [`Category`] - the row-classification tag governing how a CSV row merges

use serde::{Deserialize, Serialize};

// =============================================================================
// Hall
// =============================================================================

/// A fixed exhibition hall.
///
/// Halls come from the static venue skeleton; the parser never adds or
/// removes halls, it only rebuilds each hall's `brands` list per parse run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hall {
    /// Stable unique identifier.
    pub id: String,
    /// Human-facing hall code (e.g. "17.2"); the join key against CSV rows.
    pub code: String,
    /// Floor the hall sits on.
    pub floor: u8,
    /// Descriptive hall type (e.g. "passenger", "new-energy").
    #[serde(rename = "type")]
    pub hall_type: String,
    /// Exhibitors, in first-seen order of the source rows.
    #[serde(default)]
    pub brands: Vec<Brand>,
}

impl Hall {
    /// Create a hall with no exhibitors.
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        floor: u8,
        hall_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            floor,
            hall_type: hall_type.into(),
            brands: Vec::new(),
        }
    }
}

// =============================================================================
// Brand
// =============================================================================

/// One exhibitor's booth within a hall.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Composite key `"{hall_code}-{booth}"`, unique across the whole
    /// parsed collection; the deduplication key across rows.
    pub id: String,
    /// Raw booth code as given in the feed.
    pub booth: String,
    /// Display name, set by whichever row first establishes the brand.
    pub name: String,
    /// Free-text note from an Info row; last write wins.
    #[serde(default)]
    pub description: String,
    /// Highlighted vehicles, one per Key row, in row order.
    #[serde(default)]
    pub models: Vec<VehicleEntry>,
    /// All other vehicles, one per Normal row, in row order.
    #[serde(default)]
    pub full_model_list: Vec<VehicleEntry>,
}

impl Brand {
    /// Build the composite identity for a hall/booth pair.
    pub fn composite_id(hall_code: &str, booth: &str) -> String {
        format!("{hall_code}-{booth}")
    }

    /// Create a brand freshly sighted in a hall.
    pub fn new(hall_code: &str, booth: impl Into<String>, name: impl Into<String>) -> Self {
        let booth = booth.into();
        Self {
            id: Self::composite_id(hall_code, &booth),
            booth,
            name: name.into(),
            description: String::new(),
            models: Vec::new(),
            full_model_list: Vec::new(),
        }
    }
}

// =============================================================================
// VehicleEntry
// =============================================================================

/// A vehicle shown at a booth.
///
/// `is_new_launch` is structural: it records whether the entry came from a
/// Key row, so it can only be set through [`VehicleEntry::key`] or
/// [`VehicleEntry::normal`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleEntry {
    /// Model name. Rows without one contribute no entry.
    pub name: String,
    /// Short tag such as "首发" (debut) or "换代" (redesign); empty if absent.
    #[serde(default)]
    pub highlight: String,
    /// True for entries originating from a Key row.
    pub is_new_launch: bool,
    /// Free-text annotation from the row's trailing field.
    #[serde(default)]
    pub note: String,
}

impl VehicleEntry {
    /// Entry from a Key row (highlighted / new launch).
    pub fn key(name: impl Into<String>, highlight: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            highlight: highlight.into(),
            is_new_launch: true,
            note: note.into(),
        }
    }

    /// Entry from a Normal row.
    pub fn normal(name: impl Into<String>, highlight: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            highlight: highlight.into(),
            is_new_launch: false,
            note: note.into(),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// Row classification tag from the feed's category column.
///
/// Matching is case-sensitive and exact; anything else is [`Category::Unknown`],
/// which still joins/creates the brand but contributes no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Sets the brand description (last write wins).
    Info,
    /// Appends a highlighted vehicle to `models`.
    Key,
    /// Appends a regular vehicle to `full_model_list`.
    Normal,
    /// Tolerated no-op classification.
    Unknown,
}

impl Category {
    /// Classify the raw category field.
    pub fn from_field(field: &str) -> Self {
        match field {
            "Info" => Self::Info,
            "Key" => Self::Key,
            "Normal" => Self::Normal,
            _ => Self::Unknown,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_id() {
        assert_eq!(Brand::composite_id("17.2", "A01"), "17.2-A01");
        let brand = Brand::new("17.2", "A01", "Acme Motors");
        assert_eq!(brand.id, "17.2-A01");
        assert_eq!(brand.booth, "A01");
        assert!(brand.description.is_empty());
        assert!(brand.models.is_empty());
    }

    #[test]
    fn test_category_is_case_sensitive() {
        assert_eq!(Category::from_field("Info"), Category::Info);
        assert_eq!(Category::from_field("Key"), Category::Key);
        assert_eq!(Category::from_field("Normal"), Category::Normal);
        assert_eq!(Category::from_field("info"), Category::Unknown);
        assert_eq!(Category::from_field("KEY"), Category::Unknown);
        assert_eq!(Category::from_field(""), Category::Unknown);
    }

    #[test]
    fn test_vehicle_entry_constructors() {
        let key = VehicleEntry::key("Model X", "首发", "hall debut");
        assert!(key.is_new_launch);
        let normal = VehicleEntry::normal("Model Y", "", "");
        assert!(!normal.is_new_launch);
        assert!(normal.highlight.is_empty());
    }

    #[test]
    fn test_hall_serialization_uses_type_key() {
        let hall = Hall::new("h-17-2", "17.2", 2, "passenger");
        let json = serde_json::to_string(&hall).unwrap();
        assert!(json.contains("\"type\":\"passenger\""));
        assert!(json.contains("\"17.2\""));
    }

    #[test]
    fn test_vehicle_entry_serialization_camel_case() {
        let entry = VehicleEntry::key("Model X", "新车", "");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"isNewLaunch\":true"));
    }
}
