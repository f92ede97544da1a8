//! Fold one classified feed row into the in-progress hall collection.
//!
//! Field positions are fixed: `hall, booth, brand name, category, model,
//! tag, note`. Trailing fields may be absent and read as empty. Rows that
//! cannot be joined (too few fields, unknown hall code) are silently
//! dropped; that is the crate's row-level error policy, not an oversight.

use std::collections::HashMap;

use crate::models::{Brand, Category, Hall, VehicleEntry};

// Positional field indices in a feed row.
const HALL: usize = 0;
const BOOTH: usize = 1;
const NAME: usize = 2;
const CATEGORY: usize = 3;
const MODEL: usize = 4;
const TAG: usize = 5;
const NOTE: usize = 6;

/// Lookup from composite brand id to `(hall index, brand index)`, local to
/// one parse run.
pub type BrandIndex = HashMap<String, (usize, usize)>;

/// Apply one tokenized row to the hall collection.
///
/// Creates the brand lazily on first sight of its composite id and attaches
/// it to the resolved hall immediately, so brands keep first-seen order.
/// Returns without touching anything when the row is too short or its hall
/// code matches no hall.
pub fn apply_row(fields: &[String], halls: &mut [Hall], index: &mut BrandIndex) {
    if fields.len() < 3 {
        return;
    }

    let hall_code = field(fields, HALL);
    let Some(hall_idx) = halls.iter().position(|h| h.code == hall_code) else {
        return;
    };

    let booth = field(fields, BOOTH);
    let brand_id = Brand::composite_id(hall_code, booth);

    let (hall_idx, brand_idx) = *index.entry(brand_id).or_insert_with(|| {
        let brand = Brand::new(hall_code, booth, field(fields, NAME));
        halls[hall_idx].brands.push(brand);
        (hall_idx, halls[hall_idx].brands.len() - 1)
    });
    let brand = &mut halls[hall_idx].brands[brand_idx];

    let model = field(fields, MODEL);
    let tag = field(fields, TAG);
    let note = field(fields, NOTE);

    match Category::from_field(field(fields, CATEGORY)) {
        Category::Info => {
            if !note.is_empty() {
                brand.description = note.to_string();
            }
        }
        Category::Key => {
            if !model.is_empty() {
                brand.models.push(VehicleEntry::key(model, tag, note));
            }
        }
        Category::Normal => {
            if !model.is_empty() {
                brand.full_model_list.push(VehicleEntry::normal(model, tag, note));
            }
        }
        // Unknown categories still establish the brand, nothing more.
        Category::Unknown => {}
    }
}

/// Read a positional field, treating absent trailing fields as empty.
fn field(fields: &[String], idx: usize) -> &str {
    fields.get(idx).map(String::as_str).unwrap_or("")
}
