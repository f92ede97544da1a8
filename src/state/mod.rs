//! Published map state: the snapshot the UI collaborators consume.
//!
//! Holds the finished hall collection plus the lookup, selection, and search
//! surface the renderer, side panel, and search overlay need. The snapshot
//! is replaced wholesale when a new parse completes; nothing survives across
//! replacements.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Brand, Hall};

/// A user selection event, as emitted by the map and panel collaborators.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Selection {
    /// A hall was selected on the map.
    Hall { hall: String },
    /// A brand was selected in the hall panel.
    Brand { hall: String, brand: String },
}

/// One result from an exhibitor name search.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub hall_id: String,
    pub hall_code: String,
    pub brand_id: String,
    pub brand_name: String,
}

/// The application's single in-memory snapshot of the floor plan.
pub struct MapState {
    halls: Vec<Hall>,
    hall_index: HashMap<String, usize>,
    brand_index: HashMap<String, (usize, usize)>,
    selection: Option<Selection>,
}

impl MapState {
    /// Take ownership of a finished hall collection and index it.
    pub fn new(halls: Vec<Hall>) -> Self {
        let mut state = Self {
            halls,
            hall_index: HashMap::new(),
            brand_index: HashMap::new(),
            selection: None,
        };
        state.rebuild_index();
        state
    }

    /// Replace the snapshot wholesale (a new parse completed).
    pub fn replace(&mut self, halls: Vec<Hall>) {
        self.halls = halls;
        self.selection = None;
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.hall_index.clear();
        self.brand_index.clear();
        for (h, hall) in self.halls.iter().enumerate() {
            self.hall_index.insert(hall.id.clone(), h);
            for (b, brand) in hall.brands.iter().enumerate() {
                self.brand_index.insert(brand.id.clone(), (h, b));
            }
        }
    }

    /// All halls, in skeleton order.
    pub fn halls(&self) -> &[Hall] {
        &self.halls
    }

    /// Look up a hall by id.
    pub fn hall(&self, hall_id: &str) -> Option<&Hall> {
        self.hall_index.get(hall_id).map(|&h| &self.halls[h])
    }

    /// Look up a brand by composite id, with its hall.
    pub fn brand(&self, brand_id: &str) -> Option<(&Hall, &Brand)> {
        self.brand_index.get(brand_id).map(|&(h, b)| {
            let hall = &self.halls[h];
            (hall, &hall.brands[b])
        })
    }

    /// Record a hall selection; returns the event if the hall exists.
    pub fn select_hall(&mut self, hall_id: &str) -> Option<Selection> {
        self.hall(hall_id)?;
        let event = Selection::Hall { hall: hall_id.to_string() };
        self.selection = Some(event.clone());
        Some(event)
    }

    /// Record a brand selection; returns the event if the brand exists.
    pub fn select_brand(&mut self, brand_id: &str) -> Option<Selection> {
        let (hall, _) = self.brand(brand_id)?;
        let event = Selection::Brand {
            hall: hall.id.clone(),
            brand: brand_id.to_string(),
        };
        self.selection = Some(event.clone());
        Some(event)
    }

    /// The current selection, if any.
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Clear the current selection (panel closed).
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Case-insensitive substring search over exhibitor names, in hall order
    /// then brand first-seen order. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits = Vec::new();
        for hall in &self.halls {
            for brand in &hall.brands {
                if brand.name.to_lowercase().contains(&needle) {
                    hits.push(SearchHit {
                        hall_id: hall.id.clone(),
                        hall_code: hall.code.clone(),
                        brand_id: brand.id.clone(),
                        brand_name: brand.name.clone(),
                    });
                }
            }
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Brand;

    fn populated() -> MapState {
        let mut hall_a = Hall::new("h-17-2", "17.2", 2, "passenger");
        hall_a.brands.push(Brand::new("17.2", "A01", "Acme Motors"));
        hall_a.brands.push(Brand::new("17.2", "B02", "Beta Auto"));
        let mut hall_b = Hall::new("h-20-1", "20.1", 1, "new-energy");
        hall_b.brands.push(Brand::new("20.1", "C11", "Gamma EV"));
        MapState::new(vec![hall_a, hall_b])
    }

    #[test]
    fn test_hall_and_brand_lookup() {
        let state = populated();

        assert_eq!(state.hall("h-17-2").unwrap().code, "17.2");
        assert!(state.hall("h-99").is_none());

        let (hall, brand) = state.brand("20.1-C11").unwrap();
        assert_eq!(hall.id, "h-20-1");
        assert_eq!(brand.name, "Gamma EV");
        assert!(state.brand("17.2-Z99").is_none());
    }

    #[test]
    fn test_selection_events() {
        let mut state = populated();

        let event = state.select_hall("h-17-2").unwrap();
        assert_eq!(event, Selection::Hall { hall: "h-17-2".into() });

        let event = state.select_brand("17.2-B02").unwrap();
        assert_eq!(
            event,
            Selection::Brand { hall: "h-17-2".into(), brand: "17.2-B02".into() }
        );
        assert_eq!(state.selection(), Some(&event));

        assert!(state.select_hall("h-99").is_none());
        // A failed selection does not clobber the current one.
        assert!(state.selection().is_some());

        state.clear_selection();
        assert!(state.selection().is_none());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let state = populated();

        let hits = state.search("acme");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].brand_id, "17.2-A01");
        assert_eq!(hits[0].hall_code, "17.2");

        let hits = state.search("a");
        assert_eq!(hits.len(), 3);

        assert!(state.search("").is_empty());
        assert!(state.search("   ").is_empty());
        assert!(state.search("zeppelin").is_empty());
    }

    #[test]
    fn test_replace_rebuilds_index_and_clears_selection() {
        let mut state = populated();
        state.select_hall("h-17-2").unwrap();

        state.replace(vec![Hall::new("h-5-1", "5.1", 1, "commercial")]);

        assert!(state.selection().is_none());
        assert!(state.hall("h-17-2").is_none());
        assert!(state.hall("h-5-1").is_some());
        assert!(state.brand("17.2-A01").is_none());
    }
}
