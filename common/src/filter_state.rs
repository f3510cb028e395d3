//! Active facet selections and the operations that mutate them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A filterable facet of the dataset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FacetCategory {
    Sectors,
    Geography,
    Tags,
    Formats,
}

impl FacetCategory {
    /// Serialization order of the facet query parameters.
    pub const ALL: [FacetCategory; 4] = [
        FacetCategory::Sectors,
        FacetCategory::Geography,
        FacetCategory::Tags,
        FacetCategory::Formats,
    ];

    /// Query parameter name used by the search API. Geography is the one
    /// capitalized parameter, as served by the remote endpoint.
    pub fn query_param(self) -> &'static str {
        match self {
            FacetCategory::Sectors => "sectors",
            FacetCategory::Geography => "Geography",
            FacetCategory::Tags => "tags",
            FacetCategory::Formats => "formats",
        }
    }

    /// Heading shown for this category in the sidebar and on chips.
    pub fn label(self) -> &'static str {
        match self {
            FacetCategory::Sectors => "Sectors",
            FacetCategory::Geography => "Geographies",
            FacetCategory::Tags => "Tags",
            FacetCategory::Formats => "Formats",
        }
    }
}

/// One removable token representing a single active facet selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub category: FacetCategory,
    pub value: String,
}

/// Selected facet values per category. Values are unique per category and
/// unordered; any string may be selected, including values no longer
/// offered by the current aggregation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub sectors: BTreeSet<String>,
    pub geography: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub formats: BTreeSet<String>,
}

impl FilterState {
    pub fn selected(&self, category: FacetCategory) -> &BTreeSet<String> {
        match category {
            FacetCategory::Sectors => &self.sectors,
            FacetCategory::Geography => &self.geography,
            FacetCategory::Tags => &self.tags,
            FacetCategory::Formats => &self.formats,
        }
    }

    fn selected_mut(&mut self, category: FacetCategory) -> &mut BTreeSet<String> {
        match category {
            FacetCategory::Sectors => &mut self.sectors,
            FacetCategory::Geography => &mut self.geography,
            FacetCategory::Tags => &mut self.tags,
            FacetCategory::Formats => &mut self.formats,
        }
    }

    pub fn is_selected(&self, category: FacetCategory, value: &str) -> bool {
        self.selected(category).contains(value)
    }

    /// Flip membership of `value` in `category`. Returns `true` when the
    /// value is selected after the call.
    pub fn toggle(&mut self, category: FacetCategory, value: &str) -> bool {
        let values = self.selected_mut(category);
        if values.remove(value) {
            false
        } else {
            values.insert(value.to_string());
            true
        }
    }

    /// Drop every selection in every category.
    pub fn clear(&mut self) {
        for category in FacetCategory::ALL {
            self.selected_mut(category).clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        FacetCategory::ALL
            .iter()
            .all(|category| self.selected(*category).is_empty())
    }

    /// One chip per selected value, grouped by category in `ALL` order.
    pub fn chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        for category in FacetCategory::ALL {
            for value in self.selected(category) {
                chips.push(FilterChip {
                    category,
                    value: value.clone(),
                });
            }
        }
        chips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_original_selection() {
        let mut filters = FilterState::default();
        filters.toggle(FacetCategory::Tags, "health");
        let before = filters.clone();

        assert!(filters.toggle(FacetCategory::Sectors, "Urban Development"));
        assert!(!filters.toggle(FacetCategory::Sectors, "Urban Development"));
        assert_eq!(filters, before);
    }

    #[test]
    fn toggle_accepts_values_not_offered_by_any_aggregation() {
        let mut filters = FilterState::default();
        assert!(filters.toggle(FacetCategory::Geography, "Atlantis"));
        assert!(filters.is_selected(FacetCategory::Geography, "Atlantis"));
    }

    #[test]
    fn clear_empties_every_category() {
        let mut filters = FilterState::default();
        filters.toggle(FacetCategory::Sectors, "Climate");
        filters.toggle(FacetCategory::Geography, "India");
        filters.toggle(FacetCategory::Formats, "CSV");
        assert!(!filters.is_empty());

        filters.clear();
        assert!(filters.is_empty());
        assert!(filters.chips().is_empty());
    }

    #[test]
    fn chips_cover_every_selection_in_category_order() {
        let mut filters = FilterState::default();
        filters.toggle(FacetCategory::Tags, "water");
        filters.toggle(FacetCategory::Sectors, "Climate");
        filters.toggle(FacetCategory::Tags, "air");

        let chips = filters.chips();
        assert_eq!(
            chips,
            vec![
                FilterChip {
                    category: FacetCategory::Sectors,
                    value: "Climate".into()
                },
                FilterChip {
                    category: FacetCategory::Tags,
                    value: "air".into()
                },
                FilterChip {
                    category: FacetCategory::Tags,
                    value: "water".into()
                },
            ]
        );
    }

    #[test]
    fn removing_a_chip_equals_unchecking_the_checkbox() {
        let mut via_chip = FilterState::default();
        via_chip.toggle(FacetCategory::Formats, "CSV");
        via_chip.toggle(FacetCategory::Formats, "PDF");

        let mut via_checkbox = via_chip.clone();

        // The chip's remove action and the sidebar checkbox both flow
        // through toggle, so the resulting states are identical.
        let chip = via_chip
            .chips()
            .into_iter()
            .find(|chip| chip.value == "CSV")
            .unwrap();
        via_chip.toggle(chip.category, &chip.value);
        via_checkbox.toggle(FacetCategory::Formats, "CSV");

        assert_eq!(via_chip, via_checkbox);
    }
}
