//! Response models for the dataset search endpoint.
//!
//! Every field is defaulted: the page must render a partial response as
//! empty data, never crash on it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter_state::FacetCategory;
use crate::search_const::PAGE_SIZE;

/// Metadata label looked up for the geography shown on cards.
pub const GEOGRAPHY_LABEL: &str = "Geography";
/// Metadata label looked up for the dataset creation date.
pub const CREATION_DATE_LABEL: &str = "Date of Creation of Dataset";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataLabel {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataEntry {
    pub metadata_item: MetadataLabel,
    pub value: String,
}

/// One dataset as served by the search API. Read-only to this system.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created: String,
    pub modified: String,
    pub download_count: u64,
    pub has_charts: bool,
    pub sectors: Vec<String>,
    pub formats: Vec<String>,
    pub tags: Vec<String>,
    pub organization: Organization,
    pub metadata: Vec<MetadataEntry>,
}

impl Dataset {
    /// Linear label match over the extensible metadata list. First match
    /// wins; duplicate labels have no defined tie-break beyond that.
    pub fn metadata_value(&self, label: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|entry| entry.metadata_item.label == label)
            .map(|entry| entry.value.as_str())
    }

    pub fn geography(&self) -> &str {
        self.metadata_value(GEOGRAPHY_LABEL).unwrap_or("Global")
    }

    /// The curated creation date when present, the record timestamp
    /// otherwise.
    pub fn creation_date(&self) -> &str {
        self.metadata_value(CREATION_DATE_LABEL)
            .unwrap_or(&self.created)
    }
}

/// Matching-dataset counts per facet value, scoped to the query that
/// produced them. These feed the sidebar option lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Aggregations {
    #[serde(rename = "Geography")]
    pub geography: BTreeMap<String, u64>,
    pub sectors: BTreeMap<String, u64>,
    pub tags: BTreeMap<String, u64>,
    pub formats: BTreeMap<String, u64>,
}

impl Aggregations {
    pub fn options(&self, category: FacetCategory) -> &BTreeMap<String, u64> {
        match category {
            FacetCategory::Sectors => &self.sectors,
            FacetCategory::Geography => &self.geography,
            FacetCategory::Tags => &self.tags,
            FacetCategory::Formats => &self.formats,
        }
    }
}

/// One page of search results plus the total count and facet aggregations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub results: Vec<Dataset>,
    pub total: u64,
    pub aggregations: Aggregations,
}

/// Pages needed to show `total` results at the fixed page size.
pub fn total_pages(total: u64) -> u64 {
    total.div_ceil(PAGE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_decodes_to_defaults() {
        let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total, 0);
        assert_eq!(response.aggregations, Aggregations::default());
    }

    #[test]
    fn missing_results_field_is_zero_datasets_not_an_error() {
        let response: SearchResponse = serde_json::from_value(json!({
            "total": 12,
            "aggregations": { "sectors": { "Climate": 12 } },
        }))
        .unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.total, 12);
        assert_eq!(response.aggregations.sectors.get("Climate"), Some(&12));
    }

    #[test]
    fn geography_aggregation_uses_the_capitalized_json_key() {
        let response: SearchResponse = serde_json::from_value(json!({
            "aggregations": { "Geography": { "India": 3 }, "tags": { "water": 1 } },
        }))
        .unwrap();
        assert_eq!(response.aggregations.geography.get("India"), Some(&3));
        assert_eq!(
            response
                .aggregations
                .options(FacetCategory::Geography)
                .get("India"),
            Some(&3)
        );
    }

    #[test]
    fn partial_dataset_decodes_with_defaults() {
        let dataset: Dataset = serde_json::from_value(json!({
            "id": "ds-1",
            "title": "Rainfall 2020",
        }))
        .unwrap();
        assert_eq!(dataset.title, "Rainfall 2020");
        assert_eq!(dataset.download_count, 0);
        assert!(dataset.tags.is_empty());
        assert_eq!(dataset.organization, Organization::default());
    }

    #[test]
    fn metadata_lookup_takes_the_first_matching_label() {
        let dataset: Dataset = serde_json::from_value(json!({
            "created": "2020-01-01",
            "metadata": [
                { "metadata_item": { "label": "Geography" }, "value": "India, Nepal" },
                { "metadata_item": { "label": "Geography" }, "value": "Bhutan" },
                { "metadata_item": { "label": "Date of Creation of Dataset" }, "value": "2019-05-01" },
            ],
        }))
        .unwrap();
        assert_eq!(dataset.geography(), "India, Nepal");
        assert_eq!(dataset.creation_date(), "2019-05-01");
    }

    #[test]
    fn metadata_fallbacks_apply_when_labels_are_absent() {
        let dataset: Dataset = serde_json::from_value(json!({
            "created": "2020-01-01",
        }))
        .unwrap();
        assert_eq!(dataset.geography(), "Global");
        assert_eq!(dataset.creation_date(), "2020-01-01");
    }

    #[test]
    fn total_pages_rounds_up_at_the_fixed_page_size() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(9), 1);
        assert_eq!(total_pages(10), 2);
        assert_eq!(total_pages(100), 12);
    }
}
