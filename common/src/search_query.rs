//! The search state owned by the listing page and its request serialization.

use serde::{Deserialize, Serialize};

use crate::filter_state::{FacetCategory, FilterState};
use crate::search_const::PAGE_SIZE;

/// Sort order offered by the search API. Direction is always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Recent,
    Alphabetical,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Recent => "recent",
            SortKey::Alphabetical => "alphabetical",
        }
    }

    /// Parse the wire value; unknown strings fall back to `Recent`.
    pub fn parse(value: &str) -> Self {
        match value {
            "alphabetical" => SortKey::Alphabetical,
            _ => SortKey::Recent,
        }
    }
}

/// Free-text query, facet selections, sort order, and current page.
///
/// Every mutation that changes which datasets match (text, facets, sort)
/// resets the page to 1 so a narrower result set is never asked for an
/// out-of-range page. `set_page` alone leaves the rest of the state as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub query_string: String,
    pub filters: FilterState,
    pub sort: SortKey,
    /// 1-based page number.
    pub page: u64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery {
            query_string: String::new(),
            filters: FilterState::default(),
            sort: SortKey::Recent,
            page: 1,
        }
    }
}

impl SearchQuery {
    pub fn set_query_string(&mut self, text: String) {
        if self.query_string == text {
            return;
        }
        self.query_string = text;
        self.page = 1;
    }

    pub fn toggle_facet(&mut self, category: FacetCategory, value: &str) {
        self.filters.toggle(category, value);
        self.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if self.sort == sort {
            return;
        }
        self.sort = sort;
        self.page = 1;
    }

    /// Change only the page. Page numbers below 1 are clamped; clamping
    /// against the last page is the caller's job since the total count
    /// lives with the fetched results.
    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// Canonical request parameters for the current state.
    ///
    /// Empty sources are omitted entirely: no empty-string `query`, no
    /// empty facet lists. Facet values serialize as one comma-joined
    /// parameter per category. The output is deterministic for identical
    /// input (facet sets iterate in order).
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.query_string.is_empty() {
            pairs.push(("query", self.query_string.clone()));
        }
        for category in FacetCategory::ALL {
            let selected = self.filters.selected(category);
            if !selected.is_empty() {
                let joined = selected.iter().cloned().collect::<Vec<_>>().join(",");
                pairs.push((category.query_param(), joined));
            }
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("size", PAGE_SIZE.to_string()));
        pairs.push(("sort", self.sort.as_str().to_string()));
        pairs.push(("order", "desc".to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair<'a>(pairs: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn default_query_serializes_only_the_fixed_parameters() {
        let pairs = SearchQuery::default().to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page", "1".to_string()),
                ("size", "9".to_string()),
                ("sort", "recent".to_string()),
                ("order", "desc".to_string()),
            ]
        );
    }

    #[test]
    fn empty_sources_never_serialize_as_empty_parameters() {
        let mut query = SearchQuery::default();
        query.set_query_string("".to_string());
        let pairs = query.to_query_pairs();
        for (_, value) in &pairs {
            assert!(!value.is_empty());
        }
        assert!(pair(&pairs, "query").is_none());
        assert!(pair(&pairs, "sectors").is_none());
        assert!(pair(&pairs, "Geography").is_none());
        assert!(pair(&pairs, "tags").is_none());
        assert!(pair(&pairs, "formats").is_none());
    }

    #[test]
    fn facets_join_with_commas_under_their_wire_names() {
        let mut query = SearchQuery::default();
        query.toggle_facet(FacetCategory::Geography, "India");
        query.toggle_facet(FacetCategory::Geography, "Bhutan");
        query.toggle_facet(FacetCategory::Formats, "CSV");
        query.set_query_string("rainfall".to_string());

        let pairs = query.to_query_pairs();
        assert_eq!(pair(&pairs, "query"), Some("rainfall"));
        // BTreeSet order, capitalized Geography parameter.
        assert_eq!(pair(&pairs, "Geography"), Some("Bhutan,India"));
        assert_eq!(pair(&pairs, "formats"), Some("CSV"));
        assert_eq!(pair(&pairs, "geography"), None);
    }

    #[test]
    fn serialization_is_deterministic() {
        let mut query = SearchQuery::default();
        query.toggle_facet(FacetCategory::Tags, "census");
        query.toggle_facet(FacetCategory::Tags, "budget");
        query.set_query_string("spend".to_string());
        assert_eq!(query.to_query_pairs(), query.to_query_pairs());
    }

    #[test]
    fn matching_mutations_reset_the_page() {
        let mut query = SearchQuery::default();
        query.set_page(4);

        query.set_query_string("water".to_string());
        assert_eq!(query.page, 1);

        query.set_page(4);
        query.toggle_facet(FacetCategory::Sectors, "Climate");
        assert_eq!(query.page, 1);

        query.set_page(4);
        query.set_sort(SortKey::Alphabetical);
        assert_eq!(query.page, 1);

        query.set_page(4);
        query.reset_filters();
        assert_eq!(query.page, 1);
    }

    #[test]
    fn set_page_changes_nothing_else() {
        let mut query = SearchQuery::default();
        query.set_query_string("roads".to_string());
        query.toggle_facet(FacetCategory::Tags, "transport");
        let before = query.clone();

        query.set_page(3);
        assert_eq!(query.page, 3);
        assert_eq!(query.query_string, before.query_string);
        assert_eq!(query.filters, before.filters);
        assert_eq!(query.sort, before.sort);

        query.set_page(0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn unchanged_text_or_sort_keeps_the_current_page() {
        let mut query = SearchQuery::default();
        query.set_query_string("forest".to_string());
        query.set_page(5);

        query.set_query_string("forest".to_string());
        assert_eq!(query.page, 5);
        query.set_sort(SortKey::Recent);
        assert_eq!(query.page, 5);
    }
}
