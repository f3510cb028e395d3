//! Shared state handed to the listing page components via context.

use dioxus::prelude::*;

use common::filter_state::FacetCategory;
use common::search_cycle::SearchCycle;
use common::search_query::{SearchQuery, SortKey};

/// How the result list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Read handles plus the mutation callbacks owned by the listing page.
///
/// Every mutation of the search state flows through these callbacks, so
/// the sidebar checkboxes, the filter chips, and the mobile drawer all
/// observe and produce the same single state value.
#[derive(Clone, Copy)]
pub struct ListingState {
    pub query: ReadSignal<SearchQuery>,
    pub cycle: ReadSignal<SearchCycle>,
    pub view_mode: ReadSignal<ViewMode>,
    pub search_input: ReadSignal<String>,

    pub set_search_input: Callback<String>,
    pub toggle_facet: Callback<(FacetCategory, String)>,
    pub reset_filters: Callback<()>,
    pub set_sort: Callback<SortKey>,
    pub set_page: Callback<u64>,
    pub set_view_mode: Callback<ViewMode>,
    /// Re-issue the fetch for the unchanged current state.
    pub retry: Callback<()>,
}
