//! The dataset listing page: owns the search state and the fetch cycle.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::filter_state::FacetCategory;
use common::search_const::SEARCH_DEBOUNCE_MS;
use common::search_cycle::SearchCycle;
use common::search_query::{SearchQuery, SortKey};
use common::search_result::total_pages;

use crate::api::search_api::search_datasets;
use crate::components::listing_components::filter_chips::FilterChipsBar;
use crate::components::listing_components::filter_sidebar::FilterSidebar;
use crate::components::listing_components::mobile_filter_drawer::{
    MobileFilterButton, MobileFilterDrawer,
};
use crate::components::listing_components::results_view::ResultsView;
use crate::components::listing_components::search_toolbar::SearchToolbar;
use crate::data_definitions::listing_state::{ListingState, ViewMode};
use crate::hooks::use_debounced_text;

#[component]
pub fn DataListingPage() -> Element {
    rsx! {
        Title { "CivicDataSpace - All Data" }
        ListingRootComponent {}
    }
}

#[component]
fn ListingRootComponent() -> Element {
    let mut search_input = use_signal(String::new);
    let debounced_search = use_debounced_text(search_input.into(), SEARCH_DEBOUNCE_MS);
    let mut query = use_signal(SearchQuery::default);
    let mut cycle = use_signal(SearchCycle::default);
    let mut view_mode = use_signal(ViewMode::default);
    let mut show_mobile_filters = use_signal(|| false);

    // Commit the debounced text into the query; the commit resets the
    // page, so it must only happen on a real change.
    use_effect(move || {
        let text = debounced_search.read().clone();
        if query.peek().query_string != text {
            query.write().set_query_string(text);
        }
    });

    // Issue a fetch for the current state. The sequence ticket from
    // begin() lets the cycle discard responses that resolve after a
    // newer request was issued.
    let run_search = Callback::new(move |_: ()| {
        let request = query.peek().clone();
        let seq = cycle.write().begin();
        spawn(async move {
            let outcome = search_datasets(&request).await;
            if let Err(error) = &outcome {
                tracing::warn!(%error, seq, "dataset search failed");
            }
            if !cycle.write().resolve(seq, outcome) {
                tracing::debug!(seq, "discarded stale search response");
            }
        });
    });

    // Any query change (text, facets, sort, page) starts a new cycle.
    use_effect(move || {
        let _ = query.read();
        run_search(());
    });

    let toggle_facet = Callback::new(move |(category, value): (FacetCategory, String)| {
        query.write().toggle_facet(category, &value);
    });
    let reset_filters = Callback::new(move |_: ()| {
        query.write().reset_filters();
    });
    let set_sort = Callback::new(move |sort: SortKey| {
        query.write().set_sort(sort);
    });
    let set_page = Callback::new(move |page: u64| {
        // Navigation must never request page 0 or run past the end.
        let last_page = total_pages(cycle.peek().total()).max(1);
        query.write().set_page(page.clamp(1, last_page));
    });
    let set_search_input = Callback::new(move |text: String| {
        search_input.set(text);
    });
    let set_view_mode = Callback::new(move |mode: ViewMode| {
        view_mode.set(mode);
    });

    use_context_provider(move || ListingState {
        query: query.into(),
        cycle: cycle.into(),
        view_mode: view_mode.into(),
        search_input: search_input.into(),
        set_search_input,
        toggle_facet,
        reset_filters,
        set_sort,
        set_page,
        set_view_mode,
        retry: run_search,
    });

    rsx! {
        div {
            id: "x-listing-page-root",
            style: "
                display: flex;
                flex-direction: row;
                gap: 24px;
                width: 100%;
                max-width: 1280px;
                margin: 0 auto;
                padding: 24px 16px;
                box-sizing: border-box;
            ",

            div {
                id: "x-listing-sidebar",
                class: "x-desktop-only",
                style: "flex-shrink: 0;",
                FilterSidebar {}
            }

            div {
                id: "x-listing-main-column",
                style: "
                    display: flex;
                    flex-direction: column;
                    flex: 1;
                    min-width: 0;
                ",
                SearchToolbar {}
                FilterChipsBar {}
                ResultsView {}
            }
        }

        MobileFilterButton { show_mobile_filters }
        if show_mobile_filters() {
            MobileFilterDrawer { show_mobile_filters }
        }
    }
}
