//! Maps the fetch phase to its display: skeletons, error panel,
//! empty-state message, or the result list.

use dioxus::prelude::*;

use common::search_cycle::FetchPhase;
use common::search_result::Dataset;

use crate::components::listing_components::dataset_card::DatasetCard;
use crate::components::listing_components::dataset_list_item::DatasetListItem;
use crate::components::listing_components::error_state::ErrorState;
use crate::components::listing_components::loading_skeleton::LoadingSkeleton;
use crate::components::listing_components::pagination::PaginationBar;
use crate::data_definitions::listing_state::{ListingState, ViewMode};

#[component]
pub fn ResultsView() -> Element {
    let listing_state = use_context::<ListingState>();
    let view_mode = *listing_state.view_mode.read();
    let phase = listing_state.cycle.read().phase().clone();

    match phase {
        FetchPhase::Loading => rsx! {
            LoadingSkeleton { view_mode }
        },
        FetchPhase::Failed(error) => rsx! {
            ErrorState { message: error.to_string() }
        },
        FetchPhase::Loaded { results, .. } if results.is_empty() => rsx! {
            div {
                style: "text-align: center; padding: 48px 0;",
                p {
                    style: "font-size: 18px; color: #6B7280;",
                    "No results found."
                }
            }
        },
        FetchPhase::Loaded { results, .. } => rsx! {
            ResultList { results, view_mode }
            div {
                style: "margin-top: 32px;",
                PaginationBar {}
            }
        },
    }
}

#[component]
fn ResultList(results: ReadSignal<Vec<Dataset>>, view_mode: ViewMode) -> Element {
    match view_mode {
        ViewMode::Grid => rsx! {
            div {
                class: "x-result-grid",
                for dataset in results.read().iter().cloned() {
                    DatasetCard { key: "{dataset.id}", dataset }
                }
            }
        },
        ViewMode::List => rsx! {
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 16px;
                ",
                for dataset in results.read().iter().cloned() {
                    DatasetListItem { key: "{dataset.id}", dataset }
                }
            }
        },
    }
}
