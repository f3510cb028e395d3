//! Faceted filter sidebar fed from the last aggregation snapshot.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdExpandLess, MdExpandMore};
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

use common::display::truncate_label;
use common::filter_state::FacetCategory;
use common::search_const::MAX_FACET_OPTIONS;

use crate::data_definitions::listing_state::ListingState;

/// Sidebar display order. Serialization order lives with the query.
const SIDEBAR_SECTIONS: [FacetCategory; 4] = [
    FacetCategory::Geography,
    FacetCategory::Sectors,
    FacetCategory::Tags,
    FacetCategory::Formats,
];

const OPTION_LABEL_CHARS: usize = 22;

/// Filter panel listing the facet options of the current aggregation
/// snapshot. A selected value that vanished from the snapshot drops out
/// of the option list but stays selected until removed via its chip.
#[component]
pub fn FilterSidebar(#[props(default)] on_facet_added: Option<Callback<()>>) -> Element {
    let listing_state = use_context::<ListingState>();
    let has_active_filters =
        use_memo(move || !listing_state.query.read().filters.is_empty());
    let reset_filters = listing_state.reset_filters;
    let reset_color = if has_active_filters() { "#F97316" } else { "#D1D5DB" };
    let reset_cursor = if has_active_filters() { "pointer" } else { "not-allowed" };

    rsx! {
        div {
            id: "x-filter-sidebar",
            style: "
                width: 300px;
                padding: 20px;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                box-sizing: border-box;
            ",

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 20px;
                ",
                h2 {
                    style: "font-size: 16px; font-weight: 600; color: #111827; margin: 0;",
                    "FILTERS"
                }
                button {
                    style: "
                        border: none;
                        background: none;
                        font-size: 13px;
                        font-weight: 500;
                        color: {reset_color};
                        cursor: {reset_cursor};
                    ",
                    disabled: !has_active_filters(),
                    onclick: move |_| reset_filters(()),
                    "RESET"
                }
            }

            for category in SIDEBAR_SECTIONS {
                FilterSection { category, on_facet_added }
            }
        }
    }
}

#[component]
fn FilterSection(
    category: FacetCategory,
    on_facet_added: ReadSignal<Option<Callback<()>>>,
) -> Element {
    let listing_state = use_context::<ListingState>();
    let mut is_open = use_signal(|| false);

    let options = use_memo(move || {
        listing_state
            .cycle
            .read()
            .aggregations()
            .options(category)
            .iter()
            .take(MAX_FACET_OPTIONS)
            .map(|(value, count)| (value.clone(), *count))
            .collect::<Vec<_>>()
    });
    let option_rows = options.read().clone();
    let header_background = if is_open() { "#DBEAFE" } else { "#F3F4F6" };

    rsx! {
        div {
            style: "margin-bottom: 12px;",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    padding: 10px 14px;
                    border-radius: 4px;
                    background-color: {header_background};
                    cursor: pointer;
                ",
                onclick: move |_| {
                    let open = is_open();
                    is_open.set(!open);
                },
                span {
                    style: "font-size: 14px; font-weight: 500; color: #374151;",
                    "{category.label()} ({option_rows.len()})"
                }
                if is_open() {
                    Icon { icon: MdExpandLess, style: "width: 16px; height: 16px; color: #3B82F6;" }
                } else {
                    Icon { icon: MdExpandMore, style: "width: 16px; height: 16px; color: #3B82F6;" }
                }
            }

            if is_open() {
                div {
                    style: "
                        display: flex;
                        flex-direction: column;
                        gap: 4px;
                        margin-top: 8px;
                        padding: 0 4px;
                    ",
                    for (value, count) in option_rows {
                        FacetCheckbox {
                            key: "{value}",
                            category,
                            value,
                            count,
                            on_facet_added,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(
    category: FacetCategory,
    value: ReadSignal<String>,
    count: u64,
    on_facet_added: ReadSignal<Option<Callback<()>>>,
) -> Element {
    let listing_state = use_context::<ListingState>();
    let is_checked = use_memo(move || {
        listing_state
            .query
            .read()
            .filters
            .is_selected(category, &value.read())
    });
    let label = use_memo(move || truncate_label(&value.read(), OPTION_LABEL_CHARS));

    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                padding: 4px;
                cursor: pointer;
            ",
            title: "{value}",
            onclick: move |_| {
                let adds_value = !is_checked();
                listing_state.toggle_facet.call((category, value.read().clone()));
                if adds_value {
                    if let Some(close) = on_facet_added.read().as_ref() {
                        close.call(());
                    }
                }
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #F97316; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #6B7280; flex-shrink: 0;" }
            }
            span {
                style: "
                    flex: 1;
                    font-size: 14px;
                    color: #374151;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{label}"
            }
            span {
                style: "font-size: 13px; color: #9CA3AF; flex-shrink: 0;",
                "{count}"
            }
        }
    }
}
