//! Removable chips for the active facet selections.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use common::filter_state::FilterChip;

use crate::data_definitions::listing_state::ListingState;

/// One chip per selected facet value. Removing a chip calls the same
/// toggle as the sidebar checkbox, so the two can never disagree.
#[component]
pub fn FilterChipsBar() -> Element {
    let listing_state = use_context::<ListingState>();
    let chips = use_memo(move || listing_state.query.read().filters.chips());
    let reset_filters = listing_state.reset_filters;

    if chips.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-filter-chips",
            style: "
                padding: 16px;
                margin-bottom: 16px;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 10px;
                ",
                h3 {
                    style: "font-size: 14px; font-weight: 500; color: #374151; margin: 0;",
                    "Active Filters"
                }
                button {
                    style: "
                        border: none;
                        background: none;
                        font-size: 12px;
                        font-weight: 500;
                        color: #F97316;
                        cursor: pointer;
                    ",
                    onclick: move |_| reset_filters(()),
                    "Clear All"
                }
            }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    gap: 8px;
                ",
                for chip in chips.read().iter().cloned() {
                    ActiveFilterChip {
                        key: "{chip.category.query_param()}-{chip.value}",
                        chip,
                    }
                }
            }
        }
    }
}

#[component]
fn ActiveFilterChip(chip: ReadSignal<FilterChip>) -> Element {
    let listing_state = use_context::<ListingState>();

    rsx! {
        div {
            style: "
                display: inline-flex;
                flex-direction: row;
                align-items: center;
                gap: 4px;
                padding: 4px 12px;
                font-size: 13px;
                font-weight: 500;
                background-color: #EFF6FF;
                color: #1D4ED8;
                border: 1px solid #BFDBFE;
                border-radius: 9999px;
            ",
            span {
                style: "font-size: 11px; color: #3B82F6;",
                "{chip.read().category.label()}:"
            }
            span { "{chip.read().value}" }
            button {
                style: "
                    display: flex;
                    align-items: center;
                    border: none;
                    background: none;
                    padding: 2px;
                    cursor: pointer;
                    color: #1D4ED8;
                ",
                "aria-label": "Remove filter {chip.read().value}",
                onclick: move |_| {
                    let chip = chip.read().clone();
                    listing_state.toggle_facet.call((chip.category, chip.value));
                },
                Icon { icon: MdClose, style: "width: 12px; height: 12px;" }
            }
        }
    }
}
