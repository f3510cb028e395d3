//! Search input, view mode toggle, and sort selector.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdList, MdSearch, MdSwapVert};
use dioxus_free_icons::icons::md_navigation_icons::{MdApps, MdArrowDropDown};

use common::search_query::SortKey;

use crate::data_definitions::listing_state::{ListingState, ViewMode};

#[component]
pub fn SearchToolbar() -> Element {
    rsx! {
        div {
            id: "x-listing-toolbar",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                justify-content: space-between;
                gap: 16px;
                margin-bottom: 16px;
            ",
            SearchBox {}
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                ",
                ViewModeToggle {}
                SortSelect {}
            }
        }
    }
}

#[component]
fn SearchBox() -> Element {
    let listing_state = use_context::<ListingState>();
    let search_input = listing_state.search_input;
    let set_search_input = listing_state.set_search_input;

    rsx! {
        div {
            id: "x-listing-search-box",
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                flex: 1;
                max-width: 500px;
                min-width: 220px;
                height: 44px;
                padding: 0 14px;
                background-color: white;
                border: 1px solid #D1D5DB;
                border-radius: 12px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 18px; height: 18px; color: #9CA3AF; flex-shrink: 0;" }
            input {
                r#type: "text",
                placeholder: "Start typing to search for any Dataset",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{search_input}",
                oninput: move |event: Event<FormData>| {
                    set_search_input(event.value());
                },
            }
        }
    }
}

#[component]
fn ViewModeToggle() -> Element {
    let listing_state = use_context::<ListingState>();
    let view_mode = listing_state.view_mode;
    let set_view_mode = listing_state.set_view_mode;

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                border: 1px solid #D1D5DB;
                border-radius: 6px;
                overflow: hidden;
            ",
            ViewModeButton { mode: ViewMode::Grid, active: *view_mode.read() == ViewMode::Grid, onselect: set_view_mode }
            ViewModeButton { mode: ViewMode::List, active: *view_mode.read() == ViewMode::List, onselect: set_view_mode }
        }
    }
}

#[component]
fn ViewModeButton(mode: ViewMode, active: bool, onselect: Callback<ViewMode>) -> Element {
    let background = if active { "#2B5F7F" } else { "white" };
    let color = if active { "white" } else { "#4B5563" };
    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 38px;
                height: 34px;
                border: none;
                background-color: {background};
                color: {color};
                cursor: pointer;
            ",
            onclick: move |_| onselect(mode),
            if mode == ViewMode::Grid {
                Icon { icon: MdApps, style: "width: 18px; height: 18px;" }
            } else {
                Icon { icon: MdList, style: "width: 18px; height: 18px;" }
            }
        }
    }
}

#[component]
fn SortSelect() -> Element {
    let listing_state = use_context::<ListingState>();
    let sort = use_memo(move || listing_state.query.read().sort);
    let set_sort = listing_state.set_sort;

    rsx! {
        div {
            style: "position: relative; display: flex; align-items: center;",
            select {
                style: "
                    appearance: none;
                    height: 36px;
                    padding: 0 48px 0 16px;
                    font-size: 14px;
                    background-color: white;
                    border: 1px solid #D1D5DB;
                    border-radius: 6px;
                    color: #111827;
                    cursor: pointer;
                ",
                onchange: move |event: Event<FormData>| {
                    set_sort(SortKey::parse(&event.value()));
                },
                option { value: "recent", selected: sort() == SortKey::Recent, "Latest Updated" }
                option { value: "alphabetical", selected: sort() == SortKey::Alphabetical, "Alphabetical" }
            }
            div {
                style: "
                    position: absolute;
                    right: 8px;
                    display: flex;
                    align-items: center;
                    pointer-events: none;
                    color: #9CA3AF;
                ",
                Icon { icon: MdSwapVert, style: "width: 16px; height: 16px;" }
                Icon { icon: MdArrowDropDown, style: "width: 16px; height: 16px;" }
            }
        }
    }
}
