//! First/prev/next/last page navigation.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{
    MdChevronLeft, MdChevronRight, MdFirstPage, MdLastPage,
};

use common::search_result::total_pages;

use crate::data_definitions::listing_state::ListingState;

#[component]
pub fn PaginationBar() -> Element {
    let listing_state = use_context::<ListingState>();
    let set_page = listing_state.set_page;

    let current_page = use_memo(move || listing_state.query.read().page);
    let last_page = use_memo(move || total_pages(listing_state.cycle.read().total()).max(1));
    // Both directions stay disabled on a single page.
    let can_go_back = use_memo(move || current_page() > 1);
    let can_go_forward = use_memo(move || current_page() < last_page());

    rsx! {
        div {
            id: "x-pagination-bar",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                flex-wrap: wrap;
                gap: 16px;
                padding: 12px 16px;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
            ",

            span {
                style: "font-size: 13px; color: #4B5563;",
                "Page {current_page():02} of {last_page():02}"
            }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 4px;
                ",
                PageButton {
                    label: "First Page",
                    disabled: !can_go_back(),
                    onclick: move |_| set_page(1),
                    Icon { icon: MdFirstPage, style: "width: 18px; height: 18px;" }
                }
                PageButton {
                    label: "Previous Page",
                    disabled: !can_go_back(),
                    onclick: move |_| set_page(current_page() - 1),
                    Icon { icon: MdChevronLeft, style: "width: 18px; height: 18px;" }
                }
                PageButton {
                    label: "Next Page",
                    disabled: !can_go_forward(),
                    onclick: move |_| set_page(current_page() + 1),
                    Icon { icon: MdChevronRight, style: "width: 18px; height: 18px;" }
                }
                PageButton {
                    label: "Last Page",
                    disabled: !can_go_forward(),
                    onclick: move |_| set_page(last_page()),
                    Icon { icon: MdLastPage, style: "width: 18px; height: 18px;" }
                }
            }
        }
    }
}

#[component]
fn PageButton(
    label: &'static str,
    disabled: ReadSignal<bool>,
    onclick: Callback<()>,
    children: Element,
) -> Element {
    let color = if *disabled.read() { "#D1D5DB" } else { "#4B5563" };
    let cursor = if *disabled.read() { "not-allowed" } else { "pointer" };

    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 32px;
                height: 32px;
                border: none;
                background: none;
                color: {color};
                cursor: {cursor};
            ",
            "aria-label": label,
            disabled: *disabled.read(),
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            {children}
        }
    }
}
