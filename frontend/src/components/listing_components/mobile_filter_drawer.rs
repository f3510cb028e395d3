//! Narrow-viewport filter access: a fixed button opening a full-screen
//! drawer that reuses the sidebar through the shared context.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_image_icons::MdTune;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use crate::components::listing_components::filter_sidebar::FilterSidebar;

#[component]
pub fn MobileFilterButton(show_mobile_filters: Signal<bool>) -> Element {
    rsx! {
        button {
            class: "x-mobile-only",
            style: "
                position: fixed;
                bottom: 24px;
                right: 24px;
                align-items: center;
                justify-content: center;
                width: 56px;
                height: 56px;
                border: none;
                border-radius: 9999px;
                background-color: #2563EB;
                color: white;
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
                cursor: pointer;
                z-index: 40;
            ",
            "aria-label": "Open filters",
            onclick: move |_| show_mobile_filters.set(true),
            Icon { icon: MdTune, style: "width: 24px; height: 24px;" }
        }
    }
}

#[component]
pub fn MobileFilterDrawer(show_mobile_filters: Signal<bool>) -> Element {
    let close = Callback::new(move |_: ()| show_mobile_filters.set(false));

    rsx! {
        // Backdrop
        div {
            style: "
                position: fixed;
                inset: 0;
                background-color: rgba(0, 0, 0, 0.4);
                z-index: 40;
            ",
            onclick: move |_| close(()),
        }
        div {
            id: "x-mobile-filter-drawer",
            style: "
                position: fixed;
                inset: 0;
                background-color: white;
                overflow-y: auto;
                padding: 16px;
                z-index: 50;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 24px;
                ",
                h2 {
                    style: "font-size: 20px; font-weight: 600; margin: 0;",
                    "Filters"
                }
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 40px;
                        height: 40px;
                        border: none;
                        border-radius: 9999px;
                        background-color: #2563EB;
                        color: white;
                        cursor: pointer;
                    ",
                    "aria-label": "Close filters",
                    onclick: move |_| close(()),
                    Icon { icon: MdClose, style: "width: 20px; height: 20px;" }
                }
            }
            // Adding a filter closes the drawer so the narrowed results
            // are visible right away.
            FilterSidebar { on_facet_added: close }
        }
    }
}
