//! Shimmer placeholders shown while a fetch is in flight.

use dioxus::prelude::*;

use common::search_const::PAGE_SIZE;

use crate::data_definitions::listing_state::ViewMode;

/// One placeholder per result slot, matching the active view layout.
#[component]
pub fn LoadingSkeleton(view_mode: ViewMode) -> Element {
    match view_mode {
        ViewMode::Grid => rsx! {
            div {
                class: "x-result-grid",
                for index in 0..PAGE_SIZE {
                    SkeletonCard { key: "{index}" }
                }
            }
        },
        ViewMode::List => rsx! {
            div {
                style: "display: flex; flex-direction: column; gap: 16px;",
                for index in 0..PAGE_SIZE {
                    SkeletonListItem { key: "{index}" }
                }
            }
        },
    }
}

#[component]
fn SkeletonCard() -> Element {
    rsx! {
        div {
            style: "
                padding: 24px;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                box-sizing: border-box;
            ",
            div { class: "x-shimmer", style: "height: 20px; margin-bottom: 8px;" }
            div { class: "x-shimmer", style: "height: 16px; margin-bottom: 4px;" }
            div { class: "x-shimmer", style: "height: 16px; width: 75%; margin-bottom: 16px;" }

            for _ in 0..3 {
                div {
                    style: "display: flex; align-items: center; gap: 8px; margin-bottom: 12px;",
                    div { class: "x-shimmer", style: "height: 16px; width: 16px;" }
                    div { class: "x-shimmer", style: "height: 12px; width: 120px;" }
                }
            }

            div {
                style: "display: flex; justify-content: space-between; margin-top: 16px;",
                div { class: "x-shimmer", style: "height: 24px; width: 64px; border-radius: 9999px;" }
                div { class: "x-shimmer", style: "height: 24px; width: 80px; border-radius: 9999px;" }
            }
        }
    }
}

#[component]
fn SkeletonListItem() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                gap: 16px;
                padding: 24px;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                box-sizing: border-box;
            ",
            div {
                style: "flex: 1;",
                div { class: "x-shimmer", style: "height: 20px; width: 75%; margin-bottom: 8px;" }
                div { class: "x-shimmer", style: "height: 16px; margin-bottom: 4px;" }
                div { class: "x-shimmer", style: "height: 16px; width: 85%; margin-bottom: 16px;" }
                div {
                    style: "display: flex; gap: 16px; margin-bottom: 16px;",
                    div { class: "x-shimmer", style: "height: 12px; width: 96px;" }
                    div { class: "x-shimmer", style: "height: 12px; width: 80px;" }
                    div { class: "x-shimmer", style: "height: 12px; width: 112px;" }
                }
                div {
                    style: "display: flex; gap: 8px;",
                    div { class: "x-shimmer", style: "height: 24px; width: 64px; border-radius: 9999px;" }
                    div { class: "x-shimmer", style: "height: 24px; width: 80px; border-radius: 9999px;" }
                }
            }
            div {
                style: "display: flex; flex-direction: column; align-items: flex-end; width: 180px;",
                div { class: "x-shimmer", style: "height: 12px; width: 128px;" }
            }
        }
    }
}
