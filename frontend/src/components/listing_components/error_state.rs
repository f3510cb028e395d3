//! Error panel with a manual retry action.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdReportProblem;
use dioxus_free_icons::icons::md_navigation_icons::MdRefresh;

use crate::data_definitions::listing_state::ListingState;

/// Shown instead of results when the fetch failed. Retry re-issues the
/// fetch for the unchanged current state; there is no automatic retry.
#[component]
pub fn ErrorState(message: ReadSignal<String>) -> Element {
    let listing_state = use_context::<ListingState>();
    let retry = listing_state.retry;

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                padding: 48px 16px;
                text-align: center;
            ",
            Icon { icon: MdReportProblem, style: "width: 48px; height: 48px; color: #EF4444; margin-bottom: 16px;" }
            h3 {
                style: "font-size: 18px; font-weight: 600; color: #111827; margin: 0 0 8px 0;",
                "Oops! Something went wrong"
            }
            p {
                style: "font-size: 14px; color: #4B5563; max-width: 440px; margin: 0 0 24px 0;",
                "{message}"
            }
            button {
                style: "
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                    height: 40px;
                    padding: 0 20px;
                    font-size: 14px;
                    font-weight: 500;
                    border: none;
                    border-radius: 8px;
                    background-color: #2B5F7F;
                    color: white;
                    cursor: pointer;
                ",
                onclick: move |_| retry(()),
                Icon { icon: MdRefresh, style: "width: 16px; height: 16px;" }
                "Try Again"
            }
        }
    }
}
