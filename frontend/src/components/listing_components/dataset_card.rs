//! Grid-view dataset card.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdEvent;
use dioxus_free_icons::icons::md_communication_icons::{MdBusiness, MdLocationOn};
use dioxus_free_icons::icons::md_editor_icons::MdInsertChart;
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;

use common::display::{GeographySummary, format_dataset_date};
use common::search_const::DESCRIPTION_PREVIEW_CHARS;
use common::search_result::Dataset;

#[component]
pub fn DatasetCard(dataset: ReadSignal<Dataset>) -> Element {
    let dataset = dataset.read().clone();
    let creation_date = format_dataset_date(dataset.creation_date());
    let geography = GeographySummary::from_raw(dataset.geography());

    rsx! {
        div {
            class: "x-dataset-card",
            style: "
                display: flex;
                flex-direction: column;
                justify-content: space-between;
                min-height: 340px;
                padding: 24px;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                box-sizing: border-box;
            ",

            h3 {
                style: "
                    font-size: 16px;
                    font-weight: 500;
                    line-height: 1.4;
                    color: #1E3A8A;
                    margin: 0 0 16px 0;
                ",
                "{dataset.title}"
            }

            // Meta row: creation date, downloads, geography
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 20px;
                    margin-bottom: 16px;
                    font-size: 12px;
                    color: #4B5563;
                ",
                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    Icon { icon: MdEvent, style: "width: 16px; height: 16px; color: #F97316;" }
                    span { "{creation_date}" }
                }
                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    Icon { icon: MdFileDownload, style: "width: 16px; height: 16px; color: #F97316;" }
                    span { "{dataset.download_count}+" }
                }
                div {
                    class: "x-has-tooltip",
                    style: "display: flex; align-items: center; gap: 6px; position: relative;",
                    Icon { icon: MdLocationOn, style: "width: 16px; height: 16px; color: #F97316;" }
                    span {
                        "{geography.display}"
                        if geography.has_more() {
                            span {
                                style: "color: #9CA3AF; margin-left: 4px;",
                                "+{geography.extra_count}"
                            }
                        }
                    }
                    if geography.has_more() {
                        div {
                            class: "x-tooltip",
                            "{geography.full}"
                        }
                    }
                }
            }

            div { style: "border-top: 1px solid #E5E7EB; margin-bottom: 16px;" }

            div {
                style: "flex: 1; margin-bottom: 20px;",
                DescriptionText { description: dataset.description.clone() }
            }

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    border-top: 1px solid #E5E7EB;
                    padding-top: 16px;
                ",
                div {
                    style: "display: flex; flex-direction: row; gap: 12px; color: #1E3A8A;",
                    Icon { icon: MdFileDownload, style: "width: 16px; height: 16px;" }
                    if dataset.has_charts {
                        Icon { icon: MdInsertChart, style: "width: 16px; height: 16px;" }
                    }
                }
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        font-size: 12px;
                        color: #6B7280;
                    ",
                    span { "published by" }
                    if dataset.organization.logo.is_empty() {
                        Icon { icon: MdBusiness, style: "width: 16px; height: 16px; color: #9CA3AF;" }
                    } else {
                        img {
                            src: "{dataset.organization.logo}",
                            alt: "{dataset.organization.name}",
                            style: "width: 16px; height: 16px; border-radius: 9999px;",
                        }
                    }
                }
            }
        }
    }
}

/// Description preview with a See More / See Less toggle once the text
/// exceeds the preview length.
#[component]
pub fn DescriptionText(description: ReadSignal<String>) -> Element {
    let mut show_full = use_signal(|| false);
    let needs_toggle =
        use_memo(move || description.read().chars().count() > DESCRIPTION_PREVIEW_CHARS);
    let shown = use_memo(move || {
        let description = description.read();
        if needs_toggle() && !show_full() {
            let preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{}...", preview)
        } else {
            description.clone()
        }
    });

    rsx! {
        p {
            style: "
                font-size: 14px;
                line-height: 1.6;
                color: #374151;
                margin: 0;
            ",
            "{shown}"
            if needs_toggle() {
                button {
                    style: "
                        border: none;
                        background: none;
                        margin-left: 4px;
                        font-size: 14px;
                        font-weight: 500;
                        color: #1E3A8A;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        let current = show_full();
                        show_full.set(!current);
                    },
                    if show_full() { "See Less" } else { "See More" }
                }
            }
        }
    }
}
