//! List-view dataset row.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdEvent;
use dioxus_free_icons::icons::md_communication_icons::{MdBusiness, MdLocationOn};
use dioxus_free_icons::icons::md_editor_icons::MdInsertChart;
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;

use common::display::format_dataset_date;
use common::search_result::Dataset;

use crate::components::listing_components::dataset_card::DescriptionText;

const MAX_BADGES: usize = 6;

#[component]
pub fn DatasetListItem(dataset: ReadSignal<Dataset>) -> Element {
    let dataset = dataset.read().clone();
    let last_updated = format_dataset_date(&dataset.created);
    let creation_date = format_dataset_date(dataset.creation_date());
    let geography = dataset.geography().to_string();

    rsx! {
        div {
            class: "x-dataset-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 24px;
                padding: 24px;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                box-sizing: border-box;
            ",

            // Main column
            div {
                style: "flex: 1; min-width: 0;",
                h3 {
                    style: "
                        font-size: 18px;
                        font-weight: 500;
                        line-height: 1.4;
                        color: #1E3A8A;
                        margin: 0 0 16px 0;
                    ",
                    "{dataset.title}"
                }

                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        flex-wrap: wrap;
                        gap: 20px;
                        margin-bottom: 16px;
                        font-size: 13px;
                        color: #4B5563;
                    ",
                    div {
                        style: "display: flex; align-items: center; gap: 6px;",
                        Icon { icon: MdEvent, style: "width: 16px; height: 16px; color: #1E40AF;" }
                        span { "Last Updated: {last_updated}" }
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 6px;",
                        Icon { icon: MdEvent, style: "width: 16px; height: 16px; color: #F97316;" }
                        span { "Created: {creation_date}" }
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 6px;",
                        Icon { icon: MdFileDownload, style: "width: 16px; height: 16px; color: #F97316;" }
                        span { "Downloads: {dataset.download_count}+" }
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 6px;",
                        Icon { icon: MdLocationOn, style: "width: 16px; height: 16px; color: #F97316;" }
                        span { "Geography: {geography}" }
                    }
                }

                div { style: "border-top: 1px solid #E5E7EB; margin-bottom: 16px;" }

                div {
                    style: "margin-bottom: 16px;",
                    DescriptionText { description: dataset.description.clone() }
                }

                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        justify-content: space-between;
                        flex-wrap: wrap;
                        gap: 16px;
                    ",
                    div {
                        if !dataset.tags.is_empty() {
                            BadgeRow {
                                heading: "Tags:",
                                values: dataset.tags.clone(),
                                background: "#DCFCE7",
                                color: "#374151",
                            }
                        }
                        if !dataset.sectors.is_empty() {
                            BadgeRow {
                                heading: "Sectors:",
                                values: dataset.sectors.clone(),
                                background: "#DBEAFE",
                                color: "#1D4ED8",
                            }
                        }
                    }
                    div {
                        if !dataset.formats.is_empty() {
                            BadgeRow {
                                heading: "Formats:",
                                values: dataset.formats.clone(),
                                background: "#F3F4F6",
                                color: "#4B5563",
                            }
                        }
                        div {
                            style: "display: flex; flex-direction: row; gap: 8px; margin-top: 8px; color: #1E3A8A;",
                            Icon { icon: MdFileDownload, style: "width: 16px; height: 16px;" }
                            if dataset.has_charts {
                                Icon { icon: MdInsertChart, style: "width: 16px; height: 16px;" }
                            }
                        }
                    }
                }
            }

            // Publisher column
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                    width: 180px;
                    flex-shrink: 0;
                ",
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

#[component]
fn BadgeRow(
    heading: &'static str,
    values: ReadSignal<Vec<String>>,
    background: &'static str,
    color: &'static str,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 6px;
                margin-bottom: 12px;
            ",
            span {
                style: "font-size: 12px; font-weight: 500; color: #374151;",
                "{heading}"
            }
            for value in values.read().iter().take(MAX_BADGES).cloned() {
                span {
                    key: "{value}",
                    style: "
                        display: inline-flex;
                        align-items: center;
                        padding: 3px 12px;
                        font-size: 12px;
                        font-weight: 500;
                        border-radius: 9999px;
                        background-color: {background};
                        color: {color};
                    ",
                    "{value}"
                }
            }
        }
    }
}
