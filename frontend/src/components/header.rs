//! Top navigation bar. Static content: brand, section links, login.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::go_icons::GoDatabase;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            id: "x-header",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                height: 64px;
                padding: 0 24px;
                background-color: #2B5F7F;
                color: white;
            ",

            // Brand
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                ",
                Icon { icon: GoDatabase, style: "width: 28px; height: 28px; color: #FB923C;" }
                span {
                    style: "font-size: 20px; font-weight: 600;",
                    "CivicDataSpace"
                }
            }

            // Section links
            nav {
                class: "x-desktop-only",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 32px;
                ",
                button {
                    class: "x-header-link",
                    Icon { icon: MdSearch, style: "width: 16px; height: 16px;" }
                    "ALL DATA"
                }
                button { class: "x-header-link", "SECTORS" }
                button { class: "x-header-link", "USE CASES" }
                button { class: "x-header-link", "PUBLISHERS" }
                button { class: "x-header-link", "ABOUT US" }
            }

            button {
                style: "
                    height: 36px;
                    padding: 0 16px;
                    font-size: 14px;
                    font-weight: 500;
                    border: none;
                    border-radius: 6px;
                    background-color: #4ADE80;
                    color: #111827;
                    cursor: pointer;
                ",
                "LOGIN / SIGN UP"
            }
        }
    }
}
