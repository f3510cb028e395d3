//! Page footer. Static content.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::go_icons::{GoDatabase, GoMarkGithub};

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            id: "x-footer",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                flex-wrap: wrap;
                gap: 16px;
                padding: 32px 24px;
                background-color: #2B5F7F;
                color: white;
            ",

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

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    font-size: 14px;
                ",
                a { class: "x-footer-link", href: "#", "About" }
                a { class: "x-footer-link", href: "#", "Sitemap" }
                a { class: "x-footer-link", href: "#", "Privacy Policy" }
                a { class: "x-footer-link", href: "#", "Terms of Use" }
                a {
                    class: "x-footer-link",
                    href: "#",
                    "aria-label": "GitHub",
                    Icon { icon: GoMarkGithub, style: "width: 20px; height: 20px; color: white;" }
                }
            }
        }
    }
}
