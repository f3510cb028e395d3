use dioxus::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::pages::data_listing_page::DataListingPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageChrome)]

    #[route("/")]
    DataListingPage {},
}

/// Static page chrome: header navigation on top, footer below the page
/// content.
#[component]
fn PageChrome() -> Element {
    rsx! {
        div {
            id: "x-page-chrome",
            style: "
                display: flex;
                flex-direction: column;
                min-height: 100vh;
                width: 100%;
            ",
            Header {}
            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px; background-color: #F9FAFB;",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
