//! Anchor for URLs computed by the filter/sort helpers.

use dioxus::prelude::*;

use crate::routes::navigate_to_url;

/// Plain `<a href>` that navigates client side when clicked.
#[component]
pub fn UrlLink(
    href: ReadSignal<String>,
    #[props(default)] replace: bool,
    #[props(default)] class: String,
    #[props(default)] style: String,
    children: Element,
) -> Element {
    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            style: "{style}",
            onclick: move |e| {
                e.prevent_default();
                navigate_to_url(&href.read(), replace);
            },
            {children}
        }
    }
}
