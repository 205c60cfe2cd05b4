//! Product search text box.

use common::{
    query_params::{QueryParams, url_for},
    storefront_const::PARAM_SEARCH_TERM,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::routes::navigate_to_url;

/// URL of a fresh search; filters and sort of the previous search are dropped.
pub fn search_url(term: &str) -> String {
    url_for("/search", &QueryParams::from_pairs([(PARAM_SEARCH_TERM, term.trim())]))
}

#[component]
pub fn SearchInput(initial_term: ReadSignal<String>) -> Element {
    let mut search_q = use_signal(|| initial_term.peek().clone());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border: 1px solid rgba(0,0,0,0.3);
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                max-width: 520px;
                box-sizing: border-box;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "search",
                name: "q",
                placeholder: "Search products",
                value: "{search_q}",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    font-size: 15px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        navigate_to_url(&search_url(&search_q.read()), false);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_keeps_only_the_term() {
        assert_eq!(search_url(" red boots "), "/search?q=red+boots");
        assert_eq!(search_url(""), "/search?q=");
    }
}
