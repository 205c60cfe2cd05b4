use common::{filter_panel::FilterPanelState, query_params::{Location, QueryParams}, storefront, storefront_const::PARAM_SEARCH_TERM};
use dioxus::prelude::*;

use crate::{
    api::storefront_api::search_products,
    components::{
        error_boundary::{LoadErrorDisplay, load_error_message},
        product_grid::ProductGrid,
        search_input::SearchInput,
        sort_filter::SortFilter,
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::url_query::UrlQuery,
};

fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}

/// Search page
#[component]
pub fn SearchPage(query: UrlQuery) -> Element {
    let search_term = query.0.get(PARAM_SEARCH_TERM).unwrap_or_default().to_string();
    // outlives the suspended results below
    let panel_state = use_signal(FilterPanelState::new);
    rsx! {
        Title { "Storefront search: {title_ellipsis(&search_term)}" }
        div {
            id: "x-search-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 24px 40px;
                box-sizing: border-box;
            ",
            SearchInput { key: "{search_term}", initial_term: search_term.clone() }
            if search_term.trim().is_empty() {
                p { style: "color:#5F6368;", "Type a search term to find products." }
            } else {
                SuspendWrapper {
                    SearchResults { query: query.0.clone(), panel_state }
                }
            }
        }
    }
}

#[component]
fn SearchResults(query: ReadSignal<QueryParams>, panel_state: Signal<FilterPanelState>) -> Element {
    let location = use_memo(move || Location::new("/search", query.read().clone()));
    let mut search_resource = use_resource(move || {
        let query = query.read().clone();
        search_products(query)
    });
    let search = search_resource.suspend()?.cloned();
    let search = match search {
        Err(e) => return rsx! {
            LoadErrorDisplay { message: load_error_message(&e), on_retry: move |_| search_resource.restart() }
        },
        Ok(s) => s,
    };
    let storefront::SearchPage { search_term, products, facets, .. } = search;
    let result_count = products.len();

    rsx! {
        h2 {
            style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); margin: 0;",
            "{result_count} results for \"{search_term}\""
        }
        SortFilter {
            location,
            facets,
            panel_state,
            ProductGrid { products }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_terms_are_shortened() {
        assert_eq!(title_ellipsis("boots"), "boots");
        assert_eq!(title_ellipsis("a very long search term indeed"), "a very long search...");
    }
}
