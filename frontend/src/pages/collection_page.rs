use common::{filter_panel::FilterPanelState, query_params::{Location, QueryParams}, storefront};
use dioxus::prelude::*;

use crate::{
    api::storefront_api::load_collection,
    components::{
        error_boundary::{LoadErrorDisplay, load_error_message},
        product_grid::ProductGrid,
        sort_filter::SortFilter,
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::url_query::UrlQuery,
};

/// Collection page
#[component]
pub fn CollectionPage(handle: String, query: UrlQuery) -> Element {
    // outlives the suspended loader below
    let panel_state = use_signal(FilterPanelState::new);
    rsx! {
        Title { "Storefront - {handle}" }
        SuspendWrapper {
            CollectionPageRootComponent { handle: handle.clone(), query: query.0.clone(), panel_state }
        }
    }
}

#[component]
fn CollectionPageRootComponent(
    handle: ReadSignal<String>,
    query: ReadSignal<QueryParams>,
    panel_state: Signal<FilterPanelState>,
) -> Element {
    let location = use_memo(move || Location::new(format!("/collections/{}", handle.read()), query.read().clone()));
    let mut collection_resource = use_resource(move || {
        let handle = handle.read().clone();
        let query = query.read().clone();
        load_collection(handle, query)
    });
    let collection = collection_resource.suspend()?.cloned();
    let collection = match collection {
        Err(e) => return rsx! {
            LoadErrorDisplay { message: load_error_message(&e), on_retry: move |_| collection_resource.restart() }
        },
        Ok(c) => c,
    };
    let storefront::CollectionPage { title, description, products, facets, .. } = collection;

    rsx! {
        div {
            id: "x-collection-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 24px 40px;
                box-sizing: border-box;
            ",
            h1 { style: "font-size: 32px; font-weight: 500; margin: 0;", "{title}" }
            if !description.is_empty() {
                p { style: "color:#5F6368; max-width: 720px; margin: 0;", "{description}" }
            }
            SortFilter {
                location,
                facets,
                panel_state,
                ProductGrid { products }
            }
        }
    }
}
