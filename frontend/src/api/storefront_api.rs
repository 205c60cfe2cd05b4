//! Client API calls for collection and search loaders.

use common::{query_params::QueryParams, storefront};
use dioxus::prelude::*;


#[server]
pub async fn load_collection(handle: String, query: QueryParams) -> Result<storefront::CollectionPage, ServerFnError> {
    let x = backend::api::load_collection(handle, query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn search_products(query: QueryParams) -> Result<storefront::SearchPage, ServerFnError> {
    let x = backend::api::search_products(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
