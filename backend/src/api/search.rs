//! Product search loader. Shares the filter/sort URL vocabulary with collections.

use common::{
    filter_codec::{DecodedFilters, decode_filters},
    query_params::QueryParams,
    sort::{SortKey, SortState, sort_state_from_params},
    storefront::SearchPage,
    storefront_const::{PARAM_SEARCH_TERM, PRODUCTS_PAGE_SIZE},
};
use serde::Serialize;
use tracing::info;

use crate::api::graphql::search_query;
use crate::storefront_utils::{raw_types::RawSearchData, storefront_client::storefront_query};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQueryVariables {
    pub search_term: String,
    pub filters: Vec<serde_json::Value>,
    pub sort_key: SortKey,
    pub reverse: bool,
    pub first: u64,
}

pub fn search_query_variables(search_term: &str, decoded: &DecodedFilters, sort: SortState) -> SearchQueryVariables {
    let sort_key = sort.sort_key.for_search();
    SearchQueryVariables {
        search_term: search_term.to_string(),
        filters: decoded.filters.iter().map(|f| f.to_product_filter()).collect(),
        sort_key,
        // reverse only applies when the requested key is kept
        reverse: sort.reverse && sort_key == sort.sort_key,
        first: PRODUCTS_PAGE_SIZE,
    }
}

pub async fn search_products(params: QueryParams) -> anyhow::Result<SearchPage> {
    let search_term = params.get(PARAM_SEARCH_TERM).unwrap_or_default().trim().to_string();
    let decoded = decode_filters(&params);
    let sort = sort_state_from_params(&params);
    let variables = search_query_variables(&search_term, &decoded, sort);
    info!("searching products for {:?} with {} filters", search_term, variables.filters.len());

    let data: RawSearchData = storefront_query(&search_query(), serde_json::to_value(&variables)?).await?;

    Ok(SearchPage {
        search_term,
        products: data.search.nodes.into_iter().map(Into::into).collect(),
        facets: data.search.product_filters,
        applied_filters: decoded.applied_filters,
        sort,
    })
}
