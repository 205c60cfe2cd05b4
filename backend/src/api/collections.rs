//! Collection page loader.

use common::{
    filter_codec::{DecodedFilters, decode_filters},
    query_params::QueryParams,
    sort::{SortKey, SortState, sort_state_from_params},
    storefront::CollectionPage,
    storefront_const::PRODUCTS_PAGE_SIZE,
};
use serde::Serialize;
use tracing::info;

use crate::api::graphql::collection_query;
use crate::storefront_utils::{raw_types::RawCollectionData, storefront_client::storefront_query};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionQueryVariables {
    pub handle: String,
    pub filters: Vec<serde_json::Value>,
    pub sort_key: SortKey,
    pub reverse: bool,
    pub first: u64,
}

pub fn collection_query_variables(handle: &str, decoded: &DecodedFilters, sort: SortState) -> CollectionQueryVariables {
    CollectionQueryVariables {
        handle: handle.to_string(),
        filters: decoded.filters.iter().map(|f| f.to_product_filter()).collect(),
        sort_key: sort.sort_key,
        reverse: sort.reverse,
        first: PRODUCTS_PAGE_SIZE,
    }
}

pub async fn load_collection(handle: String, params: QueryParams) -> anyhow::Result<CollectionPage> {
    let decoded = decode_filters(&params);
    let sort = sort_state_from_params(&params);
    let variables = collection_query_variables(&handle, &decoded, sort);
    info!("loading collection {} with {} filters, sort {:?}", handle, variables.filters.len(), sort);

    let data: RawCollectionData = storefront_query(&collection_query(), serde_json::to_value(&variables)?).await?;
    let Some(collection) = data.collection else {
        anyhow::bail!("Collection not found: {}", handle);
    };

    Ok(CollectionPage {
        handle: collection.handle,
        title: collection.title,
        description: collection.description,
        products: collection.products.nodes.into_iter().map(Into::into).collect(),
        facets: collection.products.filters,
        applied_filters: decoded.applied_filters,
        sort,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn variables_follow_the_url() {
        let params = QueryParams::parse(
            "available=true&productType=shirts&variantOption=Color%3ARed&minPrice=10&maxPrice=50&sort=price-high-low",
        );
        let decoded = decode_filters(&params);
        let variables = collection_query_variables("all", &decoded, sort_state_from_params(&params));
        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({
                "handle": "all",
                "filters": [
                    {"available": true},
                    {"productType": "shirts"},
                    {"variantOption": {"name": "Color", "value": "Red"}},
                    {"price": {"min": 10.0, "max": 50.0}}
                ],
                "sortKey": "PRICE",
                "reverse": true,
                "first": PRODUCTS_PAGE_SIZE
            })
        );
    }

    #[test]
    fn no_params_means_relevance_and_no_filters() {
        let params = QueryParams::new();
        let variables = collection_query_variables("frontpage", &decode_filters(&params), sort_state_from_params(&params));
        assert!(variables.filters.is_empty());
        assert_eq!(variables.sort_key, SortKey::Relevance);
        assert!(!variables.reverse);
    }
}
