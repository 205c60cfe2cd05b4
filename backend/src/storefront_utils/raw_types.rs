//! Raw GraphQL response shapes from the storefront API.

use common::{
    facet::Facet,
    storefront::{Money, ProductCard},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RawGraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<RawGraphQlError>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawGraphQlError {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoney {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPriceRange {
    pub min_variant_price: RawMoney,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawImage {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub vendor: String,
    pub price_range: Option<RawPriceRange>,
    pub featured_image: Option<RawImage>,
}

impl From<RawProduct> for ProductCard {
    fn from(product: RawProduct) -> Self {
        ProductCard {
            id: product.id,
            handle: product.handle,
            title: product.title,
            vendor: product.vendor,
            price: product.price_range.map(|range| Money {
                amount: range.min_variant_price.amount,
                currency_code: range.min_variant_price.currency_code,
            }),
            image_url: product.featured_image.map(|image| image.url),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawProductConnection {
    #[serde(default)]
    pub filters: Vec<Facet>,
    #[serde(default)]
    pub nodes: Vec<RawProduct>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawCollection {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub products: RawProductConnection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawCollectionData {
    pub collection: Option<RawCollection>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSearchConnection {
    #[serde(default)]
    pub product_filters: Vec<Facet>,
    #[serde(default)]
    pub nodes: Vec<RawProduct>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RawSearchData {
    pub search: RawSearchConnection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_collection_payload() {
        let raw = r#"{
            "data": {"collection": {
                "id": "gid://shopify/Collection/1", "handle": "all", "title": "All", "description": "",
                "products": {
                    "filters": [{"id": "filter.v.price", "label": "Price", "type": "PRICE_RANGE",
                                 "values": [{"id": "filter.v.price", "label": "Price", "count": 0,
                                             "input": "{\"price\":{\"min\":0,\"max\":600}}"}]}],
                    "nodes": [{"id": "gid://shopify/Product/1", "handle": "snowboard", "title": "Snowboard",
                               "vendor": "Hydrogen",
                               "priceRange": {"minVariantPrice": {"amount": "629.95", "currencyCode": "USD"}},
                               "featuredImage": null}]
                }
            }}
        }"#;
        let response: RawGraphQlResponse<RawCollectionData> = serde_json::from_str(raw).unwrap();
        assert!(response.errors.is_empty());
        let collection = response.data.unwrap().collection.unwrap();
        assert_eq!(collection.products.filters.len(), 1);
        let card = ProductCard::from(collection.products.nodes.into_iter().next().unwrap());
        assert_eq!(card.price.unwrap().amount, "629.95");
        assert_eq!(card.image_url, None);
    }

    #[test]
    fn decodes_graphql_errors() {
        let raw = r#"{"errors": [{"message": "Field 'x' doesn't exist"}]}"#;
        let response: RawGraphQlResponse<RawSearchData> = serde_json::from_str(raw).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.errors[0].message, "Field 'x' doesn't exist");
    }
}
