//! GraphQL documents sent to the storefront API.

const PRODUCT_CARD_FIELDS: &str = "
    id
    handle
    title
    vendor
    priceRange { minVariantPrice { amount currencyCode } }
    featuredImage { url }
";

const FACET_FIELDS: &str = "
    id
    label
    type
    values { id label count input }
";

pub fn collection_query() -> String {
    format!(
        "
    query CollectionDetails(
        $handle: String!
        $filters: [ProductFilter!]
        $sortKey: ProductCollectionSortKeys!
        $reverse: Boolean
        $first: Int
    ) {{
        collection(handle: $handle) {{
            id
            handle
            title
            description
            products(first: $first, filters: $filters, sortKey: $sortKey, reverse: $reverse) {{
                filters {{ {FACET_FIELDS} }}
                nodes {{ {PRODUCT_CARD_FIELDS} }}
            }}
        }}
    }}"
    )
}

pub fn search_query() -> String {
    format!(
        "
    query ProductSearch(
        $searchTerm: String
        $filters: [ProductFilter!]
        $sortKey: SearchSortKeys
        $reverse: Boolean
        $first: Int
    ) {{
        search(
            query: $searchTerm
            first: $first
            types: PRODUCT
            productFilters: $filters
            sortKey: $sortKey
            reverse: $reverse
            unavailableProducts: HIDE
        ) {{
            productFilters {{ {FACET_FIELDS} }}
            nodes {{ ... on Product {{ {PRODUCT_CARD_FIELDS} }} }}
        }}
    }}"
    )
}
