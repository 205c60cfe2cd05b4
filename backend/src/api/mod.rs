//! Page loaders for collection browsing and product search.

pub mod graphql;

mod collections;
pub use collections::{CollectionQueryVariables, collection_query_variables, load_collection};

mod search;
pub use search::{SearchQueryVariables, search_products, search_query_variables};
