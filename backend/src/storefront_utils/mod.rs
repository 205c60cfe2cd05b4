pub mod storefront_client;
pub mod response_cache;
pub mod raw_types;
