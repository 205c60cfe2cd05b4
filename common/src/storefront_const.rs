//! Constants shared by the storefront loaders and the filter UI.

/// Quiet period before a typed price range is committed to the URL.
pub const PRICE_RANGE_DEBOUNCE_MS: u32 = 500;

/// Products requested per collection or search page.
pub const PRODUCTS_PAGE_SIZE: u64 = 24;

// query string vocabulary
pub const PARAM_AVAILABLE: &str = "available";
pub const PARAM_PRODUCT_VENDOR: &str = "productVendor";
pub const PARAM_PRODUCT_TYPE: &str = "productType";
pub const PARAM_VARIANT_OPTION: &str = "variantOption";
pub const PARAM_MIN_PRICE: &str = "minPrice";
pub const PARAM_MAX_PRICE: &str = "maxPrice";
pub const PARAM_SORT: &str = "sort";
pub const PARAM_SEARCH_TERM: &str = "q";

/// Single-valued enumerated keys recognized literally when decoding.
pub const KNOWN_ENUMERATED_FILTERS: [&str; 2] = [PARAM_PRODUCT_VENDOR, PARAM_PRODUCT_TYPE];
