pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod url_link;
pub mod product_grid;
pub mod search_input;
pub mod sort_filter;
