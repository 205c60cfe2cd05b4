//! Collection and search results shared between backend and frontend.

use serde::{Deserialize, Serialize};

use crate::applied_filter::AppliedFilter;
use crate::facet::Facet;
use crate::sort::SortState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: String,
    pub handle: String,
    pub title: String,
    pub vendor: String,
    pub price: Option<Money>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionPage {
    pub handle: String,
    pub title: String,
    pub description: String,
    pub products: Vec<ProductCard>,
    pub facets: Vec<Facet>,
    pub applied_filters: Vec<AppliedFilter>,
    pub sort: SortState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    pub search_term: String,
    pub products: Vec<ProductCard>,
    pub facets: Vec<Facet>,
    pub applied_filters: Vec<AppliedFilter>,
    pub sort: SortState,
}
