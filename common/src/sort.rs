//! Sort order: human facing `sort` param values and the backend sort axes.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::query_params::{QueryParams, url_for};
use crate::storefront_const::PARAM_SORT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortParam {
    Featured,
    PriceLowHigh,
    PriceHighLow,
    BestSelling,
    Newest,
}

/// Canonical menu order; the first entry is the label shown when nothing matches.
pub const SORT_OPTIONS: [SortParam; 5] = [
    SortParam::Featured,
    SortParam::PriceLowHigh,
    SortParam::PriceHighLow,
    SortParam::BestSelling,
    SortParam::Newest,
];

impl SortParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowHigh => "price-low-high",
            Self::PriceHighLow => "price-high-low",
            Self::BestSelling => "best-selling",
            Self::Newest => "newest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowHigh => "Price: Low - High",
            Self::PriceHighLow => "Price: High - Low",
            Self::BestSelling => "Best Selling",
            Self::Newest => "Newest",
        }
    }

    pub fn sort_state(&self) -> SortState {
        match self {
            Self::PriceHighLow => SortState { sort_key: SortKey::Price, reverse: true },
            Self::PriceLowHigh => SortState { sort_key: SortKey::Price, reverse: false },
            Self::BestSelling => SortState { sort_key: SortKey::BestSelling, reverse: false },
            Self::Newest => SortState { sort_key: SortKey::Created, reverse: true },
            Self::Featured => SortState { sort_key: SortKey::Manual, reverse: false },
        }
    }
}

impl Display for SortParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort param: {0:?}")]
pub struct UnknownSortParam(pub String);

impl FromStr for SortParam {
    type Err = UnknownSortParam;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SORT_OPTIONS
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| UnknownSortParam(s.to_string()))
    }
}

/// Sort keys understood by the commerce API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortKey {
    Relevance,
    Price,
    BestSelling,
    Created,
    Manual,
}

impl SortKey {
    /// Product search only knows relevance and price.
    pub fn for_search(self) -> Self {
        match self {
            Self::Price => Self::Price,
            _ => Self::Relevance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub sort_key: SortKey,
    pub reverse: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self { sort_key: SortKey::Relevance, reverse: false }
    }
}

/// Total mapping from the raw `sort` value; anything unrecognized is relevance.
pub fn to_sort_state(sort_param: Option<&str>) -> SortState {
    sort_param
        .and_then(|raw| raw.parse::<SortParam>().ok())
        .map(|param| param.sort_state())
        .unwrap_or_default()
}

pub fn sort_state_from_params(params: &QueryParams) -> SortState {
    to_sort_state(params.get(PARAM_SORT))
}

/// Copy of `params` with the `sort` key set.
pub fn with_sort(sort_param: SortParam, params: &QueryParams) -> QueryParams {
    let mut params = params.clone();
    params.set(PARAM_SORT, sort_param.as_str());
    params
}

pub fn sort_url(sort_param: SortParam, params: &QueryParams, path: &str) -> String {
    url_for(path, &with_sort(sort_param, params))
}

/// Option whose label the sort menu shows. Falls back to the first canonical
/// entry, which is not the same as the sort the backend runs with.
pub fn active_sort_option(params: &QueryParams) -> SortParam {
    params
        .get(PARAM_SORT)
        .and_then(|raw| SORT_OPTIONS.into_iter().find(|option| option.as_str() == raw))
        .unwrap_or(SORT_OPTIONS[0])
}
