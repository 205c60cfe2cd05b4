//! Applied filters shown as removable chips.

use serde::{Deserialize, Serialize};

use crate::query_params::{QueryParams, url_for};
use crate::storefront_const::PARAM_VARIANT_OPTION;

/// Exact key/value pair that has to leave the query string to undo a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParam {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedFilter {
    pub label: String,
    pub url_param: UrlParam,
}

impl AppliedFilter {
    pub fn new(label: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url_param: UrlParam { key: key.into(), value: value.into() },
        }
    }
}

/// URL of the current page with `filter` removed and every other param left alone.
///
/// Variant options are matched by substring: every `variantOption` entry that
/// contains the filter's value is dropped and the survivors are re-appended in
/// their original order. Any other key is deleted outright.
pub fn removal_url(filter: &AppliedFilter, current_params: &QueryParams, current_path: &str) -> String {
    let mut params = current_params.clone();
    let UrlParam { key, value } = &filter.url_param;

    if key == PARAM_VARIANT_OPTION {
        let remaining = params
            .get_all(PARAM_VARIANT_OPTION)
            .into_iter()
            .filter(|option| !option.contains(value.as_str()))
            .map(str::to_string)
            .collect::<Vec<_>>();
        params.delete(key);
        for option in remaining {
            params.append(key, option);
        }
    } else {
        params.delete(key);
    }

    url_for(current_path, &params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_params::Location;

    #[test]
    fn removal_is_surgical() {
        let params = QueryParams::from_pairs([("productType", "shoes"), ("available", "true")]);
        let filter = AppliedFilter::new("In stock", "available", "true");
        let url = removal_url(&filter, &params, "/collections/all");
        assert_eq!(url, "/collections/all?productType=shoes");
        // caller's params untouched
        assert!(params.has("available"));
    }

    #[test]
    fn removes_only_matching_variant_options() {
        let params = QueryParams::from_pairs([
            ("variantOption", "Color:Red"),
            ("sort", "newest"),
            ("variantOption", "Color:Blue"),
        ]);
        let filter = AppliedFilter::new("Red", "variantOption", "Color:Red");
        let location = Location::parse(&removal_url(&filter, &params, "/collections/all"));
        assert_eq!(location.params.get_all("variantOption"), vec!["Color:Blue"]);
        assert_eq!(location.params.get("sort"), Some("newest"));
    }

    #[test]
    fn variant_removal_matches_substrings() {
        let params = QueryParams::from_pairs([
            ("variantOption", "Color:Red"),
            ("variantOption", "Color:Redux"),
            ("variantOption", "Size:M"),
        ]);
        let filter = AppliedFilter::new("Red", "variantOption", "Red");
        let location = Location::parse(&removal_url(&filter, &params, "/search"));
        assert_eq!(location.params.get_all("variantOption"), vec!["Size:M"]);
    }

    #[test]
    fn removing_last_param_keeps_question_mark() {
        let params = QueryParams::from_pairs([("minPrice", "10")]);
        let filter = AppliedFilter::new("Min: $10", "minPrice", "10");
        assert_eq!(removal_url(&filter, &params, "/collections/all"), "/collections/all?");
    }
}
