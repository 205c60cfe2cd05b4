//! Bidirectional mapping between filter descriptors and the query string.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::applied_filter::AppliedFilter;
use crate::filter_descriptor::{FilterDescriptor, format_price_bound, parse_price_bound};
use crate::facet::FacetType;
use crate::query_params::{QueryParams, url_for};
use crate::storefront_const::{
    KNOWN_ENUMERATED_FILTERS, PARAM_AVAILABLE, PARAM_MAX_PRICE, PARAM_MIN_PRICE, PARAM_VARIANT_OPTION,
};

/// Filters recovered from a query string, with one chip per recognized entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DecodedFilters {
    pub filters: Vec<FilterDescriptor>,
    pub applied_filters: Vec<AppliedFilter>,
}

/// Return a copy of `params` with `descriptor` encoded into it.
pub fn encode_filter(params: &QueryParams, descriptor: &FilterDescriptor) -> QueryParams {
    let mut params = params.clone();
    match descriptor {
        FilterDescriptor::Available { present } => {
            params.set(PARAM_AVAILABLE, present.to_string());
        }
        FilterDescriptor::Enumerated { key, value } => {
            params.set(key, value.clone());
        }
        FilterDescriptor::VariantOption { name, value } => {
            let entry = format!("{}:{}", name, value);
            if !params.get_all(PARAM_VARIANT_OPTION).contains(&entry.as_str()) {
                params.append(PARAM_VARIANT_OPTION, entry);
            }
        }
        FilterDescriptor::PriceRange { min, max } => {
            if let Some(min) = min {
                params.set(PARAM_MIN_PRICE, format_price_bound(*min));
            }
            if let Some(max) = max {
                params.set(PARAM_MAX_PRICE, format_price_bound(*max));
            }
        }
    }
    params
}

/// Walk every query entry and recover the filters it describes.
///
/// Unrecognized keys are ignored and malformed variant options are skipped.
/// Price bounds are collected after the walk into a single range.
pub fn decode_filters(params: &QueryParams) -> DecodedFilters {
    let mut decoded = DecodedFilters::default();

    for (key, value) in params.iter() {
        if key == PARAM_AVAILABLE {
            let present = value == "true";
            decoded.filters.push(FilterDescriptor::Available { present });
            let label = if present { "In stock" } else { "Out of stock" };
            decoded.applied_filters.push(AppliedFilter::new(label, key, value));
        } else if KNOWN_ENUMERATED_FILTERS.contains(&key) {
            decoded.filters.push(FilterDescriptor::Enumerated {
                key: key.to_string(),
                value: value.to_string(),
            });
            decoded.applied_filters.push(AppliedFilter::new(value, key, value));
        } else if key.contains(PARAM_VARIANT_OPTION) {
            let mut parts = value.split(':');
            let (Some(name), Some(option_value)) = (parts.next(), parts.next()) else {
                debug!("skipping malformed variant option {:?}", value);
                continue;
            };
            decoded.filters.push(FilterDescriptor::VariantOption {
                name: name.to_string(),
                value: option_value.to_string(),
            });
            decoded.applied_filters.push(AppliedFilter::new(option_value, key, value));
        }
    }

    let min_raw = params.get(PARAM_MIN_PRICE);
    let max_raw = params.get(PARAM_MAX_PRICE);
    if min_raw.is_some() || max_raw.is_some() {
        let min = min_raw.map(parse_price_bound);
        let max = max_raw.map(parse_price_bound);
        if let (Some(raw), Some(min)) = (min_raw, min) {
            decoded.applied_filters.push(AppliedFilter::new(
                format!("Min: ${}", format_price_bound(min)),
                PARAM_MIN_PRICE,
                raw,
            ));
        }
        if let (Some(raw), Some(max)) = (max_raw, max) {
            decoded.applied_filters.push(AppliedFilter::new(
                format!("Max: ${}", format_price_bound(max)),
                PARAM_MAX_PRICE,
                raw,
            ));
        }
        decoded.filters.push(FilterDescriptor::PriceRange { min, max });
    }

    decoded
}

/// URL that applies a facet value, or `None` when its input cannot be used.
pub fn filter_link(facet_type: FacetType, input: &str, params: &QueryParams, path: &str) -> Option<String> {
    match facet_type {
        FacetType::List | FacetType::Boolean | FacetType::PriceRange => {}
        FacetType::Unknown => {
            debug!("ignoring facet value of unknown type: {}", input);
            return None;
        }
    }
    match FilterDescriptor::from_facet_input(input) {
        Ok(descriptor) => Some(url_for(path, &encode_filter(params, &descriptor))),
        Err(e) => {
            debug!("ignoring facet value: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applied_filter::UrlParam;
    use crate::query_params::Location;

    #[test]
    fn enumerated_and_available_round_trip() {
        let cases = [
            FilterDescriptor::Available { present: true },
            FilterDescriptor::Available { present: false },
            FilterDescriptor::Enumerated { key: "productVendor".into(), value: "Acme & Co".into() },
            FilterDescriptor::Enumerated { key: "productType".into(), value: "Snowboard".into() },
        ];
        for descriptor in cases {
            let encoded = encode_filter(&QueryParams::new(), &descriptor);
            let reparsed = QueryParams::parse(&encoded.to_string());
            let decoded = decode_filters(&reparsed);
            assert_eq!(decoded.filters, vec![descriptor.clone()]);
            let (key, value) = encoded.iter().next().unwrap();
            assert_eq!(
                decoded.applied_filters[0].url_param,
                UrlParam { key: key.to_string(), value: value.to_string() }
            );
        }
    }

    #[test]
    fn enumerated_filter_replaces_previous_value() {
        let params = QueryParams::from_pairs([("productType", "shoes")]);
        let descriptor = FilterDescriptor::Enumerated { key: "productType".into(), value: "shirts".into() };
        assert_eq!(encode_filter(&params, &descriptor).get_all("productType"), vec!["shirts"]);
    }

    #[test]
    fn variant_option_append_is_idempotent() {
        let red = FilterDescriptor::VariantOption { name: "Color".into(), value: "Red".into() };
        let blue = FilterDescriptor::VariantOption { name: "Color".into(), value: "Blue".into() };
        let once = encode_filter(&QueryParams::new(), &red);
        let twice = encode_filter(&once, &red);
        assert_eq!(twice.get_all("variantOption"), vec!["Color:Red"]);
        let both = encode_filter(&twice, &blue);
        assert_eq!(both.get_all("variantOption"), vec!["Color:Red", "Color:Blue"]);
    }

    #[test]
    fn price_range_sets_only_defined_bounds() {
        let params = QueryParams::from_pairs([("maxPrice", "80")]);
        let encoded = encode_filter(&params, &FilterDescriptor::PriceRange { min: Some(10.0), max: None });
        assert_eq!(encoded.get("minPrice"), Some("10"));
        assert_eq!(encoded.get("maxPrice"), Some("80"));
    }

    #[test]
    fn decode_labels() {
        let params = QueryParams::parse(
            "available=false&productVendor=Acme&variantOption=Color%3ARed&minPrice=10&maxPrice=50.5&q=boots",
        );
        let decoded = decode_filters(&params);
        let labels = decoded.applied_filters.iter().map(|f| f.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Out of stock", "Acme", "Red", "Min: $10", "Max: $50.5"]);
        assert_eq!(decoded.applied_filters[2].url_param.value, "Color:Red");
        assert_eq!(
            decoded.filters.last(),
            Some(&FilterDescriptor::PriceRange { min: Some(10.0), max: Some(50.5) })
        );
    }

    #[test]
    fn decode_skips_malformed_variant_options() {
        let params = QueryParams::from_pairs([
            ("variantOption", "no-colon"),
            ("variantOption", "Size:L"),
        ]);
        let decoded = decode_filters(&params);
        assert_eq!(
            decoded.filters,
            vec![FilterDescriptor::VariantOption { name: "Size".into(), value: "L".into() }]
        );
        assert_eq!(decoded.applied_filters.len(), 1);
    }

    #[test]
    fn garbage_price_decodes_to_zero() {
        let params = QueryParams::from_pairs([("maxPrice", "lots")]);
        let decoded = decode_filters(&params);
        assert_eq!(decoded.filters, vec![FilterDescriptor::PriceRange { min: None, max: Some(0.0) }]);
        assert_eq!(decoded.applied_filters[0].label, "Max: $0");
        assert_eq!(decoded.applied_filters[0].url_param.value, "lots");
    }

    #[test]
    fn filter_link_applies_input() {
        let params = QueryParams::from_pairs([("sort", "newest")]);
        let url = filter_link(
            FacetType::List,
            r#"{"variantOption":{"name":"Size","value":"M"}}"#,
            &params,
            "/collections/all",
        )
        .unwrap();
        let location = Location::parse(&url);
        assert_eq!(location.path, "/collections/all");
        assert_eq!(location.params.get("sort"), Some("newest"));
        assert_eq!(location.params.get("variantOption"), Some("Size:M"));
    }

    #[test]
    fn filter_link_is_none_for_bad_input() {
        let params = QueryParams::new();
        assert_eq!(filter_link(FacetType::List, "{oops", &params, "/"), None);
        assert_eq!(filter_link(FacetType::Unknown, r#"{"available":true}"#, &params, "/"), None);
    }
}
