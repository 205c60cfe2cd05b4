//! Typed description of a single product filter predicate.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterDescriptor {
    Available { present: bool },
    /// Single valued attribute such as vendor or product type.
    Enumerated { key: String, value: String },
    VariantOption { name: String, value: String },
    /// May be transiently empty while the user edits the range.
    PriceRange { min: Option<f64>, max: Option<f64> },
}

#[derive(Debug, thiserror::Error)]
pub enum FilterInputError {
    #[error("malformed filter input: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("unsupported filter input: {0}")]
    Unsupported(#[source] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
enum FacetInput {
    Available(bool),
    ProductVendor(String),
    ProductType(String),
    VariantOption(VariantOptionInput),
    Price(PriceInput),
}

#[derive(Debug, Deserialize)]
struct VariantOptionInput {
    name: String,
    value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PriceInput {
    min: Option<f64>,
    max: Option<f64>,
}

impl FilterDescriptor {
    /// Parse the JSON `input` attached to a facet value.
    pub fn from_facet_input(input: &str) -> Result<Self, FilterInputError> {
        let parsed: FacetInput = serde_json::from_str(input).map_err(|e| {
            if e.is_data() {
                FilterInputError::Unsupported(e)
            } else {
                FilterInputError::Malformed(e)
            }
        })?;
        let descriptor = match parsed {
            FacetInput::Available(present) => Self::Available { present },
            FacetInput::ProductVendor(value) => Self::Enumerated {
                key: crate::storefront_const::PARAM_PRODUCT_VENDOR.to_string(),
                value,
            },
            FacetInput::ProductType(value) => Self::Enumerated {
                key: crate::storefront_const::PARAM_PRODUCT_TYPE.to_string(),
                value,
            },
            FacetInput::VariantOption(VariantOptionInput { name, value }) => Self::VariantOption { name, value },
            FacetInput::Price(PriceInput { min, max }) => Self::PriceRange { min, max },
        };
        Ok(descriptor)
    }

    /// The `ProductFilter` input object the commerce API expects.
    pub fn to_product_filter(&self) -> Value {
        match self {
            Self::Available { present } => json!({ "available": present }),
            Self::Enumerated { key, value } => {
                let mut object = Map::new();
                object.insert(key.clone(), Value::String(value.clone()));
                Value::Object(object)
            }
            Self::VariantOption { name, value } => json!({
                "variantOption": { "name": name, "value": value }
            }),
            Self::PriceRange { min, max } => {
                let mut price = Map::new();
                if let Some(min) = min {
                    price.insert("min".to_string(), json!(min));
                }
                if let Some(max) = max {
                    price.insert("max".to_string(), json!(max));
                }
                json!({ "price": price })
            }
        }
    }
}

/// Lenient numeric parse used for price bounds: anything that is not a finite
/// number becomes `0` rather than dropping the bound.
pub fn parse_price_bound(raw: &str) -> f64 {
    match raw.trim() {
        "" => 0.0,
        trimmed => trimmed
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
    }
}

/// Shortest decimal form, `10` rather than `10.0`.
pub fn format_price_bound(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_supported_input() {
        assert_eq!(
            FilterDescriptor::from_facet_input(r#"{"available":true}"#).unwrap(),
            FilterDescriptor::Available { present: true }
        );
        assert_eq!(
            FilterDescriptor::from_facet_input(r#"{"productVendor":"Hydrogen"}"#).unwrap(),
            FilterDescriptor::Enumerated { key: "productVendor".into(), value: "Hydrogen".into() }
        );
        assert_eq!(
            FilterDescriptor::from_facet_input(r#"{"productType":"Shoes"}"#).unwrap(),
            FilterDescriptor::Enumerated { key: "productType".into(), value: "Shoes".into() }
        );
        assert_eq!(
            FilterDescriptor::from_facet_input(r#"{"variantOption":{"name":"Color","value":"Red"}}"#).unwrap(),
            FilterDescriptor::VariantOption { name: "Color".into(), value: "Red".into() }
        );
        assert_eq!(
            FilterDescriptor::from_facet_input(r#"{"price":{"min":0,"max":600}}"#).unwrap(),
            FilterDescriptor::PriceRange { min: Some(0.0), max: Some(600.0) }
        );
    }

    #[test]
    fn malformed_and_unknown_inputs_are_errors() {
        assert!(matches!(
            FilterDescriptor::from_facet_input("{not json"),
            Err(FilterInputError::Malformed(_))
        ));
        assert!(matches!(
            FilterDescriptor::from_facet_input(r#"{"productMetafield":{"namespace":"a","key":"b","value":"c"}}"#),
            Err(FilterInputError::Unsupported(_))
        ));
    }

    #[test]
    fn product_filter_shapes() {
        let price = FilterDescriptor::PriceRange { min: Some(10.0), max: None };
        assert_eq!(price.to_product_filter(), json!({"price": {"min": 10.0}}));
        let vendor = FilterDescriptor::Enumerated { key: "productVendor".into(), value: "Acme".into() };
        assert_eq!(vendor.to_product_filter(), json!({"productVendor": "Acme"}));
    }

    #[test]
    fn price_bounds_fail_open_to_zero() {
        assert_eq!(parse_price_bound("25"), 25.0);
        assert_eq!(parse_price_bound(" 7.5 "), 7.5);
        assert_eq!(parse_price_bound(""), 0.0);
        assert_eq!(parse_price_bound("abc"), 0.0);
        assert_eq!(parse_price_bound("inf"), 0.0);
        assert_eq!(format_price_bound(10.0), "10");
        assert_eq!(format_price_bound(10.5), "10.5");
    }
}
