//! Facets as returned by the commerce API for a collection or search.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacetType {
    List,
    PriceRange,
    Boolean,
    /// Filter types added upstream after this code was written.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub id: String,
    #[serde(rename = "type")]
    pub facet_type: FacetType,
    pub label: String,
    #[serde(default)]
    pub values: Vec<FacetValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub count: u64,
    /// JSON encoded filter input, passed back untouched when the value is picked.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_facet() {
        let raw = r#"{
            "id": "filter.v.option.color",
            "type": "LIST",
            "label": "Color",
            "values": [
                {"id": "filter.v.option.color.red", "label": "Red", "count": 4,
                 "input": "{\"variantOption\":{\"name\":\"Color\",\"value\":\"Red\"}}"}
            ]
        }"#;
        let facet: Facet = serde_json::from_str(raw).unwrap();
        assert_eq!(facet.facet_type, FacetType::List);
        assert_eq!(facet.values[0].count, 4);
    }

    #[test]
    fn unknown_type_is_kept_as_unknown() {
        let raw = r#"{"id": "x", "type": "SOMETHING_NEW", "label": "X"}"#;
        let facet: Facet = serde_json::from_str(raw).unwrap();
        assert_eq!(facet.facet_type, FacetType::Unknown);
        assert!(facet.values.is_empty());
    }
}
