//! Whole query string of a route, kept as an ordered multimap.

use std::fmt::Display;

use common::query_params::QueryParams;
use serde::{Deserialize, Serialize};

// The router spreads the query string into any type with Display and From<&str>
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlQuery(pub QueryParams);

impl From<QueryParams> for UrlQuery {
    fn from(value: QueryParams) -> Self {
        UrlQuery(value)
    }
}

impl From<&str> for UrlQuery {
    fn from(query: &str) -> Self {
        UrlQuery(QueryParams::parse(query))
    }
}

// Display the params in a way that can be parsed by From<&str>
impl Display for UrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_repeated_keys_in_order() {
        let query = UrlQuery::from("variantOption=Color%3ARed&sort=newest&variantOption=Size%3AM");
        assert_eq!(query.0.get_all("variantOption"), vec!["Color:Red", "Size:M"]);
        assert_eq!(UrlQuery::from(query.to_string().as_str()), query);
    }

    #[test]
    fn empty_query_is_default() {
        assert_eq!(UrlQuery::from(""), UrlQuery::default());
        assert_eq!(UrlQuery::default().to_string(), "");
    }
}
