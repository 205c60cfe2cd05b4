//! Ordered query string multimap and the location it belongs to.
//!
//! [`QueryParams`] behaves like the browser's `URLSearchParams`: keys may repeat,
//! insertion order is kept, and serialization uses
//! `application/x-www-form-urlencoded`. Functions in this crate never mutate a
//! caller's params; they clone, edit the clone and hand back a new value.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string. A leading `?` is ignored, `+` decodes to a space.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    pub fn from_pairs<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Replace the first entry for `key` in place and drop the others,
    /// or append when the key is absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    /// Remove every entry stored under `key`.
    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let serialized = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish();
        write!(f, "{}", serialized)
    }
}

/// Path plus query params of the page currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub params: QueryParams,
}

impl Location {
    pub fn new(path: impl Into<String>, params: QueryParams) -> Self {
        Self { path: path.into(), params }
    }

    /// Split `"/path?query#hash"` into a location; the fragment is dropped.
    pub fn parse(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or("");
        match url.split_once('?') {
            Some((path, query)) => Self::new(path, QueryParams::parse(query)),
            None => Self::new(url, QueryParams::new()),
        }
    }

    /// `path?query`; the `?` is kept even when there are no params.
    pub fn to_url(&self) -> String {
        url_for(&self.path, &self.params)
    }
}

pub fn url_for(path: &str, params: &QueryParams) -> String {
    format!("{}?{}", path, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_order_and_duplicates() {
        let params = QueryParams::parse("?variantOption=Color%3ARed&available=true&variantOption=Size:M");
        assert_eq!(params.get_all("variantOption"), vec!["Color:Red", "Size:M"]);
        assert_eq!(params.get("available"), Some("true"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn parse_decodes_plus_as_space() {
        let params = QueryParams::parse("productType=Snow+Boards");
        assert_eq!(params.get("productType"), Some("Snow Boards"));
    }

    #[test]
    fn set_replaces_first_and_drops_rest() {
        let mut params = QueryParams::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);
        params.set("a", "9");
        assert_eq!(params.to_string(), "a=9&b=2");
    }

    #[test]
    fn set_appends_missing_key() {
        let mut params = QueryParams::from_pairs([("a", "1")]);
        params.set("sort", "newest");
        assert_eq!(params.to_string(), "a=1&sort=newest");
    }

    #[test]
    fn delete_removes_all_values() {
        let mut params = QueryParams::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);
        params.delete("a");
        assert_eq!(params.to_string(), "b=2");
        assert!(!params.has("a"));
    }

    #[test]
    fn display_uses_form_encoding() {
        let params = QueryParams::from_pairs([("variantOption", "Color:Dark Red")]);
        assert_eq!(params.to_string(), "variantOption=Color%3ADark+Red");
    }

    #[test]
    fn location_parse_and_url() {
        let location = Location::parse("/collections/all?available=true#top");
        assert_eq!(location.path, "/collections/all");
        assert_eq!(location.params.get("available"), Some("true"));
        assert_eq!(location.to_url(), "/collections/all?available=true");

        let bare = Location::parse("/collections/all");
        assert!(bare.params.is_empty());
        assert_eq!(bare.to_url(), "/collections/all?");
    }
}
