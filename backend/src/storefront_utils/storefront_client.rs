use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{error, info};

use crate::storefront_utils::raw_types::RawGraphQlResponse;
use crate::storefront_utils::response_cache::response_cache;

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub store_domain: String,
    pub api_token: String,
    pub api_version: String,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self {
            store_domain: std::env::var("PUBLIC_STORE_DOMAIN").unwrap_or("hydrogen-preview.myshopify.com".to_string()),
            api_token: std::env::var("PUBLIC_STOREFRONT_API_TOKEN").unwrap_or_default(),
            api_version: std::env::var("PUBLIC_STOREFRONT_API_VERSION").unwrap_or("2023-07".to_string()),
        }
    }

    pub fn graphql_url(&self) -> String {
        let domain = self
            .store_domain
            .trim_start_matches("https://")
            .trim_end_matches('/');
        format!("https://{}/api/{}/graphql.json", domain, self.api_version)
    }
}

/// Run a storefront GraphQL query and decode its `data`.
///
/// Identical request bodies within the cache TTL are answered from memory.
pub async fn storefront_query<T: DeserializeOwned>(query: &str, variables: serde_json::Value) -> anyhow::Result<T> {
    let body = json!({ "query": query, "variables": variables }).to_string();
    let query_hash = sha256::digest(body.clone());

    if let Some(cached_response) = response_cache().get(&query_hash).await {
        if let Ok(data) = decode_response::<T>(&cached_response) {
            info!("STOREFRONT CACHE HIT: {}", query_hash);
            return Ok(data);
        }
    }
    info!("STOREFRONT CACHE MISS: {}", query_hash);

    let config = StorefrontConfig::from_env();
    let t0 = std::time::Instant::now();
    let client = reqwest::Client::new();
    let response = client
        .post(config.graphql_url())
        .header("Content-Type", "application/json")
        .header("X-Shopify-Storefront-Access-Token", config.api_token.clone())
        .body(body)
        .send()
        .await?;
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        error!("storefront request failed: {}", status);
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    let dt_ms = t0.elapsed().as_millis();

    let data = decode_response::<T>(&response_txt)?;
    response_cache().insert(query_hash.clone(), response_txt).await;
    info!("STOREFRONT CACHE INSERTED: {} (fetched in {}ms)", query_hash, dt_ms);
    Ok(data)
}

fn decode_response<T: DeserializeOwned>(response_txt: &str) -> anyhow::Result<T> {
    let response: RawGraphQlResponse<T> =
        serde_json::from_str(response_txt).context("decoding storefront response")?;
    if !response.errors.is_empty() {
        let messages = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        anyhow::bail!("Storefront GraphQL error: {}", messages);
    }
    response.data.context("storefront response without data")
}
