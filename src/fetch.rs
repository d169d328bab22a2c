// src/fetch.rs
use std::time::Duration;

use eyre::{eyre, Result};
use reqwest::{Client, StatusCode};
use tracing::{info, warn};

/// Fetch one decoded transaction from the transaction API, with retries and
/// a timeout. Returns the raw JSON document so fixtures are stored verbatim.
pub async fn get_transaction(api_url: &str, hash: &str) -> Result<serde_json::Value> {
    let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
    let url = format!("{api_url}/transactions/{hash}");

    for attempt in 1..=3 {
        info!("Fetching transaction {} (attempt {})", hash, attempt);

        match client.get(&url).send().await {
            Ok(resp) => {
                if resp.status() == StatusCode::NOT_FOUND {
                    return Err(eyre!("transaction {} not found", hash));
                }
                if resp.status() != StatusCode::OK {
                    return Err(eyre!("transaction API error: HTTP {}", resp.status()));
                }
                return Ok(resp.json().await?);
            }
            Err(e) if attempt < 3 => {
                warn!("Request failed (attempt {}): {}. Retrying...", attempt, e);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
            Err(e) => return Err(eyre!("request failed after 3 attempts: {}", e)),
        }
    }

    Err(eyre!("unreachable: retries exhausted"))
}
