use std::time::Duration;
use reqwest::{Client, ClientBuilder};
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, Result};

/// Sentinel returned when the news API has nothing for the topic.
pub const NO_NEWS_FOUND: &str = "No recent news found.";

const MAX_HEADLINES: usize = 5;

/// Client for the Currents latest-news API.
pub struct NewsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    pub fn new(config: &Config) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key: config.currents_api_key.clone(),
            base_url: config.currents_base_url.clone(),
        }
    }

    /// Fetches recent English-language headlines matching the topic and joins
    /// the first 5 titles with newlines. Returns [`NO_NEWS_FOUND`] when the
    /// API has no matching articles.
    pub async fn fetch_headlines(&self, topic: &str) -> Result<String> {
        let url = format!("{}/v1/latest-news", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("language", "en"),
                ("keywords", topic),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::NewsError(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| AppError::NewsError(e.to_string()))?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::NewsError(e.to_string()))?;

        let articles = json["news"].as_array().cloned().unwrap_or_default();
        if articles.is_empty() {
            info!("No articles found for topic: {}", topic);
            return Ok(NO_NEWS_FOUND.to_string());
        }

        info!("Fetched {} articles for topic: {}", articles.len(), topic);

        // Missing title fields become empty strings, not errors
        let headlines = articles
            .iter()
            .take(MAX_HEADLINES)
            .map(|article| article["title"].as_str().unwrap_or("").to_string())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(headlines)
    }
}
