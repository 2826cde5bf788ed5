use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, USER_AGENT};
use std::time::Duration;

use crate::config::FetchConfig;
use crate::error::RecipeError;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, RecipeError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, config.user_agent.parse()?);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    pub fn fetch(&self, url: &str) -> Result<String, RecipeError> {
        debug!("Fetching {}", url);
        let html = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(html)
    }
}

/// Turns a bare or partial recipe URL into `https://www.<host>/...`.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    if rest.starts_with("www.") {
        format!("https://{}", rest)
    } else {
        format!("https://www.{}", rest)
    }
}
