use crate::parser::{ParseError, parse_scoreboard};
use crate::types::GameRecord;

use reqwest::Client;
use std::time::Duration;

/// Browser-identifying header the site expects. Fixed at client
/// construction; never mutated afterwards.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.162 Safari/537.36";

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
}

#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
    base_url: String,
}

impl WebScraper {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: crate::BASE_URL.to_string(),
        })
    }

    /// Fetch and parse the scoreboard for a date given as `YYYYMMDD`.
    /// The date is substituted into the URL verbatim.
    pub async fn fetch_scoreboard(&self, date: &str) -> Result<Vec<GameRecord>, ScraperError> {
        let url = format!("{}/football/scoreboard/_/date/{}", self.base_url, date);
        log::info!("Fetching scoreboard for {}...", date);
        let html = self.get_html(&url).await?;
        Ok(parse_scoreboard(&html)?)
    }

    async fn get_html(&self, url: &str) -> Result<String, ScraperError> {
        Ok(self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| log::error!("HTTP error: {e:?}"))?
            .error_for_status()?
            .text()
            .await
            .inspect_err(|e| log::error!("Decode error: {e:?}"))?)
    }
}
