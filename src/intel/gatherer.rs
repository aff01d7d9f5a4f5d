use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::Result;
use crate::intel::sample;
use crate::intel::store::{MarketDataStore, Source};

/// Collects raw market data from the configured external feeds and records it
/// in a [`MarketDataStore`].
pub struct MarketIntelligenceGatherer {
    client: Client,
    news_url: String,
    social_media_url: String,
    financial_data_url: String,
    offline: bool,
}

impl MarketIntelligenceGatherer {
    pub fn new(config: &Config, offline: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            news_url: config.news_url.clone(),
            social_media_url: config.social_media_url.clone(),
            financial_data_url: config.financial_data_url.clone(),
            offline,
        })
    }

    fn endpoint_for(&self, source: Source) -> &str {
        match source {
            Source::News => &self.news_url,
            Source::SocialMedia => &self.social_media_url,
            Source::FinancialData => &self.financial_data_url,
        }
    }

    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json::<Value>().await?)
    }

    /// Fetches market data for one source and records it under that source's
    /// key in the store.
    ///
    /// Returns the entire current store on success, not just the new entry.
    /// On any transport or parse failure the error is logged and `None` is
    /// returned, with the store left exactly as it was (no partial write).
    /// Names that match no known source are a no-op and return the store
    /// as-is.
    pub async fn fetch_market_data<'a>(
        &self,
        source: &str,
        store: &'a mut MarketDataStore,
    ) -> Option<&'a MarketDataStore> {
        let source = match Source::parse(source) {
            Some(source) => source,
            None => {
                debug!("Ignoring unknown market data source: {}", source);
                return Some(store);
            }
        };

        if self.offline {
            store.insert(source, sample::payload_for(source));
            info!("Stored simulated data for {}", source);
            return Some(store);
        }

        match self.fetch_json(self.endpoint_for(source)).await {
            Ok(payload) => {
                store.insert(source, payload);
                info!("Successfully fetched data from {}", source);
                Some(store)
            }
            Err(e) => {
                error!("Failed to fetch data from {}: {}", source, e);
                None
            }
        }
    }
}
