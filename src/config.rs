use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::info;

use crate::error::{MarketSeerError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub news_url: String,
    pub social_media_url: String,
    pub financial_data_url: String,
    pub request_timeout_secs: u64,
    pub historical_prices_path: Option<PathBuf>,

    // Trend and pricing strategy settings
    pub sentiment_threshold: f64,
    pub default_base_price: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_url: "https://api.example.com/news".to_string(),
            social_media_url: "https://api.example.com/social-media-trend".to_string(),
            financial_data_url: "https://api.example.com/financial-data".to_string(),
            request_timeout_secs: 30,
            historical_prices_path: None,
            sentiment_threshold: 75.0,
            default_base_price: 100.0,
        }
    }
}

pub async fn load_config() -> Result<Config> {
    let mut config = Config::default();

    // Override defaults with environment variables
    if let Ok(news_url) = env::var("NEWS_API_URL") {
        config.news_url = news_url;
    }

    if let Ok(social_media_url) = env::var("SOCIAL_MEDIA_API_URL") {
        config.social_media_url = social_media_url;
    }

    if let Ok(financial_data_url) = env::var("FINANCIAL_DATA_API_URL") {
        config.financial_data_url = financial_data_url;
    }

    if let Ok(path) = env::var("HISTORICAL_PRICES_PATH") {
        config.historical_prices_path = Some(PathBuf::from(path));
    }

    if let Ok(timeout) = env::var("REQUEST_TIMEOUT_SECS") {
        config.request_timeout_secs = timeout.parse().map_err(|_| {
            MarketSeerError::config_error(format!(
                "REQUEST_TIMEOUT_SECS is not a valid integer: {}",
                timeout
            ))
        })?;
    }

    if let Ok(threshold) = env::var("SENTIMENT_THRESHOLD") {
        config.sentiment_threshold = threshold.parse().map_err(|_| {
            MarketSeerError::config_error(format!(
                "SENTIMENT_THRESHOLD is not a valid number: {}",
                threshold
            ))
        })?;
    }

    if let Ok(base_price) = env::var("DEFAULT_BASE_PRICE") {
        config.default_base_price = base_price.parse().map_err(|_| {
            MarketSeerError::config_error(format!(
                "DEFAULT_BASE_PRICE is not a valid number: {}",
                base_price
            ))
        })?;
    }

    info!("Configuration loaded");

    Ok(config)
}
