use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::error::{MarketSeerError, Result};
use crate::intel::{MarketDataStore, Source};

/// Coarse trend label derived from the sentiment score. The model has no
/// downward state; anything at or below the threshold reads as neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendPrediction {
    Upward,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendResult {
    pub timestamp: DateTime<Utc>,
    pub sentiment_score: f64,
    pub trend_prediction: TrendPrediction,
}

#[derive(Clone)]
pub struct TrendAnalyzer {
    upward_threshold: f64,
}

impl TrendAnalyzer {
    pub fn new(upward_threshold: f64) -> Self {
        Self { upward_threshold }
    }

    /// Recomputes the sentiment score and trend label from the current store.
    ///
    /// Sentiment is the percentage of news articles whose content mentions
    /// "positive". Requires both the news and social media sources to be
    /// present; returns `None` (with an error log) when they are missing or
    /// the news feed cannot be scored. Results are never cached.
    pub fn analyze_trends(&self, store: &MarketDataStore) -> Option<TrendResult> {
        if !store.contains(Source::News) || !store.contains(Source::SocialMedia) {
            error!("Insufficient data sources for trend analysis");
            return None;
        }

        match self.score_news(store) {
            Ok(result) => {
                info!(
                    "Trend analysis complete: sentiment {:.1}, {:?}",
                    result.sentiment_score, result.trend_prediction
                );
                Some(result)
            }
            Err(e) => {
                error!("Error in trend analysis: {}", e);
                None
            }
        }
    }

    fn score_news(&self, store: &MarketDataStore) -> Result<TrendResult> {
        let news = store
            .get(Source::News)
            .ok_or_else(|| MarketSeerError::analysis_error("news data missing"))?;
        let articles = news
            .as_array()
            .ok_or_else(|| MarketSeerError::analysis_error("news payload is not an article list"))?;

        // Zero articles would divide by zero; treated as a scoring failure
        if articles.is_empty() {
            return Err(MarketSeerError::analysis_error(
                "news feed contains no articles, sentiment score undefined",
            ));
        }

        let mut positive_mentions = 0usize;
        for article in articles {
            let content = article
                .get("content")
                .and_then(Value::as_str)
                .ok_or_else(|| MarketSeerError::analysis_error("news article has no content field"))?;
            if content.contains("positive") {
                positive_mentions += 1;
            }
        }

        let sentiment_score = positive_mentions as f64 / articles.len() as f64 * 100.0;
        let trend_prediction = if sentiment_score > self.upward_threshold {
            TrendPrediction::Upward
        } else {
            TrendPrediction::Neutral
        };

        Ok(TrendResult {
            timestamp: Utc::now(),
            sentiment_score,
            trend_prediction,
        })
    }
}
