use tracing::{error, info};

use super::{Opportunity, Potential, RiskLevel};
use crate::analysis::TrendAnalyzer;
use crate::intel::MarketDataStore;

pub struct OpportunityIdentifier {
    analyzer: TrendAnalyzer,
    sentiment_threshold: f64,
}

impl OpportunityIdentifier {
    pub fn new(analyzer: TrendAnalyzer, sentiment_threshold: f64) -> Self {
        Self {
            analyzer,
            sentiment_threshold,
        }
    }

    /// Scans the gathered intelligence for candidate opportunities.
    ///
    /// Runs a fresh trend analysis on every call; an absent or failed
    /// analysis counts as zero sentiment. When sentiment strictly exceeds the
    /// threshold this policy emits its single known opportunity (Technology,
    /// high potential, medium risk) and nothing else.
    pub fn identify_opportunities(&self, store: &MarketDataStore) -> Vec<Opportunity> {
        if store.is_empty() {
            error!("No market intelligence available for analysis");
            return Vec::new();
        }

        let sentiment_score = self
            .analyzer
            .analyze_trends(store)
            .map(|trend| trend.sentiment_score)
            .unwrap_or(0.0);

        let mut opportunities = Vec::new();
        if sentiment_score > self.sentiment_threshold {
            opportunities.push(Opportunity {
                sector: "Technology".to_string(),
                potential: Potential::High,
                risk: RiskLevel::Medium,
            });
        }

        info!("Identified {} opportunities", opportunities.len());
        opportunities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::Source;
    use serde_json::json;

    fn identifier() -> OpportunityIdentifier {
        OpportunityIdentifier::new(TrendAnalyzer::new(75.0), 75.0)
    }

    fn store_with_positive_ratio(positive: usize, total: usize) -> MarketDataStore {
        let articles: Vec<_> = (0..total)
            .map(|i| {
                if i < positive {
                    json!({"content": "positive outlook"})
                } else {
                    json!({"content": "markets flat"})
                }
            })
            .collect();

        let mut store = MarketDataStore::new();
        store.insert(Source::News, json!(articles));
        store.insert(Source::SocialMedia, json!({"trending": ["ai"]}));
        store
    }

    #[test]
    fn empty_store_yields_no_opportunities() {
        let store = MarketDataStore::new();
        assert!(identifier().identify_opportunities(&store).is_empty());
    }

    #[test]
    fn high_sentiment_yields_exactly_the_technology_opportunity() {
        let store = store_with_positive_ratio(8, 8);

        let opportunities = identifier().identify_opportunities(&store);

        assert_eq!(
            opportunities,
            vec![Opportunity {
                sector: "Technology".to_string(),
                potential: Potential::High,
                risk: RiskLevel::Medium,
            }]
        );
    }

    #[test]
    fn sentiment_exactly_at_threshold_yields_nothing() {
        // 3 of 4 positive -> score 75.0, not strictly above 75.0
        let store = store_with_positive_ratio(3, 4);
        assert!(identifier().identify_opportunities(&store).is_empty());
    }

    #[test]
    fn low_sentiment_yields_nothing() {
        let store = store_with_positive_ratio(1, 4);
        assert!(identifier().identify_opportunities(&store).is_empty());
    }

    #[test]
    fn failed_analysis_counts_as_zero_sentiment() {
        // Non-empty store, but no social media entry: analysis returns None
        let mut store = MarketDataStore::new();
        store.insert(Source::News, json!([{"content": "positive"}]));

        assert!(identifier().identify_opportunities(&store).is_empty());
    }
}
