use chrono::Utc;
use serde_json::{json, Value};

use crate::intel::store::Source;

/// Simulated feed payload for a source, used in offline runs.
pub fn payload_for(source: Source) -> Value {
    match source {
        Source::News => simulate_news(),
        Source::SocialMedia => simulate_social_media(),
        Source::FinancialData => simulate_financial_data(),
    }
}

fn simulate_news() -> Value {
    // Fixed headline set with a positive/neutral mix so the sentiment score
    // lands in a plausible mid range run after run
    let headlines = [
        "Chipmakers report positive quarterly results across the board",
        "Analysts flag positive momentum in enterprise cloud spending",
        "Retail sales miss expectations as consumers pull back",
        "Energy prices steady while supply concerns ease",
        "Startup funding shows positive rebound after two flat quarters",
        "Markets open flat ahead of central bank rate decision",
    ];

    let articles: Vec<Value> = headlines
        .iter()
        .map(|headline| {
            json!({
                "content": headline,
                "mentions": rand::random::<u32>() % 500,
                "published_at": Utc::now().to_rfc3339(),
            })
        })
        .collect();

    Value::Array(articles)
}

fn simulate_social_media() -> Value {
    let engagement = 0.4 + rand::random::<f64>() * 0.5; // 0.4 to 0.9

    json!({
        "trending_topics": ["ai", "semiconductors", "cloud"],
        "engagement_index": engagement,
        "sample_size": 1000 + rand::random::<u32>() % 9000,
        "collected_at": Utc::now().to_rfc3339(),
    })
}

fn simulate_financial_data() -> Value {
    let index_change = rand::random::<f64>() * 4.0 - 2.0; // -2% to +2%

    json!({
        "index": "TECH500",
        "level": 4300.0 + rand::random::<f64>() * 200.0,
        "change_24h_pct": index_change,
        "volume": rand::random::<u32>() % 1_000_000,
        "collected_at": Utc::now().to_rfc3339(),
    })
}
