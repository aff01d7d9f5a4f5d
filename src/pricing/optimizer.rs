use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::Result;
use crate::opportunity::{Opportunity, RiskLevel};

/// Markup for high-risk opportunities; priced more conservatively.
const HIGH_RISK_MARGIN: f64 = 0.25;
/// Markup for everything else.
const STANDARD_MARGIN: f64 = 0.30;

/// Historical pricing record for one sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorHistory {
    pub average_price: f64,
}

pub struct PricingOptimizer {
    historical_prices: HashMap<String, SectorHistory>,
    default_base_price: f64,
}

impl PricingOptimizer {
    pub fn new(default_base_price: f64) -> Self {
        Self {
            historical_prices: HashMap::new(),
            default_base_price,
        }
    }

    pub fn with_history(
        historical_prices: HashMap<String, SectorHistory>,
        default_base_price: f64,
    ) -> Self {
        Self {
            historical_prices,
            default_base_price,
        }
    }

    /// Reads a sector-to-history table from a JSON file.
    pub fn load_history(path: &Path) -> Result<HashMap<String, SectorHistory>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Computes an optimal price for each opportunity as
    /// `base * (1 + margin)`, with the margin chosen by risk level and the
    /// base taken from sector history (or the default when the sector has
    /// none).
    ///
    /// Sectors repeated in the input keep the last computed price. Lookups
    /// default and the arithmetic is total, so the whole batch always
    /// succeeds.
    pub fn optimize_prices(&self, opportunities: &[Opportunity]) -> HashMap<String, f64> {
        let mut optimized_prices = HashMap::new();

        for opportunity in opportunities {
            let margin = if opportunity.risk == RiskLevel::High {
                HIGH_RISK_MARGIN
            } else {
                STANDARD_MARGIN
            };

            let base_price = self
                .historical_prices
                .get(&opportunity.sector)
                .map(|history| history.average_price)
                .unwrap_or(self.default_base_price);

            let optimal_price = base_price * (1.0 + margin);
            debug!(
                "Priced {} at {:.2} (base {:.2}, margin {})",
                opportunity.sector, optimal_price, base_price, margin
            );
            optimized_prices.insert(opportunity.sector.clone(), optimal_price);
        }

        info!("Optimized prices for {} opportunities", opportunities.len());
        optimized_prices
    }
}
