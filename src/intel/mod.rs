pub mod gatherer;
pub mod sample;
pub mod store;

pub use gatherer::MarketIntelligenceGatherer;
pub use store::{MarketDataStore, Source};
