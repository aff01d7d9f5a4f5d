pub mod trends;

pub use trends::{TrendAnalyzer, TrendPrediction, TrendResult};
