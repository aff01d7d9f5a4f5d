pub mod optimizer;

pub use optimizer::{PricingOptimizer, SectorHistory};
