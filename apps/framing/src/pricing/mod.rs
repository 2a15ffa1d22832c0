//! Pricing: the itemized multi-opening quote and the single-frame pricer it delegates to.

pub mod delegate;
pub mod engine;
pub mod handlers;
pub mod memo;

pub use delegate::{FramePricer, PerimeterFramePricer};
pub use engine::{FramePrice, PricingBreakdown, PricingEngine, PricingRequest, Quote, Surcharges};
pub use memo::{PricingKey, QuoteMemo};
