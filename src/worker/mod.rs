//! Enrichment routing and rate-limited delivery

pub mod dispatch;
pub mod router;

pub use dispatch::{DISPATCH_BATCH_SIZE, DISPATCH_COOLDOWN, RateLimitedDispatcher};
pub use router::{EnrichmentRouter, Messages};
