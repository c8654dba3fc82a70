//! In-memory URL shortener.
//!
//! [`KeyStore`] issues base62 short keys from a monotonically increasing
//! counter, guarantees one key per normalized URL under concurrent callers,
//! resolves keys while counting accesses and counts shorten calls per domain.
//! [`MetricsAggregator`] ranks those domain counters.

pub mod metrics;
pub mod record;
pub mod shortener;
pub mod store;

pub use metrics::{DomainCount, DomainCounts, MetricsAggregator, TOP_DOMAINS_LIMIT};
pub use record::UrlRecord;
pub use shortener::Shortener;
pub use shorty_core::{Result, ShortKey, ShortenerError};
pub use store::KeyStore;
