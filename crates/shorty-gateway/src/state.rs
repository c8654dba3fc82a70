use std::sync::Arc;

use shorty_shortener::{DomainCounts, MetricsAggregator, Shortener};
use typed_builder::TypedBuilder;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SHORT_URL_PREFIX: &str = "/r/";

/// Public addressing of short URLs.
#[derive(Debug, Clone, TypedBuilder)]
pub struct GatewaySettings {
    /// Scheme and authority clients use to reach the gateway.
    #[builder(default = DEFAULT_BASE_URL.to_owned(), setter(into))]
    pub base_url: String,
    /// Path segment between the base URL and the short key.
    #[builder(default = DEFAULT_SHORT_URL_PREFIX.to_owned(), setter(into))]
    pub short_url_prefix: String,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    metrics: MetricsAggregator<dyn DomainCounts>,
    settings: Arc<GatewaySettings>,
}

impl AppState {
    /// Serves both shortening and metrics from the same store.
    pub fn new<S>(store: Arc<S>, settings: GatewaySettings) -> Self
    where
        S: Shortener + DomainCounts,
    {
        let shortener: Arc<dyn Shortener> = store.clone();
        let counts: Arc<dyn DomainCounts> = store;

        Self {
            shortener,
            metrics: MetricsAggregator::new(counts),
            settings: Arc::new(settings),
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn metrics(&self) -> &MetricsAggregator<dyn DomainCounts> {
        &self.metrics
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }
}
