use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Number of domains reported by [`MetricsAggregator::top_domains`].
pub const TOP_DOMAINS_LIMIT: usize = 3;

/// A read-only view of per-domain shorten-call counters.
pub trait DomainCounts: Send + Sync + 'static {
    /// Returns a point-in-time copy of the counters.
    fn domain_counts(&self) -> HashMap<String, u64>;
}

impl DomainCounts for HashMap<String, u64> {
    fn domain_counts(&self) -> HashMap<String, u64> {
        self.clone()
    }
}

/// One entry of a domain ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

impl DomainCount {
    pub fn new(domain: impl Into<String>, count: u64) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }
}

/// Ranks domains by how often they were shortened.
///
/// Never mutates the source; each call ranks a fresh snapshot.
pub struct MetricsAggregator<S: ?Sized> {
    source: Arc<S>,
}

impl<S: ?Sized> Clone for MetricsAggregator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: DomainCounts + ?Sized> MetricsAggregator<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// The [`TOP_DOMAINS_LIMIT`] most shortened domains.
    pub fn top_domains(&self) -> Vec<DomainCount> {
        self.top_n(TOP_DOMAINS_LIMIT)
    }

    /// The `limit` most shortened domains, by count descending and then by
    /// domain name ascending.
    pub fn top_n(&self, limit: usize) -> Vec<DomainCount> {
        rank(self.source.domain_counts(), limit)
    }
}

fn rank(counts: HashMap<String, u64>, limit: usize) -> Vec<DomainCount> {
    let mut ranked: Vec<DomainCount> = counts
        .into_iter()
        .map(|(domain, count)| DomainCount { domain, count })
        .collect();

    ranked.sort_unstable_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.domain.cmp(&b.domain))
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregator(counts: &[(&str, u64)]) -> MetricsAggregator<HashMap<String, u64>> {
        let counts = counts
            .iter()
            .map(|(domain, count)| (domain.to_string(), *count))
            .collect();
        MetricsAggregator::new(Arc::new(counts))
    }

    #[test]
    fn empty() {
        assert!(aggregator(&[]).top_domains().is_empty());
    }

    #[test]
    fn fewer_than_limit() {
        let top = aggregator(&[("example.com", 5), ("google.com", 3)]).top_domains();

        assert_eq!(
            top,
            vec![
                DomainCount::new("example.com", 5),
                DomainCount::new("google.com", 3),
            ]
        );
    }

    #[test]
    fn more_than_limit() {
        let top = aggregator(&[
            ("example.com", 10),
            ("google.com", 8),
            ("github.com", 12),
            ("stackoverflow.com", 5),
            ("youtube.com", 3),
        ])
        .top_domains();

        assert_eq!(
            top,
            vec![
                DomainCount::new("github.com", 12),
                DomainCount::new("example.com", 10),
                DomainCount::new("google.com", 8),
            ]
        );
    }

    #[test]
    fn ties_break_alphabetically() {
        let top = aggregator(&[("google.com", 10), ("example.com", 10), ("aaa.com", 5)])
            .top_domains();

        let domains: Vec<&str> = top.iter().map(|d| d.domain.as_str()).collect();
        assert_eq!(domains, ["example.com", "google.com", "aaa.com"]);
    }

    #[test]
    fn ties_at_the_cut_off() {
        let top = aggregator(&[("d.com", 1), ("c.com", 1), ("b.com", 1), ("a.com", 2)])
            .top_domains();

        let domains: Vec<&str> = top.iter().map(|d| d.domain.as_str()).collect();
        assert_eq!(domains, ["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn top_n() {
        let metrics = aggregator(&[("a.com", 3), ("b.com", 2), ("c.com", 1)]);

        assert_eq!(metrics.top_n(1), vec![DomainCount::new("a.com", 3)]);
        assert!(metrics.top_n(0).is_empty());
        assert_eq!(metrics.top_n(10).len(), 3);
    }

    #[test]
    fn serializes_as_object() {
        let json = serde_json::to_value(DomainCount::new("a.com", 3)).unwrap();
        assert_eq!(json, serde_json::json!({ "domain": "a.com", "count": 3 }));
    }
}
