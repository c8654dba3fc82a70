use crate::metrics::DomainCounts;
use crate::record::UrlRecord;
use crate::shortener::Shortener;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use shorty_core::{NormalizedUrl, Result, ShortKey, ShortenerError};
use shorty_generator::{Generator, SeqGenerator};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// A stored URL mapping. Shared between both indexes.
#[derive(Debug)]
struct StoredUrl {
    original_url: String,
    short_key: ShortKey,
    created_at: Timestamp,
    access_count: AtomicU64,
}

impl StoredUrl {
    fn new(original_url: String, short_key: ShortKey) -> Self {
        Self {
            original_url,
            short_key,
            created_at: Timestamp::now(),
            access_count: AtomicU64::new(0),
        }
    }

    fn snapshot(&self) -> UrlRecord {
        self.to_record(self.access_count.load(Ordering::SeqCst))
    }

    /// Counts one access and returns a copy that includes it.
    fn record_access(&self) -> UrlRecord {
        let count = self.access_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.to_record(count)
    }

    fn to_record(&self, access_count: u64) -> UrlRecord {
        UrlRecord::new(
            self.original_url.clone(),
            self.short_key.clone(),
            self.created_at,
            access_count,
        )
    }
}

/// In-memory key store.
///
/// Keeps two indexes over the same records (normalized URL to record and
/// short key to record), a per-domain counter of shorten calls, and the key
/// generator. All state lives for as long as the store does.
///
/// DashMap shards its locks, so callers working on different URLs or keys
/// rarely contend. Creation for a given URL goes through the DashMap entry
/// API, which holds that URL's shard exclusively while the key is generated
/// and the record is published: concurrent callers racing on the same URL
/// all observe the single record created by the winner.
#[derive(Debug)]
pub struct KeyStore<G = SeqGenerator> {
    by_url: DashMap<String, Arc<StoredUrl>>,
    by_key: DashMap<ShortKey, Arc<StoredUrl>>,
    domains: DashMap<String, AtomicU64>,
    generator: G,
}

impl KeyStore<SeqGenerator> {
    /// Creates an empty store with a sequential generator starting at 0.
    pub fn new() -> Self {
        Self::with_generator(SeqGenerator::new())
    }

    /// Creates an empty store with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_url: DashMap::with_capacity(capacity),
            by_key: DashMap::with_capacity(capacity),
            domains: DashMap::new(),
            generator: SeqGenerator::new(),
        }
    }
}

impl Default for KeyStore<SeqGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Generator> KeyStore<G> {
    /// Creates an empty store issuing keys from `generator`.
    pub fn with_generator(generator: G) -> Self {
        Self {
            by_url: DashMap::new(),
            by_key: DashMap::new(),
            domains: DashMap::new(),
            generator,
        }
    }

    /// Returns the record for `raw_url`, creating it on first use.
    ///
    /// Every call that passes validation counts towards the URL's domain,
    /// including calls that return an existing record. A new key is only
    /// generated when no record exists yet for the normalized URL.
    pub fn create_short_url(&self, raw_url: &str) -> Result<UrlRecord> {
        let url = NormalizedUrl::parse(raw_url).inspect_err(|e| {
            debug!(error = %e, "rejected url");
        })?;

        self.count_domain(url.domain());

        if let Some(existing) = self.by_url.get(url.as_str()) {
            trace!(url = %url.as_str(), key = %existing.short_key, "url already shortened");
            return Ok(existing.snapshot());
        }

        let domain = url.domain().to_owned();
        match self.by_url.entry(url.into_string()) {
            Entry::Occupied(slot) => {
                let existing = slot.get();
                trace!(url = %existing.original_url, key = %existing.short_key, "url already shortened");
                Ok(existing.snapshot())
            }
            Entry::Vacant(slot) => {
                let key: ShortKey = self.generator.generate().into();
                let stored = Arc::new(StoredUrl::new(slot.key().clone(), key.clone()));

                // Publish by key first so that a key is resolvable as soon
                // as any caller can observe it.
                self.by_key.insert(key, Arc::clone(&stored));
                let record = stored.snapshot();
                slot.insert(stored);

                debug!(
                    url = %record.original_url(),
                    key = %record.short_key(),
                    domain = %domain,
                    "created short url"
                );
                Ok(record)
            }
        }
    }

    /// Resolves `short_key` and counts the access.
    ///
    /// The returned copy already includes this access.
    pub fn resolve(&self, short_key: &str) -> Result<UrlRecord> {
        let Some(stored) = self.by_key.get(short_key) else {
            debug!(key = %short_key, "short key not found");
            return Err(ShortenerError::not_found(short_key));
        };

        let record = stored.record_access();
        trace!(
            key = %short_key,
            url = %record.original_url(),
            access_count = record.access_count(),
            "resolved short key"
        );
        Ok(record)
    }

    /// Looks up `short_key` without counting an access.
    pub fn get(&self, short_key: &str) -> Option<UrlRecord> {
        self.by_key.get(short_key).map(|stored| stored.snapshot())
    }

    /// Returns a snapshot of the shorten-call count per domain.
    ///
    /// Each value was held by its counter at some point during the call;
    /// the snapshot as a whole is not taken at a single instant.
    pub fn domain_counts(&self) -> HashMap<String, u64> {
        self.domains
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().load(Ordering::SeqCst)))
            .collect()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    fn count_domain(&self, domain: &str) {
        if let Some(counter) = self.domains.get(domain) {
            counter.fetch_add(1, Ordering::SeqCst);
            return;
        }

        self.domains
            .entry(domain.to_owned())
            .or_default()
            .fetch_add(1, Ordering::SeqCst);
    }
}

impl<G: Generator> Shortener for KeyStore<G> {
    fn create_short_url(&self, raw_url: &str) -> Result<UrlRecord> {
        KeyStore::<G>::create_short_url(self, raw_url)
    }

    fn resolve(&self, short_key: &str) -> Result<UrlRecord> {
        KeyStore::<G>::resolve(self, short_key)
    }
}

impl<G: Generator> DomainCounts for KeyStore<G> {
    fn domain_counts(&self) -> HashMap<String, u64> {
        KeyStore::<G>::domain_counts(self)
    }
}
