use crate::record::UrlRecord;
use shorty_core::Result;

/// The operations the HTTP layer needs from a shortener.
pub trait Shortener: Send + Sync + 'static {
    /// Returns the record for `raw_url`, creating it on first use.
    ///
    /// Fails with `InvalidInput` if the URL is blank, malformed or has no host.
    fn create_short_url(&self, raw_url: &str) -> Result<UrlRecord>;

    /// Resolves a short key and counts the access.
    ///
    /// Fails with `NotFound` if no record has this key.
    fn resolve(&self, short_key: &str) -> Result<UrlRecord>;
}
