use jiff::Timestamp;
use serde::Serialize;
use shorty_core::ShortKey;

/// A shortened URL as seen by callers.
///
/// Records are owned by the [`KeyStore`](crate::KeyStore); this is a
/// point-in-time copy and can only be obtained from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    original_url: String,
    short_key: ShortKey,
    created_at: Timestamp,
    access_count: u64,
}

impl UrlRecord {
    pub(crate) fn new(
        original_url: String,
        short_key: ShortKey,
        created_at: Timestamp,
        access_count: u64,
    ) -> Self {
        Self {
            original_url,
            short_key,
            created_at,
            access_count,
        }
    }

    /// The normalized URL that was shortened.
    pub fn original_url(&self) -> &str {
        &self.original_url
    }

    pub fn short_key(&self) -> &ShortKey {
        &self.short_key
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Successful resolutions at the time this copy was taken.
    pub fn access_count(&self) -> u64 {
        self.access_count
    }
}
