use crate::error::{Result, ShortenerError};
use url::Url;

/// A validated absolute URL in its canonical string form.
///
/// The canonical form is the trimmed input text once it has been accepted by
/// the parser. Parsing is only used to check that a scheme and a host are
/// present and to extract the host for domain metrics; the text itself is not
/// rewritten, so `https://example.com` does not gain a trailing `/`.
///
/// Text the parser would silently repair is rejected instead: inner
/// whitespace or control characters, and an authority that is missing or
/// empty (`https:example.com`, `https:///example.com`). Two accepted inputs
/// that differ as text therefore never denote the same parsed URL through
/// such a repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    url: String,
    domain: String,
}

impl NormalizedUrl {
    /// Validates `raw` and returns its normalized form.
    ///
    /// Fails with [`ShortenerError::InvalidInput`] when the input is blank,
    /// cannot be parsed as an absolute URL, contains inner whitespace or
    /// control characters, or has no explicit host.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ShortenerError::invalid_input("URL cannot be empty"));
        }

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ShortenerError::invalid_input(
                "URL must not contain whitespace or control characters",
            ));
        }

        let parsed = Url::parse(trimmed).map_err(|e| {
            ShortenerError::invalid_input(format!("malformed URL '{}': {}", trimmed, e))
        })?;

        let domain = match parsed.host_str() {
            Some(host) if !host.is_empty() && has_authority(trimmed, parsed.scheme()) => {
                host.to_ascii_lowercase()
            }
            _ => {
                return Err(ShortenerError::invalid_input(
                    "URL must include scheme and host",
                ))
            }
        };

        Ok(Self {
            url: trimmed.to_owned(),
            domain,
        })
    }

    /// The canonical URL, used as the idempotency key.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The lower-cased host.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn into_string(self) -> String {
        self.url
    }
}

/// Whether `text` spells out `scheme://authority` with a non-empty authority.
///
/// The parser fills in a host for special schemes even when the slashes are
/// missing, doubled or written as backslashes.
fn has_authority(text: &str, scheme: &str) -> bool {
    text.get(scheme.len()..)
        .and_then(|rest| rest.strip_prefix("://"))
        .is_some_and(|authority| !authority.is_empty() && !authority.starts_with(['/', '\\']))
}
