use serde::{Serialize, Serializer};
use smol_str::SmolStr;
use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// A short key identifying one stored URL.
///
/// Keys are issued by a generator and never change once assigned. They are
/// stored inline: a base62 encoded `u64` is at most 11 bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct ShortKey(SmolStr);

impl ShortKey {
    /// Wraps an already generated key.
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(SmolStr::new(key))
    }

    /// Returns the short key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the public short URL, e.g. `http://localhost:8080` + `/r/` + key.
    pub fn to_url(&self, base_url: &str, prefix: &str) -> String {
        let base_url = base_url.trim_end_matches('/');
        if prefix.starts_with('/') {
            format!("{}{}{}", base_url, prefix, self)
        } else {
            format!("{}/{}{}", base_url, prefix, self)
        }
    }
}

// Hashes exactly like `str` so lookups through `Borrow<str>` agree.
impl Hash for ShortKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Borrow<str> for ShortKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for ShortKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for ShortKey {
    fn from(value: String) -> Self {
        Self(SmolStr::from(value))
    }
}

impl std::fmt::Debug for ShortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortKey").field(&self.0.as_str()).finish()
    }
}

impl Display for ShortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn display() {
        let key = ShortKey::new("1A");
        assert_eq!(key.to_string(), "1A");
        assert_eq!(format!("{:?}", key), "ShortKey(\"1A\")");
    }

    #[test]
    fn to_url() {
        let key = ShortKey::new("abc");
        assert_eq!(
            key.to_url("http://localhost:8080", "/r/"),
            "http://localhost:8080/r/abc"
        );
        assert_eq!(
            key.to_url("http://localhost:8080/", "/r/"),
            "http://localhost:8080/r/abc"
        );
        assert_eq!(key.to_url("https://s.io", "go/"), "https://s.io/go/abc");
    }

    #[test]
    fn lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ShortKey::new("b"), 11);

        assert_eq!(map.get("b"), Some(&11));
        assert_eq!(map.get("B"), None);
    }
}
