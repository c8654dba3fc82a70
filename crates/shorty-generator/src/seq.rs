use crate::Generator;
use shorty_core::{base62, ShortKey};
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequential short key generator.
///
/// Holds a counter that starts at 0. Each [`generate`](Generator::generate)
/// call increments it with a single atomic `fetch_add` and base62 encodes the
/// new value, so keys come out as `"1"`, `"2"`, ... `"Z"`, `"10"`, ...
/// Two concurrent calls can never observe the same counter value.
#[derive(Debug, Default)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys issued so far, i.e. the current counter value.
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl Generator for SeqGenerator {
    type Output = ShortKey;

    fn generate(&self) -> ShortKey {
        let value = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        ShortKey::from(base62::encode(value))
    }
}
