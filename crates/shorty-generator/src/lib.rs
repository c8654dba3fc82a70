pub mod seq;

pub use seq::SeqGenerator;

use shorty_core::ShortKey;

/// Trait for generating short keys.
///
/// Implementations are pure generators that don't interact with storage.
/// Every call must yield a key that was never handed out before by the
/// same instance, including under concurrent callers.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<ShortKey>;

    /// Generates a value that converts into a unique short key.
    fn generate(&self) -> Self::Output;
}
