//! Core types for the Shorty URL shortener.
//!
//! This crate provides the base62 encoder, the short key type, URL
//! normalization and the error type shared by the key store and the
//! HTTP gateway.

pub mod base62;
pub mod error;
pub mod normalize;
pub mod shortkey;

pub use error::{Result, ShortenerError};
pub use normalize::NormalizedUrl;
pub use shortkey::ShortKey;
