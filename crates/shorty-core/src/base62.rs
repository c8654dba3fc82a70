//! Base62 encoding of the key generation counter.

/// Digits, then lowercase, then uppercase, so that `10` encodes to `a` and
/// `36` to `A`.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// `u64::MAX` needs 11 base62 digits.
const MAX_DIGITS: usize = 11;

/// Encodes `value` as a base62 token, most significant digit first.
///
/// Zero encodes to `"0"`; no other value has leading zeros.
///
/// # Examples
///
/// ```
/// use shorty_core::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(62), "10");
/// assert_eq!(encode(98), "1A");
/// ```
pub fn encode(value: u64) -> String {
    if value == 0 {
        return "0".to_owned();
    }

    let mut digits = Vec::with_capacity(MAX_DIGITS);
    let mut rest = value;
    while rest > 0 {
        digits.push(ALPHABET[(rest % BASE) as usize]);
        rest /= BASE;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}
