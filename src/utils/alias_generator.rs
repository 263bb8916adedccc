//! Random alias generation.
//!
//! Aliases are drawn uniformly from a 62-symbol alphanumeric alphabet. The
//! generator keeps no state between calls; collision handling is left to
//! [`crate::application::services::AliasStore`].

use rand::Rng;

/// Symbols an alias may be built from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated aliases unless configured otherwise.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Generates a random alias of exactly `length` characters.
///
/// Each character is chosen independently with the calling thread's RNG, so
/// concurrent callers never share mutable state. A `length` of zero yields an
/// empty string.
///
/// # Examples
///
/// ```
/// use alias_shortener::utils::alias_generator::generate;
///
/// let alias = generate(6);
/// assert_eq!(alias.len(), 6);
/// assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
