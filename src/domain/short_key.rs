//! Deterministic short key derivation.
//!
//! A short key is the first [`SHORT_KEY_LEN`] lowercase hex characters of the
//! SHA-256 digest of the original URL, taken over its exact bytes. No
//! normalization is applied, so `https://EXAMPLE.com` and `https://example.com`
//! map to different keys.

use sha2::{Digest, Sha256};
use std::fmt;

/// Number of hex characters kept from the digest.
pub const SHORT_KEY_LEN: usize = 8;

/// Namespace prefix for URL mapping keys in the store.
pub const URL_KEY_PREFIX: &str = "url:";

/// Scan pattern matching every URL mapping key.
pub const URL_KEY_PATTERN: &str = "url:*";

/// Name of the sorted set holding per-domain shorten counts.
pub const DOMAINS_KEY: &str = "domains";

/// Short identifier derived from a URL's content hash.
///
/// Keys are not globally unique: two URLs whose digests share the same
/// 32-bit prefix collide, and the later mapping overwrites the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortKey(String);

impl ShortKey {
    /// Derives the short key for `original_url`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let key = ShortKey::derive("abc");
    /// assert_eq!(key.as_str(), "ba7816bf");
    /// ```
    pub fn derive(original_url: &str) -> Self {
        let digest = Sha256::digest(original_url.as_bytes());
        Self(hex::encode(&digest[..SHORT_KEY_LEN / 2]))
    }

    /// Recovers the short key from a `url:`-prefixed storage key.
    ///
    /// Returns `None` for keys outside the URL namespace.
    pub fn from_storage_key(storage_key: &str) -> Option<Self> {
        storage_key
            .strip_prefix(URL_KEY_PREFIX)
            .map(|key| Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Store key under which the mapping for this short key lives.
    pub fn storage_key(&self) -> String {
        storage_key(&self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ShortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds the store key for an arbitrary (possibly malformed) short key.
///
/// Redirect lookups accept any string, so this does not go through
/// [`ShortKey`].
pub fn storage_key(short_key: &str) -> String {
    format!("{URL_KEY_PREFIX}{short_key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_known_vector() {
        assert_eq!(ShortKey::derive("abc").as_str(), "ba7816bf");
        assert_eq!(
            ShortKey::derive("https://example.com/page").as_str(),
            "3641c5f2"
        );
    }

    #[test]
    fn test_derive_is_deterministic() {
        let first = ShortKey::derive("https://a.com/1");
        let second = ShortKey::derive("https://a.com/1");
        assert_eq!(first, second);
    }

    #[test]
    fn test_derive_is_case_sensitive() {
        assert_eq!(
            ShortKey::derive("https://EXAMPLE.com/page").as_str(),
            "a4ad1082"
        );
        assert_ne!(
            ShortKey::derive("https://EXAMPLE.com/page"),
            ShortKey::derive("https://example.com/page")
        );
    }

    #[test]
    fn test_derive_shape() {
        let key = ShortKey::derive("https://b.com/x");
        assert_eq!(key.as_str().len(), SHORT_KEY_LEN);
        assert!(
            key.as_str()
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_derive_empty_input() {
        assert_eq!(ShortKey::derive("").as_str(), "e3b0c442");
    }

    #[test]
    fn test_storage_key_roundtrip() {
        let key = ShortKey::derive("https://a.com/2");
        assert_eq!(key.storage_key(), "url:eb7b8ca6");
        assert_eq!(ShortKey::from_storage_key(&key.storage_key()), Some(key));
    }

    #[test]
    fn test_from_storage_key_outside_namespace() {
        assert!(ShortKey::from_storage_key("domains").is_none());
    }
}
