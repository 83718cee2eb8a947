//! URL shortening, resolution and domain analytics.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::ScoredMember;
use crate::domain::errors::ShortenerError;
use crate::domain::short_key::{self, DOMAINS_KEY, ShortKey, URL_KEY_PATTERN};
use crate::domain::store::{KeyScan, KeyValueStore, StoreError};
use crate::utils::hostname::extract_hostname;

/// Number of keys requested per `SCAN` round when enumerating mappings.
pub const SCAN_BATCH_SIZE: usize = 10;

/// Default number of entries returned by [`ShortenerService::top_domains`].
pub const DEFAULT_TOP_DOMAINS: usize = 3;

/// What [`ShortenerService::delete_all`] removes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetScope {
    /// Flush the whole logical database, including keys owned by other services.
    #[default]
    Database,
    /// Delete only `url:*` mappings and the `domains` set.
    Namespace,
}

impl std::str::FromStr for ResetScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "database" => Ok(Self::Database),
            "namespace" => Ok(Self::Namespace),
            other => Err(format!(
                "reset scope must be 'database' or 'namespace', got '{other}'"
            )),
        }
    }
}

/// Shortening engine.
///
/// Stateless between calls: all state lives in the injected store, and each
/// operation is a short sequence of independent store primitives with no
/// transaction around them.
pub struct ShortenerService<S: ?Sized = dyn KeyValueStore> {
    store: Arc<S>,
    reset_scope: ResetScope,
}

impl<S: KeyValueStore + ?Sized> ShortenerService<S> {
    /// Creates a new service that flushes the whole database on reset.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            reset_scope: ResetScope::default(),
        }
    }

    pub fn with_reset_scope(mut self, reset_scope: ResetScope) -> Self {
        self.reset_scope = reset_scope;
        self
    }

    /// Shortens a URL and records its domain.
    ///
    /// # Steps
    ///
    /// 1. Extract the hostname (fails before anything is written)
    /// 2. Derive the short key from the exact URL bytes
    /// 3. Store `url:<key>` → URL, overwriting any colliding mapping
    /// 4. Increment the hostname's score in the `domains` set by 1
    ///
    /// Steps 3 and 4 are not atomic together: if the increment fails the
    /// mapping stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::UrlParse`] if the URL is not absolute or has no host.
    /// Returns [`ShortenerError::StoreWrite`] if either store write fails.
    pub async fn shorten(&self, original_url: &str) -> Result<ShortKey, ShortenerError> {
        let hostname =
            extract_hostname(original_url).map_err(|e| ShortenerError::UrlParse(e.to_string()))?;

        let key = ShortKey::derive(original_url);

        self.store
            .set(&key.storage_key(), original_url)
            .await
            .map_err(ShortenerError::StoreWrite)?;

        self.store
            .zincr_by(DOMAINS_KEY, 1.0, &hostname)
            .await
            .map_err(|e| {
                warn!(
                    "Mapping {} stored but domain count for {} not updated: {}",
                    key, hostname, e
                );
                ShortenerError::StoreWrite(e)
            })?;

        info!(short_key = %key, domain = %hostname, "Shortened URL");

        Ok(key)
    }

    /// Resolves a short key to the original URL.
    ///
    /// Any string is accepted as a key; malformed keys simply miss.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::NotFound`] if no mapping exists.
    /// Returns [`ShortenerError::StoreRead`] on other store failures.
    pub async fn redirect(&self, short_key: &str) -> Result<String, ShortenerError> {
        match self.store.get(&short_key::storage_key(short_key)).await {
            Ok(url) => {
                debug!("Resolved {} -> {}", short_key, url);
                Ok(url)
            }
            Err(StoreError::NotFound(_)) => {
                debug!("No mapping for {}", short_key);
                Err(ShortenerError::NotFound(short_key.to_string()))
            }
            Err(e) => Err(ShortenerError::StoreRead(e)),
        }
    }

    /// Returns the `limit` most shortened domains, highest count first.
    ///
    /// Equal counts are ordered by the store; both bundled backends order
    /// ties by member in reverse lexical order. A `limit` of 0 returns an
    /// empty list without querying the store.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::StoreRead`] if the range query fails.
    pub async fn top_domains(&self, limit: usize) -> Result<Vec<ScoredMember>, ShortenerError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let stop = i64::try_from(limit - 1).unwrap_or(i64::MAX);

        let mut top = self
            .store
            .zrev_range_with_scores(DOMAINS_KEY, 0, stop)
            .await
            .map_err(ShortenerError::StoreRead)?;

        top.truncate(limit);
        Ok(top)
    }

    /// Collects every URL mapping keyed by its storage key (`url:<key>`).
    ///
    /// Scans `url:*` in rounds of [`SCAN_BATCH_SIZE`] until the store
    /// reports the end of the scan, reading each key's value as it goes.
    /// Keys revisited by the scan overwrite their earlier entry. A key that
    /// disappears between the scan and the read is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::StoreRead`] on the first failed scan round
    /// or read. Partial results are discarded.
    pub async fn view_all(&self) -> Result<BTreeMap<String, String>, ShortenerError> {
        let mut mappings = BTreeMap::new();
        let mut scan = KeyScan::new(self.store.as_ref(), URL_KEY_PATTERN, SCAN_BATCH_SIZE);

        while let Some(batch) = scan.next_batch().await {
            let keys = batch.map_err(ShortenerError::StoreRead)?;

            for key in keys {
                match self.store.get(&key).await {
                    Ok(url) => {
                        mappings.insert(key, url);
                    }
                    Err(StoreError::NotFound(_)) => {
                        debug!("Key {} vanished during scan", key);
                    }
                    Err(e) => return Err(ShortenerError::StoreRead(e)),
                }
            }
        }

        debug!("Collected {} mappings", mappings.len());
        Ok(mappings)
    }

    /// Removes all mappings and domain counts.
    ///
    /// With [`ResetScope::Database`] this flushes the entire logical
    /// database. With [`ResetScope::Namespace`] only `url:*` keys and the
    /// `domains` set are deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenerError::StoreWrite`] if the flush or a delete fails,
    /// and [`ShortenerError::StoreRead`] if the namespace scan fails.
    pub async fn delete_all(&self) -> Result<(), ShortenerError> {
        match self.reset_scope {
            ResetScope::Database => {
                self.store
                    .flush_all()
                    .await
                    .map_err(ShortenerError::StoreWrite)?;
            }
            ResetScope::Namespace => {
                let mut keys = Vec::new();
                let mut scan =
                    KeyScan::new(self.store.as_ref(), URL_KEY_PATTERN, SCAN_BATCH_SIZE);

                while let Some(batch) = scan.next_batch().await {
                    keys.extend(batch.map_err(ShortenerError::StoreRead)?);
                }

                keys.sort_unstable();
                keys.dedup();
                keys.push(DOMAINS_KEY.to_string());

                self.store
                    .delete(&keys)
                    .await
                    .map_err(ShortenerError::StoreWrite)?;
            }
        }

        info!("All records deleted ({:?} scope)", self.reset_scope);
        Ok(())
    }

    /// Checks store connectivity.
    pub async fn health_check(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}

/// Builds the value returned to clients for a key.
///
/// Without a base URL the bare key is returned and the caller joins it with
/// its own host.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(short_url(None, "3641c5f2"), "3641c5f2");
/// assert_eq!(short_url(Some("https://s.example.com/"), "3641c5f2"), "https://s.example.com/3641c5f2");
/// ```
pub fn short_url(base_url: Option<&str>, short_key: &str) -> String {
    match base_url {
        Some(base_url) => format!("{}/{}", base_url.trim_end_matches('/'), short_key),
        None => short_key.to_string(),
    }
}
