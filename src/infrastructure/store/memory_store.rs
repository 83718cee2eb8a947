//! In-process store implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry as MapEntry;
use tracing::debug;

use crate::domain::entities::ScoredMember;
use crate::domain::store::{KeyValueStore, ScanPage, StoreError};

const WRONG_TYPE: &str = "WRONGTYPE Operation against a key holding the wrong kind of value";

#[derive(Debug, Clone)]
enum Value {
    String(String),
    SortedSet(HashMap<String, f64>),
}

/// A keyspace entry tagged with its creation sequence number.
///
/// Scan cursors are sequence numbers, so a key keeps its position for as
/// long as it exists.
#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    value: Value,
}

/// In-memory implementation of [`KeyValueStore`] using `DashMap`.
///
/// Mirrors the Redis semantics the service relies on: one keyspace shared by
/// strings and sorted sets, `WRONGTYPE` errors on type mismatches, reverse
/// range ordering by score with ties in reverse lexical member order, and
/// cursor scans that terminate with cursor 0.
///
/// Nothing is persisted; data lives as long as the process.
#[derive(Debug)]
pub struct MemoryStore {
    entries: DashMap<String, Entry>,
    next_seq: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using MemoryStore (data is not persisted)");
        Self {
            entries: DashMap::new(),
            next_seq: AtomicU64::new(1),
        }
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self.entries.entry(key.to_string()) {
            MapEntry::Occupied(mut occupied) => {
                occupied.get_mut().value = Value::String(value.to_string());
            }
            MapEntry::Vacant(vacant) => {
                vacant.insert(Entry {
                    seq: self.next_seq(),
                    value: Value::String(value.to_string()),
                });
            }
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        match self.entries.get(key).map(|entry| entry.value.clone()) {
            Some(Value::String(value)) => Ok(value),
            Some(Value::SortedSet(_)) => Err(StoreError::Backend(WRONG_TYPE.to_string())),
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    async fn zincr_by(&self, set: &str, delta: f64, member: &str) -> Result<(), StoreError> {
        match self.entries.entry(set.to_string()) {
            MapEntry::Occupied(mut occupied) => match &mut occupied.get_mut().value {
                Value::SortedSet(members) => {
                    *members.entry(member.to_string()).or_insert(0.0) += delta;
                    Ok(())
                }
                Value::String(_) => Err(StoreError::Backend(WRONG_TYPE.to_string())),
            },
            MapEntry::Vacant(vacant) => {
                let members = HashMap::from([(member.to_string(), delta)]);
                vacant.insert(Entry {
                    seq: self.next_seq(),
                    value: Value::SortedSet(members),
                });
                Ok(())
            }
        }
    }

    async fn zrev_range_with_scores(
        &self,
        set: &str,
        start: i64,
        stop: i64,
    ) -> Result<Vec<ScoredMember>, StoreError> {
        let mut ranked: Vec<ScoredMember> = match self.entries.get(set) {
            Some(entry) => match &entry.value {
                Value::SortedSet(members) => members
                    .iter()
                    .map(|(member, score)| ScoredMember::new(member.clone(), *score))
                    .collect(),
                Value::String(_) => return Err(StoreError::Backend(WRONG_TYPE.to_string())),
            },
            None => return Ok(Vec::new()),
        };

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.member.cmp(&a.member))
        });

        Ok(match rank_bounds(ranked.len(), start, stop) {
            Some((first, last)) => ranked.drain(first..=last).collect(),
            None => Vec::new(),
        })
    }

    async fn scan(
        &self,
        cursor: u64,
        pattern: &str,
        count: usize,
    ) -> Result<ScanPage, StoreError> {
        let mut matching: Vec<(u64, String)> = self
            .entries
            .iter()
            .filter(|entry| entry.seq >= cursor && glob_match(pattern, entry.key()))
            .map(|entry| (entry.seq, entry.key().clone()))
            .collect();
        matching.sort_unstable();

        let page_size = count.max(1);
        let next_cursor = matching.get(page_size).map_or(0, |(seq, _)| *seq);
        matching.truncate(page_size);

        Ok(ScanPage {
            keys: matching.into_iter().map(|(_, key)| key).collect(),
            next_cursor,
        })
    }

    async fn delete(&self, keys: &[String]) -> Result<(), StoreError> {
        for key in keys {
            self.entries.remove(key);
        }
        Ok(())
    }

    async fn flush_all(&self) -> Result<(), StoreError> {
        self.entries.clear();
        debug!("MemoryStore flushed");
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Resolves Redis-style inclusive ranks (negative counts from the end)
/// against a collection of `len` items.
fn rank_bounds(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = i64::try_from(len).ok()?;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };

    if len == 0 || start > stop || start >= len {
        return None;
    }

    Some((usize::try_from(start).ok()?, usize::try_from(stop).ok()?))
}

/// Glob matching with `*` (any run) and `?` (any single character).
fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some('?') => {
                p += 1;
                t += 1;
            }
            Some(&c) if c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, matched)) => {
                    p = star + 1;
                    t = matched + 1;
                    backtrack = Some((star, matched + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_prefix() {
        assert!(glob_match("url:*", "url:3641c5f2"));
        assert!(glob_match("url:*", "url:"));
        assert!(!glob_match("url:*", "domains"));
        assert!(!glob_match("url:*", "xurl:abc"));
    }

    #[test]
    fn test_glob_question_mark_and_inner_star() {
        assert!(glob_match("u?l:*", "url:a"));
        assert!(glob_match("*:a*c", "url:abbbc"));
        assert!(!glob_match("*:a*c", "url:abbbd"));
        assert!(glob_match("domains", "domains"));
    }

    #[test]
    fn test_rank_bounds() {
        assert_eq!(rank_bounds(5, 0, 2), Some((0, 2)));
        assert_eq!(rank_bounds(2, 0, 2), Some((0, 1)));
        assert_eq!(rank_bounds(5, 0, -1), Some((0, 4)));
        assert_eq!(rank_bounds(5, -2, -1), Some((3, 4)));
        assert_eq!(rank_bounds(0, 0, 2), None);
        assert_eq!(rank_bounds(5, 3, 1), None);
        assert_eq!(rank_bounds(5, 7, 9), None);
    }

    #[tokio::test]
    async fn test_wrong_type_errors() {
        let store = MemoryStore::new();
        store.set("url:abc", "https://a.com").await.unwrap();
        store.zincr_by("domains", 1.0, "a.com").await.unwrap();

        assert!(matches!(
            store.zincr_by("url:abc", 1.0, "a.com").await,
            Err(StoreError::Backend(_))
        ));
        assert!(matches!(
            store.get("domains").await,
            Err(StoreError::Backend(_))
        ));
    }

    #[tokio::test]
    async fn test_set_replaces_sorted_set() {
        let store = MemoryStore::new();
        store.zincr_by("k", 1.0, "m").await.unwrap();
        store.set("k", "v").await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), "v");
        assert_eq!(store.len(), 1);
    }
}
