//! Lazy, cursor-driven enumeration of store keys.

use super::{KeyValueStore, StoreError};

/// A finite sequence of key batches produced by repeated `SCAN` calls.
///
/// Each call to [`KeyScan::next_batch`] issues one scan round. The sequence
/// ends after the store returns cursor 0, or right after the first error.
/// [`KeyScan::restart`] rewinds to cursor 0.
pub struct KeyScan<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    pattern: String,
    batch_size: usize,
    cursor: u64,
    finished: bool,
}

impl<'a, S: KeyValueStore + ?Sized> KeyScan<'a, S> {
    pub fn new(store: &'a S, pattern: impl Into<String>, batch_size: usize) -> Self {
        Self {
            store,
            pattern: pattern.into(),
            batch_size,
            cursor: 0,
            finished: false,
        }
    }

    /// Fetches the next batch of keys.
    ///
    /// Returns `None` once the scan is exhausted. Batches may be empty while
    /// the scan is still in progress.
    pub async fn next_batch(&mut self) -> Option<Result<Vec<String>, StoreError>> {
        if self.finished {
            return None;
        }

        match self
            .store
            .scan(self.cursor, &self.pattern, self.batch_size)
            .await
        {
            Ok(page) => {
                if page.next_cursor == 0 {
                    self.finished = true;
                }
                self.cursor = page.next_cursor;
                Some(Ok(page.keys))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }

    pub fn restart(&mut self) {
        self.cursor = 0;
        self.finished = false;
    }
}
