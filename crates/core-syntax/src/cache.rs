//! Span cache keyed by (line content, color mode).
//!
//! Hashing strategy: ahash64 over the raw line bytes plus the color mode. The
//! exact content is stored alongside the spans and compared on lookup, so a
//! hash collision costs a re-tokenize, never a wrong result. The whole cache
//! is dropped whenever `EditorSettings::revision` changes (tab width, mode,
//! keyword set) and when it reaches capacity.

use crate::{Span, tokenize};
use ahash::{AHashMap, AHasher};
use core_config::{ColorMode, EditorSettings};
use std::hash::{Hash, Hasher};

const DEFAULT_CAPACITY: usize = 4096;

#[derive(Debug)]
struct CacheEntry {
    content: Vec<u8>,
    spans: Vec<Span>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpanCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub clears: u64,
}

#[derive(Debug)]
pub struct SpanCache {
    entries: AHashMap<u64, CacheEntry>,
    capacity: usize,
    settings_revision: Option<u64>,
    stats: SpanCacheStats,
}

impl Default for SpanCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

fn key(line: &[u8], mode: ColorMode) -> u64 {
    let mut h = AHasher::default();
    line.hash(&mut h);
    mode.hash(&mut h);
    h.finish()
}

impl SpanCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: AHashMap::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity: capacity.max(1),
            settings_revision: None,
            stats: SpanCacheStats::default(),
        }
    }

    /// Spans for `line`; identical to `tokenize(line, settings)`.
    pub fn spans(&mut self, line: &[u8], settings: &EditorSettings) -> &[Span] {
        if self.settings_revision != Some(settings.revision()) {
            if !self.entries.is_empty() {
                self.clear();
            }
            self.settings_revision = Some(settings.revision());
        }
        let k = key(line, settings.color_mode());
        let fresh = self
            .entries
            .get(&k)
            .is_some_and(|entry| entry.content == line);
        if fresh {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            if self.entries.len() >= self.capacity {
                self.clear();
            }
            self.entries.insert(
                k,
                CacheEntry {
                    content: line.to_vec(),
                    spans: tokenize(line, settings),
                },
            );
        }
        &self.entries[&k].spans
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.clears += 1;
        tracing::trace!(target: "render.spans", clears = self.stats.clears, "span_cache_cleared");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> SpanCacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_after_first_lookup() {
        let settings = EditorSettings::default();
        let mut cache = SpanCache::new();
        let first = cache.spans(b"int a;", &settings).to_vec();
        let second = cache.spans(b"int a;", &settings).to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn settings_change_invalidates() {
        let mut settings = EditorSettings::default();
        let mut cache = SpanCache::new();
        cache.spans(b"int a;", &settings);
        settings.cycle_color_mode();
        let spans = cache.spans(b"int a;", &settings).to_vec();
        assert_eq!(spans, tokenize(b"int a;", &settings));
        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn capacity_bound_is_respected() {
        let settings = EditorSettings::default();
        let mut cache = SpanCache::with_capacity(2);
        cache.spans(b"a", &settings);
        cache.spans(b"b", &settings);
        cache.spans(b"c", &settings);
        assert!(cache.len() <= 2);
        assert_eq!(cache.spans(b"c", &settings), tokenize(b"c", &settings).as_slice());
    }
}
