#![forbid(unsafe_code)]

//! LRU measurement cache with generation-based invalidation.
//!
//! A re-fit measures many repeated candidate strings: layout, refresh, and
//! min-size passes all re-wrap the same text, and the binary search probes
//! overlapping prefixes across passes. [`MeasureCache`] sits transparently
//! between the host's measurement backend and the fitter and amortizes
//! those probes.
//!
//! # Key schema
//!
//! | Field       | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `text_hash` | FxHash of the candidate string               |
//! | `text_len`  | Byte length (collision avoidance)            |
//! | `style_id`  | Style discriminant (size/face affect widths) |
//!
//! Entries are additionally stamped with the generation at insertion time.
//!
//! # Invalidation
//!
//! When measurement conditions change globally (font swap, DPI change,
//! zoom), the caller bumps the generation via [`MeasureCache::invalidate`].
//! Stale entries are not removed eagerly — they are treated as misses and
//! lazily replaced on next access, making invalidation O(1).
//!
//! # Thread safety
//!
//! The cache is not `Sync`. For multi-threaded use, wrap it in a `Mutex`
//! or keep per-thread instances.

use std::cell::{Cell, RefCell};
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;

use crate::measure::TextMeasure;
use labelfit_core::{Extent, TextStyle};

/// Deterministic cache key for measured extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MeasureKey {
    /// FxHash of the text content.
    text_hash: u64,
    /// Byte length of the text (collision avoidance with the hash).
    text_len: u32,
    /// Style discriminant.
    style_id: u64,
}

impl MeasureKey {
    fn new(text: &str, style: &TextStyle) -> Self {
        let mut hasher = FxHasher::default();
        text.hash(&mut hasher);
        Self {
            text_hash: hasher.finish(),
            text_len: text.len() as u32,
            style_id: style.style_id(),
        }
    }
}

/// Cached extent with its generation stamp.
#[derive(Debug, Clone, Copy)]
struct CachedExtent {
    extent: Extent,
    generation: u64,
}

/// Statistics for the measurement cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasureCacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses (triggered a backend measurement).
    pub misses: u64,
    /// Number of stale entries replaced due to generation mismatch.
    pub stale_evictions: u64,
    /// Current number of entries in the cache.
    pub size: usize,
    /// Maximum capacity of the cache.
    pub capacity: usize,
    /// Current invalidation generation.
    pub generation: u64,
}

impl MeasureCacheStats {
    /// Hit rate as a fraction (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache wrapping a measurement backend.
///
/// Implements [`TextMeasure`] itself, so it drops in anywhere a backend is
/// expected — in particular as the measurer behind a
/// [`Fitter`](crate::flow::Fitter).
pub struct MeasureCache<M: TextMeasure> {
    inner: M,
    cache: RefCell<LruCache<MeasureKey, CachedExtent>>,
    generation: Cell<u64>,
    hits: Cell<u64>,
    misses: Cell<u64>,
    stale_evictions: Cell<u64>,
    capacity: usize,
}

impl<M: TextMeasure> MeasureCache<M> {
    /// Wrap a backend with a cache of the given capacity (at least 1).
    pub fn new(inner: M, capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: RefCell::new(LruCache::new(cap)),
            generation: Cell::new(0),
            hits: Cell::new(0),
            misses: Cell::new(0),
            stale_evictions: Cell::new(0),
            capacity: cap.get(),
        }
    }

    /// Bump the generation counter, invalidating all cached entries.
    ///
    /// Stale entries are lazily replaced on next access rather than removed
    /// eagerly. Call this when the font set, DPI, or zoom level changes.
    pub fn invalidate(&mut self) {
        self.generation.set(self.generation.get() + 1);
    }

    /// Drop all cached entries and reset statistics.
    pub fn clear(&mut self) {
        self.cache.borrow_mut().clear();
        self.generation.set(self.generation.get() + 1);
        self.hits.set(0);
        self.misses.set(0);
        self.stale_evictions.set(0);
    }

    /// The wrapped backend.
    #[inline]
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwrap into the backend.
    pub fn into_inner(self) -> M {
        self.inner
    }

    /// Current cache statistics.
    pub fn stats(&self) -> MeasureCacheStats {
        MeasureCacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
            stale_evictions: self.stale_evictions.get(),
            size: self.cache.borrow().len(),
            capacity: self.capacity,
            generation: self.generation.get(),
        }
    }
}

impl<M: TextMeasure> TextMeasure for MeasureCache<M> {
    fn measure(&self, text: &str, style: &TextStyle) -> Extent {
        let key = MeasureKey::new(text, style);
        let generation = self.generation.get();
        let mut cache = self.cache.borrow_mut();

        if let Some(entry) = cache.get(&key) {
            if entry.generation == generation {
                self.hits.set(self.hits.get() + 1);
                return entry.extent;
            }
            // Stale entry from an older generation — replace below.
            self.stale_evictions.set(self.stale_evictions.get() + 1);
        }

        self.misses.set(self.misses.get() + 1);
        let extent = self.inner.measure(text, style);
        cache.put(key, CachedExtent { extent, generation });
        extent
    }
}
