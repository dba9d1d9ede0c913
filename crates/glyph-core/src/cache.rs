//! Region cache keyed by full character identity

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::character::TextCharacter;
use crate::error::GlyphResult;
use crate::sheet::GlyphRegion;

/// Populated at most once; holding its lock is what makes a population in flight
type Slot = Mutex<Option<Arc<GlyphRegion>>>;

/// Hit/miss counters, as observed since creation or the last [`RegionCache::clear`]
///
/// `misses` counts lookups that found their key's entry empty, not crop+chain
/// runs. A cold fetch of a decorated identity misses twice (its own key, then
/// the undecorated key that actually runs the chain) and leaves two entries
/// sharing one region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Memoizes chain-transformed (undecorated) glyph regions.
///
/// Safe to share between threads. A concurrent miss on the same identity
/// waits on that identity's slot instead of repeating the work, and never
/// observes a half-built region. Entries are never evicted.
///
/// Keys do not name the font, so a cache serves exactly one font at a time;
/// [`crate::SpriteFont::new`] claims it and dropping the font releases it.
#[derive(Default)]
pub struct RegionCache {
    slots: Mutex<HashMap<TextCharacter, Arc<Slot>>>,
    hits: AtomicU64,
    misses: AtomicU64,
    claimed: AtomicBool,
}

// Slots only ever hold complete regions, so a panic elsewhere cannot leave
// them inconsistent and the poison flag can be ignored.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("Region cache lock poisoned, recovering");
        poisoned.into_inner()
    })
}

impl std::fmt::Debug for RegionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionCache")
            .field("stats", &self.stats())
            .finish()
    }
}

impl RegionCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: &TextCharacter) -> Option<Arc<Slot>> {
        lock(&self.slots).get(key).cloned()
    }

    fn slot_or_insert(&self, key: &TextCharacter) -> Arc<Slot> {
        lock(&self.slots).entry(key.clone()).or_default().clone()
    }

    /// Mark the cache as owned by a font. False if another font holds it.
    pub(crate) fn claim(&self) -> bool {
        self.claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn release(&self) {
        self.claimed.store(false, Ordering::Release);
    }

    /// Whether a live font currently owns this cache
    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }

    pub fn retrieve_if_present(&self, key: &TextCharacter) -> Option<Arc<GlyphRegion>> {
        let slot = self.slot(key)?;
        let region = lock(&slot).clone();
        region
    }

    /// Insert unless an entry already exists. Returns the region that ended up
    /// in the cache; a losing writer gets the winner's region back and its own
    /// is dropped.
    pub fn store(&self, key: &TextCharacter, region: GlyphRegion) -> Arc<GlyphRegion> {
        let slot = self.slot_or_insert(key);
        let mut guard = lock(&slot);
        guard.get_or_insert_with(|| Arc::new(region)).clone()
    }

    /// Return the cached region for `key`, running `populate` on a miss.
    ///
    /// `populate` runs at most once per key even under concurrent callers. If
    /// it fails nothing is stored and the error is returned.
    pub fn get_or_populate<F, R>(&self, key: &TextCharacter, populate: F) -> GlyphResult<Arc<GlyphRegion>>
    where
        F: FnOnce() -> GlyphResult<R>,
        R: Into<Arc<GlyphRegion>>,
    {
        let slot = self.slot_or_insert(key);
        let mut guard = lock(&slot);
        if let Some(region) = guard.as_ref() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Region cache hit for {:?}", key.character());
            return Ok(Arc::clone(region));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::trace!("Region cache miss for {:?}", key.character());
        let region: Arc<GlyphRegion> = populate()?.into();
        *guard = Some(Arc::clone(&region));
        Ok(region)
    }

    /// Number of populated entries
    pub fn len(&self) -> usize {
        let slots: Vec<Arc<Slot>> = lock(&self.slots).values().cloned().collect();
        slots.iter().filter(|slot| lock(slot).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    /// Drop every entry and reset the counters
    pub fn clear(&self) {
        lock(&self.slots).clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Modifier;
    use crate::error::GlyphError;
    use image::Rgba;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Barrier;
    use std::thread;

    fn region(value: u8) -> GlyphRegion {
        GlyphRegion::from_pixel(2, 2, Rgba([value, 0, 0, 255]))
    }

    #[test]
    fn test_retrieve_empty() {
        let cache = RegionCache::new();
        assert!(cache.retrieve_if_present(&TextCharacter::of('a')).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_store_then_retrieve() {
        let cache = RegionCache::new();
        let key = TextCharacter::of('a');
        cache.store(&key, region(1));
        assert_eq!(*cache.retrieve_if_present(&key).unwrap(), region(1));
        assert!(cache.retrieve_if_present(&key.with_modifiers([Modifier::Blink])).is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_store_keeps_first_writer() {
        let cache = RegionCache::new();
        let key = TextCharacter::of('a');
        let first = cache.store(&key, region(1));
        let second = cache.store(&key, region(2));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*cache.retrieve_if_present(&key).unwrap(), region(1));
    }

    #[test]
    fn test_get_or_populate_counts() {
        let cache = RegionCache::new();
        let key = TextCharacter::of('a');
        let calls = AtomicUsize::new(0);
        let populate = || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(region(7))
        };

        let a = cache.get_or_populate(&key, populate).unwrap();
        let b = cache.get_or_populate(&key, populate).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1, entries: 1 });
    }

    #[test]
    fn test_failed_population_stores_nothing() {
        let cache = RegionCache::new();
        let key = TextCharacter::of('a');
        let result = cache.get_or_populate(&key, || Err::<GlyphRegion, _>(GlyphError::MissingGlyph { character: 'a' }));
        assert!(result.is_err());
        assert!(cache.retrieve_if_present(&key).is_none());
        assert_eq!(cache.len(), 0);

        // A later attempt may still succeed
        assert!(cache.get_or_populate(&key, || Ok(region(3))).is_ok());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_populate_can_share_existing_region() {
        let cache = RegionCache::new();
        let plain = TextCharacter::of('a');
        let underlined = plain.with_modifiers([Modifier::Underline]);

        let base = cache.get_or_populate(&plain, || Ok(region(5))).unwrap();
        let shared = cache.get_or_populate(&underlined, || Ok(Arc::clone(&base))).unwrap();
        assert!(Arc::ptr_eq(&base, &shared));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear_resets() {
        let cache = RegionCache::new();
        let key = TextCharacter::of('a');
        cache.get_or_populate(&key, || Ok(region(1))).unwrap();
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_claim_is_exclusive() {
        let cache = RegionCache::new();
        assert!(cache.claim());
        assert!(!cache.claim());
        assert!(cache.is_claimed());

        // Clearing entries does not hand the cache to someone else
        cache.clear();
        assert!(!cache.claim());

        cache.release();
        assert!(!cache.is_claimed());
        assert!(cache.claim());
    }

    #[test]
    fn test_concurrent_miss_populates_once() {
        const THREADS: usize = 8;
        let cache = Arc::new(RegionCache::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(THREADS));
        let key = TextCharacter::of('x');

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                let barrier = Arc::clone(&barrier);
                let key = key.clone();
                thread::spawn(move || {
                    barrier.wait();
                    cache
                        .get_or_populate(&key, || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            thread::sleep(std::time::Duration::from_millis(5));
                            Ok(region(42))
                        })
                        .unwrap()
                })
            })
            .collect();

        let results: Vec<Arc<GlyphRegion>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| Arc::ptr_eq(r, &results[0])));
        assert_eq!(*results[0], region(42));
    }
}
