//! In-memory vessel position cache.
//!
//! Successful provider responses are cached for a short, fixed TTL to avoid
//! hammering the provider with repeated lookups for the same vessel (AIS
//! positions do not move meaningfully within the window, and every avoided
//! request is one fewer chance to trip the provider's rate limiting).
//!
//! Storage and freshness are deliberately separated: `get` returns whatever
//! entry exists, and the caller decides whether the entry is fresh enough to
//! use. Stale entries are bypassed on read rather than evicted; the only
//! purge is the administrative [`VesselCache::clear`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use serde_json::Value;

/// A cached provider payload plus the instant it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The provider's JSON payload, kept opaque.
    pub payload: Value,
    /// When the entry was written; freshness is judged against this.
    pub stored_at: Instant,
}

/// Process-wide cache of vessel position payloads.
///
/// Keys are `vessel_<imo>` strings (see [`ImoNumber::cache_key`]). The map
/// is guarded by a mutex; critical sections are a single map operation, so
/// contention is negligible and `get`/`put` on the same key are atomic with
/// respect to each other. `put` is a blind overwrite - there is no
/// read-modify-write to protect.
///
/// [`ImoNumber::cache_key`]: crate::imo::ImoNumber::cache_key
#[derive(Debug, Default)]
pub struct VesselCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl VesselCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for `key`, fresh or stale.
    ///
    /// Freshness is the caller's responsibility: the storage layer does not
    /// know the TTL policy, so the policy can change without touching it.
    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        self.lock().get(key).cloned()
    }

    /// Stores `payload` under `key`, unconditionally overwriting any
    /// existing entry.
    pub fn put(&self, key: &str, payload: Value, now: Instant) {
        self.lock().insert(
            key.to_string(),
            CacheEntry {
                payload,
                stored_at: now,
            },
        );
    }

    /// Removes all entries. Administrative operation, exposed over HTTP.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Current entry count (fresh and stale alike), for diagnostics.
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    // A panic while holding the lock cannot leave the map half-updated
    // (every critical section is one HashMap call), so a poisoned lock is
    // recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_on_empty_cache() {
        let cache = VesselCache::new();
        assert!(cache.get("vessel_1234567").is_none());
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_put_then_get_round_trip() {
        let cache = VesselCache::new();
        let payload = json!({"name": "MSC OSCAR", "latitude": 1.0, "longitude": 2.0});
        let t0 = Instant::now();

        cache.put("vessel_1234567", payload.clone(), t0);

        let entry = cache.get("vessel_1234567").expect("entry should exist");
        assert_eq!(entry.payload, payload);
        assert_eq!(entry.stored_at, t0);
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_put_is_blind_overwrite() {
        let cache = VesselCache::new();
        let t0 = Instant::now();
        cache.put("vessel_1234567", json!({"name": "OLD"}), t0);

        let t1 = t0 + std::time::Duration::from_secs(60);
        cache.put("vessel_1234567", json!({"name": "NEW"}), t1);

        let entry = cache.get("vessel_1234567").unwrap();
        assert_eq!(entry.payload["name"], "NEW");
        assert_eq!(entry.stored_at, t1);
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_get_returns_stale_entries() {
        // The storage layer has no TTL of its own; even an arbitrarily old
        // entry is returned and left in place.
        let cache = VesselCache::new();
        let long_ago = Instant::now()
            .checked_sub(std::time::Duration::from_secs(3600))
            .unwrap_or_else(Instant::now);
        cache.put("vessel_1234567", json!({}), long_ago);

        assert!(cache.get("vessel_1234567").is_some());
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_clear_removes_everything() {
        let cache = VesselCache::new();
        let now = Instant::now();
        cache.put("vessel_1111111", json!({}), now);
        cache.put("vessel_2222222", json!({}), now);
        assert_eq!(cache.size(), 2);

        cache.clear();

        assert_eq!(cache.size(), 0);
        assert!(cache.get("vessel_1111111").is_none());
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = VesselCache::new();
        let now = Instant::now();
        cache.put("vessel_1111111", json!({"name": "A"}), now);
        cache.put("vessel_2222222", json!({"name": "B"}), now);

        assert_eq!(cache.get("vessel_1111111").unwrap().payload["name"], "A");
        assert_eq!(cache.get("vessel_2222222").unwrap().payload["name"], "B");
    }
}
