//! The single client-side cache slot holding the currently selected
//! channel. Channel-scoped pages validate it on entry; anything other
//! than a fresh hit means "clear everything and go back to the lookup
//! page".

use crate::models::ChannelRecord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CHANNEL_ID_KEY: &str = "channelId";
pub const CHANNEL_DATA_KEY: &str = "channelData";

/// How long a stored lookup may be reused before the user is sent back
/// to the lookup page. One hour.
pub const FRESHNESS_WINDOW_MS: i64 = 3_600_000;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to serialize channel record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage write rejected: {0}")]
    Store(String),
}

/// Minimal key-value surface over browser local storage, injectable so
/// the cache logic runs against an in-memory fake in tests.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// `window.localStorage` implementation used by the running app.
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| "local storage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|err| format!("{err:?}"))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
}

/// Outcome of a cache lookup. Stale and Absent demand the same caller
/// action (clear and redirect); the distinction is kept observable.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    Fresh(ChannelRecord),
    Stale,
    Absent,
}

/// Stored payload: the record as fetched plus the capture timestamp
/// injected at write time.
#[derive(Serialize, Deserialize)]
struct StoredChannel {
    #[serde(flatten)]
    record: ChannelRecord,
    timestamp: i64,
}

pub struct ChannelCache<S: KeyValueStore> {
    store: S,
}

impl ChannelCache<BrowserStore> {
    pub fn browser() -> Self {
        ChannelCache::new(BrowserStore)
    }

    /// Persists a fresh lookup, stamping the current wall clock.
    pub fn store(&self, record: &ChannelRecord) -> Result<(), CacheError> {
        self.store_at(record, js_sys::Date::now() as i64)
    }

    pub fn load(&self, expected_id: &str) -> CacheLookup {
        self.load_at(expected_id, js_sys::Date::now() as i64)
    }
}

impl<S: KeyValueStore> ChannelCache<S> {
    pub fn new(store: S) -> Self {
        ChannelCache { store }
    }

    /// Replaces whatever is cached with the given record. The id key and
    /// the payload are written back to back as one logical update; a
    /// serialization failure aborts before anything is touched.
    pub fn store_at(&self, record: &ChannelRecord, now_ms: i64) -> Result<(), CacheError> {
        let payload = serde_json::to_string(&StoredChannel {
            record: record.clone(),
            timestamp: now_ms,
        })?;
        self.store
            .set(CHANNEL_ID_KEY, &record.id)
            .map_err(CacheError::Store)?;
        self.store
            .set(CHANNEL_DATA_KEY, &payload)
            .map_err(CacheError::Store)?;
        Ok(())
    }

    /// Fresh iff the stored id equals `expected_id`, the payload parses,
    /// its id matches, and the capture timestamp is within the one-hour
    /// window. Unparseable or missing state is Absent; an id mismatch or
    /// an expired timestamp is Stale.
    pub fn load_at(&self, expected_id: &str, now_ms: i64) -> CacheLookup {
        let Some(stored_id) = self.store.get(CHANNEL_ID_KEY) else {
            return CacheLookup::Absent;
        };
        let Some(payload) = self.store.get(CHANNEL_DATA_KEY) else {
            return CacheLookup::Absent;
        };
        let Ok(stored) = serde_json::from_str::<StoredChannel>(&payload) else {
            return CacheLookup::Absent;
        };
        if stored_id != expected_id || stored.record.id != expected_id {
            return CacheLookup::Stale;
        }
        if now_ms - stored.timestamp >= FRESHNESS_WINDOW_MS {
            return CacheLookup::Stale;
        }
        CacheLookup::Fresh(stored.record)
    }

    /// Removes both keys. Safe to call when nothing is stored.
    pub fn clear(&self) {
        self.store.remove(CHANNEL_ID_KEY);
        self.store.remove(CHANNEL_DATA_KEY);
    }

    /// The identifier the cache was last keyed under, if any. Views use
    /// this to know which id to validate against.
    pub fn stored_id(&self) -> Option<String> {
        self.store.get(CHANNEL_ID_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            MemoryStore {
                entries: RefCell::new(HashMap::new()),
            }
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    fn sample_record() -> ChannelRecord {
        ChannelRecord {
            id: "UC_test_channel".to_string(),
            title: "Test Channel".to_string(),
            subscriber_count: 1234,
            video_count: 56,
            view_count: 789_000,
            description: Some("A channel about things.".to_string()),
            thumbnail_url: Some("https://example.com/thumb.jpg".to_string()),
        }
    }

    #[test]
    fn store_then_load_is_fresh_with_exact_record() {
        let cache = ChannelCache::new(MemoryStore::new());
        let record = sample_record();
        cache.store_at(&record, 1_000_000).unwrap();

        match cache.load_at(&record.id, 1_000_001) {
            CacheLookup::Fresh(loaded) => assert_eq!(loaded, record),
            other => panic!("expected Fresh, got {other:?}"),
        }
    }

    #[test]
    fn freshness_boundary_is_exclusive() {
        let cache = ChannelCache::new(MemoryStore::new());
        let record = sample_record();
        let stored_at = 50_000;
        cache.store_at(&record, stored_at).unwrap();

        let boundary = stored_at + FRESHNESS_WINDOW_MS;
        assert!(matches!(
            cache.load_at(&record.id, boundary - 1),
            CacheLookup::Fresh(_)
        ));
        assert_eq!(cache.load_at(&record.id, boundary), CacheLookup::Stale);
        assert_eq!(cache.load_at(&record.id, boundary + 1), CacheLookup::Stale);
    }

    #[test]
    fn expired_entry_is_stale() {
        let cache = ChannelCache::new(MemoryStore::new());
        let mut record = sample_record();
        record.id = "A".to_string();
        let now = 10_000_000;
        cache.store_at(&record, now - 4_000_000).unwrap();

        assert_eq!(cache.load_at("A", now), CacheLookup::Stale);
    }

    #[test]
    fn id_mismatch_is_stale() {
        let cache = ChannelCache::new(MemoryStore::new());
        cache.store_at(&sample_record(), 0).unwrap();
        assert_eq!(cache.load_at("UC_other", 1), CacheLookup::Stale);
    }

    #[test]
    fn empty_store_is_absent() {
        let cache = ChannelCache::new(MemoryStore::new());
        assert_eq!(cache.load_at("UC_test_channel", 0), CacheLookup::Absent);
    }

    #[test]
    fn garbage_payload_is_absent() {
        let store = MemoryStore::new();
        store.set(CHANNEL_ID_KEY, "UC_test_channel").unwrap();
        store.set(CHANNEL_DATA_KEY, "{not json").unwrap();
        let cache = ChannelCache::new(store);
        assert_eq!(cache.load_at("UC_test_channel", 0), CacheLookup::Absent);
    }

    #[test]
    fn stored_payload_round_trips_all_fields() {
        let store = MemoryStore::new();
        let record = sample_record();
        let cache = ChannelCache::new(store);
        cache.store_at(&record, 42).unwrap();

        let payload = cache.store.get(CHANNEL_DATA_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["timestamp"], 42);
        assert_eq!(value["id"], record.id);
        assert_eq!(value["title"], record.title);
        assert_eq!(value["subscriberCount"], record.subscriber_count);
        assert_eq!(value["videoCount"], record.video_count);
        assert_eq!(value["viewCount"], record.view_count);
        assert_eq!(value["description"], *record.description.as_ref().unwrap());
        assert_eq!(
            value["thumbnailUrl"],
            *record.thumbnail_url.as_ref().unwrap()
        );
    }

    #[test]
    fn store_replaces_previous_slot() {
        let cache = ChannelCache::new(MemoryStore::new());
        let first = sample_record();
        cache.store_at(&first, 0).unwrap();

        let mut second = sample_record();
        second.id = "UC_other".to_string();
        second.title = "Other".to_string();
        cache.store_at(&second, 10).unwrap();

        assert_eq!(cache.stored_id().as_deref(), Some("UC_other"));
        assert_eq!(cache.load_at(&first.id, 20), CacheLookup::Stale);
        assert!(matches!(
            cache.load_at("UC_other", 20),
            CacheLookup::Fresh(_)
        ));
    }

    #[test]
    fn clear_is_idempotent() {
        let cache = ChannelCache::new(MemoryStore::new());
        cache.store_at(&sample_record(), 0).unwrap();
        cache.clear();
        cache.clear();
        assert_eq!(cache.stored_id(), None);
        assert_eq!(cache.load_at("UC_test_channel", 0), CacheLookup::Absent);
    }
}
