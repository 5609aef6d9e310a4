//! Address-keyed coordinate cache in front of a geocoding service.
//!
//! The whole cache lives as one JSON object under [`GEOCODE_CACHE_KEY`] in a
//! [`KeyValueStore`], so every lookup reads the full mapping and every insert
//! rewrites it. Keys are used exactly as given (case-sensitive, no trimming).
//!
//! Entries never expire and are never evicted. A fixed address resolves to
//! fixed coordinates, so the mapping only grows; callers with unbounded
//! address sets should size their storage accordingly.
//!
//! # Public API
//! - [`Coordinates`]: A latitude/longitude pair
//! - [`LookupFetcher`]: Geocoding collaborator
//! - [`ReadFailurePolicy`]: What to do when the stored mapping cannot be read
//! - [`KeyedCoordinateCache`]: Get-or-compute cache over a key-value store

use crate::core::{
    error::{ProfileDirError, Result},
    store::{KeyValueStore, GEOCODE_CACHE_KEY},
};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Resolves an address to coordinates, failing with `LookupFailed` on a miss
pub trait LookupFetcher {
    fn lookup(&self, address: &str) -> Result<Coordinates>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadFailurePolicy {
    /// Return `StorageUnavailable` to the caller
    #[default]
    Propagate,
    /// Compute as on a miss. A store that cannot be read is left untouched,
    /// while a mapping that no longer parses is replaced by a fresh one.
    TreatAsMiss,
}

/// Whether a value was served from storage or freshly computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit,
    Computed,
}

type CacheMap = BTreeMap<String, Coordinates>;

pub struct KeyedCoordinateCache<S: KeyValueStore> {
    store: S,
    storage_key: String,
    read_failure_policy: ReadFailurePolicy,
    write_failures: Cell<usize>,
}

impl<S: KeyValueStore> KeyedCoordinateCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            storage_key: GEOCODE_CACHE_KEY.to_string(),
            read_failure_policy: ReadFailurePolicy::default(),
            write_failures: Cell::new(0),
        }
    }

    pub fn with_read_failure_policy(mut self, policy: ReadFailurePolicy) -> Self {
        self.read_failure_policy = policy;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of computed values that could not be written back
    pub fn write_failures(&self) -> usize {
        self.write_failures.get()
    }

    /// Return the cached coordinates for `key`, or compute, store and return them.
    ///
    /// `compute` runs only on a miss. Its failure is returned as-is and nothing
    /// is cached, so the next call for the same key computes again.
    pub fn get_or_compute<F>(&self, key: &str, compute: F) -> Result<Coordinates>
    where
        F: FnOnce(&str) -> Result<Coordinates>,
    {
        self.resolve(key, compute).map(|(coords, _)| coords)
    }

    /// [`get_or_compute`](Self::get_or_compute) with a lookup collaborator
    pub fn get_or_lookup(&self, key: &str, fetcher: &impl LookupFetcher) -> Result<Coordinates> {
        self.get_or_compute(key, |address| fetcher.lookup(address))
    }

    /// Like [`get_or_compute`](Self::get_or_compute), also reporting where the value came from
    pub fn resolve<F>(&self, key: &str, compute: F) -> Result<(Coordinates, CacheOutcome)>
    where
        F: FnOnce(&str) -> Result<Coordinates>,
    {
        let cached = match self.read_mapping() {
            Ok(mapping) => mapping.get(key).copied(),
            Err(e) => match self.read_failure_policy {
                ReadFailurePolicy::Propagate => return Err(e),
                ReadFailurePolicy::TreatAsMiss => {
                    log::warn!("Geocode cache unreadable, computing '{key}' uncached: {e}");
                    None
                }
            },
        };

        if let Some(coords) = cached {
            log::debug!("Geocode cache hit for '{key}'");
            return Ok((coords, CacheOutcome::Hit));
        }

        log::debug!("Geocode cache miss for '{key}'");
        let coords = compute(key)?;
        self.store_entry(key, coords);

        Ok((coords, CacheOutcome::Computed))
    }

    /// Read one entry without computing anything
    pub fn cached(&self, key: &str) -> Result<Option<Coordinates>> {
        Ok(self.read_mapping()?.get(key).copied())
    }

    /// Number of stored entries
    pub fn len(&self) -> Result<usize> {
        Ok(self.read_mapping()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read_mapping(&self) -> Result<CacheMap> {
        let Some(raw) = self.store.get(&self.storage_key)? else {
            return Ok(CacheMap::new());
        };

        serde_json::from_str(&raw).map_err(|e| {
            log::error!("Failed to parse geocode cache: {e}");
            ProfileDirError::storage_unavailable(&self.storage_key, e)
        })
    }

    // Re-reads the mapping so entries written while `compute` ran are kept.
    // An unreadable store is left untouched; unparseable contents are replaced.
    fn store_entry(&self, key: &str, coords: Coordinates) {
        let mut mapping = match self.store.get(&self.storage_key) {
            Ok(None) => CacheMap::new(),
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Replacing corrupt geocode cache: {e}");
                CacheMap::new()
            }),
            Err(e) => {
                log::warn!("Not caching '{key}', geocode cache unreadable: {e}");
                return;
            }
        };

        mapping.insert(key.to_string(), coords);
        if let Err(e) = self.write_mapping(&mapping) {
            self.write_failures.set(self.write_failures.get() + 1);
            log::warn!("Failed to cache coordinates for '{key}': {e}");
        }
    }

    fn write_mapping(&self, mapping: &CacheMap) -> Result<()> {
        let json = serde_json::to_string(mapping)
            .map_err(|e| ProfileDirError::storage_unavailable(&self.storage_key, e))?;
        self.store.set(&self.storage_key, &json)
    }
}
