//! Ephemeris cache seam and an in-memory implementation.
//!
//! Entries are keyed by (planet, UTC calendar date). They are written by an
//! external refresh job and only read by the resolver; expiry is enforced by
//! whoever owns the store, via [`InMemoryStore::purge_expired`].

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, NaiveDate, Utc};
use resonance_base::Planet;
use serde::{Deserialize, Serialize};

/// One cached daily position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Ecliptic longitude at 00:00 UTC of the entry's date.
    pub longitude_deg: f64,
    pub retrograde: bool,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(longitude_deg: f64, retrograde: bool, expires_at: DateTime<Utc>) -> Self {
        Self {
            longitude_deg,
            retrograde,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Read access to cached daily positions.
///
/// Implementations must be safe to share across threads.
pub trait EphemerisStore: Send + Sync {
    /// Entry for exactly this date.
    fn entry(&self, planet: Planet, date: NaiveDate) -> Option<CacheEntry>;

    /// Latest entry strictly before `date`.
    fn nearest_before(&self, planet: Planet, date: NaiveDate) -> Option<(NaiveDate, CacheEntry)>;

    /// Earliest entry strictly after `date`.
    fn nearest_after(&self, planet: Planet, date: NaiveDate) -> Option<(NaiveDate, CacheEntry)>;
}

type Key = (Planet, NaiveDate);

/// `BTreeMap`-backed store behind a read-write lock.
///
/// Writes replace any existing entry for the same key.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<BTreeMap<Key, CacheEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `(planet, date)`.
    pub fn insert(&self, planet: Planet, date: NaiveDate, entry: CacheEntry) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((planet, date), entry);
    }

    /// Drop every entry expired at `now`. Returns the number removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, e| !e.is_expired(now));
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EphemerisStore for InMemoryStore {
    fn entry(&self, planet: Planet, date: NaiveDate) -> Option<CacheEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(planet, date))
            .copied()
    }

    fn nearest_before(&self, planet: Planet, date: NaiveDate) -> Option<(NaiveDate, CacheEntry)> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .range((Bound::Included((planet, NaiveDate::MIN)), Bound::Excluded((planet, date))))
            .next_back()
            .map(|((_, d), e)| (*d, *e))
    }

    fn nearest_after(&self, planet: Planet, date: NaiveDate) -> Option<(NaiveDate, CacheEntry)> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .range((Bound::Excluded((planet, date)), Bound::Included((planet, NaiveDate::MAX))))
            .next()
            .map(|((_, d), e)| (*d, *e))
    }
}
