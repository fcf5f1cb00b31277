//! Daily generation cap, persisted through a [`KeyValueStore`]

use chrono::{Local, NaiveDate};
use log::{info, warn};

use crate::error::GenerationError;
use crate::models::QuotaStatus;
use crate::store::{KeyValueStore, StoreError};

pub const LAST_GENERATION_DATE_KEY: &str = "lastGenerationDate";
pub const DAILY_GENERATIONS_COUNT_KEY: &str = "dailyGenerationsCount";

/// Maximum number of successful generations per calendar day
pub const DEFAULT_DAILY_LIMIT: u32 = 5;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Tracks successful generations for the current day.
///
/// The day is fixed when the tracker is loaded; it does not roll over at
/// midnight while the application stays open.
pub struct QuotaTracker<S> {
    store: S,
    limit: u32,
    date: String,
    count: u32,
}

impl<S: KeyValueStore> QuotaTracker<S> {
    /// Loads the record for the local calendar day
    pub fn load_today(store: S, limit: u32) -> Result<Self, StoreError> {
        Self::load(store, limit, Local::now().date_naive())
    }

    /// Loads the record for `today`, resetting it if it belongs to another day
    pub fn load(mut store: S, limit: u32, today: NaiveDate) -> Result<Self, StoreError> {
        let date = today.format(DATE_FORMAT).to_string();
        let stored_date = store.get(LAST_GENERATION_DATE_KEY)?;

        let count = if stored_date.as_deref() == Some(date.as_str()) {
            let raw = store.get(DAILY_GENERATIONS_COUNT_KEY)?.unwrap_or_default();
            raw.trim().parse::<u32>().unwrap_or_else(|_| {
                warn!("[quota] Ignoring unreadable generation count {:?}", raw);
                0
            })
        } else {
            info!(
                "[quota] New day {} (last generation: {}), resetting count",
                date,
                stored_date.as_deref().unwrap_or("never")
            );
            store.set(LAST_GENERATION_DATE_KEY, &date)?;
            store.set(DAILY_GENERATIONS_COUNT_KEY, "0")?;
            0
        };

        Ok(Self {
            store,
            limit,
            date,
            count,
        })
    }

    /// Refuses a new generation once the daily limit is reached
    pub fn check(&self) -> Result<(), GenerationError> {
        if self.count >= self.limit {
            return Err(GenerationError::QuotaExceeded { limit: self.limit });
        }
        Ok(())
    }

    /// Records one successful generation. The in-memory count is updated
    /// even when persisting it fails.
    pub fn consume(&mut self) -> Result<(), StoreError> {
        self.count += 1;
        self.store
            .set(DAILY_GENERATIONS_COUNT_KEY, &self.count.to_string())
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn status(&self) -> QuotaStatus {
        QuotaStatus {
            date: self.date.clone(),
            used: self.count,
            limit: self.limit,
            remaining: self.limit.saturating_sub(self.count),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, SqliteStore};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn fresh_store_starts_at_zero_and_stamps_today() {
        let tracker = QuotaTracker::load(MemoryStore::new(), 5, day(16)).unwrap();
        assert_eq!(tracker.count(), 0);
        assert_eq!(
            tracker.store().get(LAST_GENERATION_DATE_KEY).unwrap().as_deref(),
            Some("2026-10-16")
        );
        assert_eq!(
            tracker.store().get(DAILY_GENERATIONS_COUNT_KEY).unwrap().as_deref(),
            Some("0")
        );
    }

    #[test]
    fn same_day_adopts_stored_count() {
        let store = MemoryStore::with_entries([
            (LAST_GENERATION_DATE_KEY, "2026-10-16"),
            (DAILY_GENERATIONS_COUNT_KEY, "3"),
        ]);
        let tracker = QuotaTracker::load(store, 5, day(16)).unwrap();
        assert_eq!(tracker.count(), 3);
        assert_eq!(tracker.status().remaining, 2);
    }

    #[test]
    fn day_change_resets_count() {
        let store = MemoryStore::with_entries([
            (LAST_GENERATION_DATE_KEY, "2026-10-15"),
            (DAILY_GENERATIONS_COUNT_KEY, "5"),
        ]);
        let tracker = QuotaTracker::load(store, 5, day(16)).unwrap();
        assert_eq!(tracker.count(), 0);
        assert!(tracker.check().is_ok());
        assert_eq!(
            tracker.store().get(LAST_GENERATION_DATE_KEY).unwrap().as_deref(),
            Some("2026-10-16")
        );
        assert_eq!(
            tracker.store().get(DAILY_GENERATIONS_COUNT_KEY).unwrap().as_deref(),
            Some("0")
        );
    }

    #[test]
    fn unreadable_count_is_treated_as_zero() {
        let store = MemoryStore::with_entries([
            (LAST_GENERATION_DATE_KEY, "2026-10-16"),
            (DAILY_GENERATIONS_COUNT_KEY, "lots"),
        ]);
        let tracker = QuotaTracker::load(store, 5, day(16)).unwrap();
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn consume_persists_and_keeps_date() {
        let mut tracker = QuotaTracker::load(MemoryStore::new(), 2, day(16)).unwrap();
        tracker.consume().unwrap();
        assert_eq!(tracker.count(), 1);
        assert!(tracker.check().is_ok());
        tracker.consume().unwrap();

        assert_eq!(
            tracker.check(),
            Err(GenerationError::QuotaExceeded { limit: 2 })
        );
        assert_eq!(
            tracker.store().get(DAILY_GENERATIONS_COUNT_KEY).unwrap().as_deref(),
            Some("2")
        );
        assert_eq!(
            tracker.store().get(LAST_GENERATION_DATE_KEY).unwrap().as_deref(),
            Some("2026-10-16")
        );
        assert_eq!(tracker.status().remaining, 0);
    }

    #[test]
    fn count_survives_reopening_the_database() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("quota.db");

        {
            let store = SqliteStore::open(&db_path).unwrap();
            let mut tracker = QuotaTracker::load(store, 5, day(16)).unwrap();
            tracker.consume().unwrap();
            tracker.consume().unwrap();
        }

        let store = SqliteStore::open(&db_path).unwrap();
        let tracker = QuotaTracker::load(store, 5, day(16)).unwrap();
        assert_eq!(tracker.count(), 2);
        assert_eq!(tracker.status().remaining, 3);
        drop(tracker);

        let store = SqliteStore::open(&db_path).unwrap();
        let tracker = QuotaTracker::load(store, 5, day(17)).unwrap();
        assert_eq!(tracker.count(), 0);
        assert_eq!(
            tracker.store().get(LAST_GENERATION_DATE_KEY).unwrap().as_deref(),
            Some("2026-10-17")
        );
    }
}
