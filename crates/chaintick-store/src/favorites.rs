//! Date-keyed favorites, persisted independently of the source list.

use chaintick_core::{CalendarDay, PriceRecord};
use tracing::debug;

use crate::{JsonKvStore, StoreError};

const FAVORITES_KEY: &str = "favorites";
const CLEARED_KEY: &str = "favorites_cleared";

/// Local favorites collection.
///
/// A favorite is a copy of a [`PriceRecord`], keyed by its `date`:
/// favoriting never touches the remote list, and removing a favorite
/// leaves the source history alone. Dates compare at day granularity,
/// so `01/05/2024` and `2024-01-05` name the same favorite.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    kv: JsonKvStore,
}

impl FavoritesStore {
    pub fn new(kv: JsonKvStore) -> Self {
        Self { kv }
    }

    /// Everything currently favorited; empty when the key is missing.
    pub fn load(&self) -> Vec<PriceRecord> {
        self.kv.get(FAVORITES_KEY).unwrap_or_default()
    }

    pub fn is_favorite(&self, date: &str) -> bool {
        let Some(day) = parse_day(date) else {
            return false;
        };
        self.load()
            .iter()
            .any(|record| parse_day(&record.date) == Some(day))
    }

    /// Add a copy of `record`. Returns `false` (and stores nothing) when
    /// its date is already favorited.
    pub fn add(&self, record: &PriceRecord) -> Result<bool, StoreError> {
        if self.is_favorite(&record.date) {
            debug!(date = %record.date, "already favorited, skipping");
            return Ok(false);
        }

        let mut favorites = self.load();
        favorites.push(record.clone());
        self.kv.put(FAVORITES_KEY, &favorites)?;
        Ok(true)
    }

    /// Remove the favorite for `date`. Returns whether anything changed.
    pub fn remove(&self, date: &str) -> Result<bool, StoreError> {
        let Some(day) = parse_day(date) else {
            return Ok(false);
        };

        let favorites = self.load();
        let before = favorites.len();
        let kept: Vec<PriceRecord> = favorites
            .into_iter()
            .filter(|record| parse_day(&record.date) != Some(day))
            .collect();

        if kept.len() == before {
            return Ok(false);
        }

        self.kv.put(FAVORITES_KEY, &kept)?;
        Ok(true)
    }

    /// Drop every favorite and raise the cleared flag so other views
    /// reload instead of showing a stale list.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.kv.remove(FAVORITES_KEY)?;
        self.kv.put(CLEARED_KEY, &true)
    }

    /// Consume the cleared flag: returns `true` at most once per clear.
    pub fn take_cleared(&self) -> Result<bool, StoreError> {
        let cleared: bool = self.kv.get(CLEARED_KEY).unwrap_or(false);
        if cleared {
            self.kv.remove(CLEARED_KEY)?;
        }
        Ok(cleared)
    }
}

fn parse_day(date: &str) -> Option<CalendarDay> {
    CalendarDay::parse(date).ok()
}
