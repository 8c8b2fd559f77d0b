//! App settings with an explicit load/set/persist lifecycle.

use serde::{Deserialize, Serialize};

use crate::{JsonKvStore, StoreError};

const SETTINGS_KEY: &str = "settings";

/// User-facing toggles, stored under the wire names the original app
/// used so an existing settings document keeps working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "showPriceAlerts", default = "default_true")]
    pub show_price_alerts: bool,
    #[serde(rename = "showATMDistance", default = "default_true")]
    pub show_atm_distance: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_price_alerts: true,
            show_atm_distance: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Settings holder with a defined lifecycle: loaded once at startup,
/// updated through explicit setters, persisted on every change. No
/// ambient global state.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    kv: JsonKvStore,
    current: Settings,
}

impl SettingsStore {
    /// Load persisted settings, falling back to defaults when the key is
    /// missing or unreadable.
    pub fn load(kv: JsonKvStore) -> Self {
        let current = kv.get(SETTINGS_KEY).unwrap_or_default();
        Self { kv, current }
    }

    pub fn settings(&self) -> Settings {
        self.current
    }

    pub fn set_price_alerts(&mut self, value: bool) -> Result<(), StoreError> {
        self.current.show_price_alerts = value;
        self.persist()
    }

    pub fn set_atm_distance(&mut self, value: bool) -> Result<(), StoreError> {
        self.current.show_atm_distance = value;
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.kv.put(SETTINGS_KEY, &self.current)
    }
}
