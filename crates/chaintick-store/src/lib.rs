//! # Chaintick Store
//!
//! Local key-value persistence for chaintick: favorites, settings, and
//! the cross-view cleared flag, each a JSON document under one store
//! directory.
//!
//! Read failures are tolerated by design — a missing or corrupt document
//! logs a warning and falls back to defaults, so local-state problems
//! never take the app down. Writes are atomic (temp file + rename).
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Store error types |
//! | [`favorites`] | Date-keyed favorites collection |
//! | [`kv`] | JSON document key-value store |
//! | [`settings`] | Settings with load/set/persist lifecycle |

pub mod error;
pub mod favorites;
pub mod kv;
pub mod settings;

pub use error::StoreError;
pub use favorites::FavoritesStore;
pub use kv::JsonKvStore;
pub use settings::{Settings, SettingsStore};
