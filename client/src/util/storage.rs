//! Browser Web Storage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access token lives in `localStorage` (survives reloads) and locally
//! created boards live in `sessionStorage` (per tab, cleared when the tab
//! session ends). These helpers centralize the hydrate-only web-sys glue;
//! SSR and native builds see an always-empty, write-rejecting store.

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;

/// Which Web Storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// Durable across reloads.
    Local,
    /// Scoped to the tab session.
    Session,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("{0:?} storage unavailable")]
    Unavailable(StorageArea),

    #[error("serialize failed: {0}")]
    Serialize(String),

    #[error("write failed: {0}")]
    Write(String),
}

#[cfg(feature = "hydrate")]
fn storage(area: StorageArea) -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match area {
        StorageArea::Local => window.local_storage().ok().flatten(),
        StorageArea::Session => window.session_storage().ok().flatten(),
    }
}

/// Read the raw string stored under `key`, if any.
pub fn load_raw(area: StorageArea, key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage(area)?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (area, key);
        None
    }
}

/// Store a raw string under `key`.
///
/// # Errors
///
/// Returns an error if the storage area is unavailable or the write is
/// refused (e.g. quota exceeded, private browsing).
pub fn save_raw(area: StorageArea, key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let store = storage(area).ok_or(StorageError::Unavailable(area))?;
        store
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Err(StorageError::Unavailable(area))
    }
}

/// Serialize `value` as JSON and store it under `key`.
///
/// # Errors
///
/// Returns an error if serialization fails or [`save_raw`] fails.
pub fn save_json<T: Serialize>(area: StorageArea, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    save_raw(area, key, &raw)
}
