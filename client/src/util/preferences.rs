//! Layout preferences persisted to `localStorage` as one JSON document.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "scooterpro_preferences";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub sidebar_collapsed: bool,
}

/// Decode a stored document; anything unreadable falls back to defaults.
pub fn parse(raw: &str) -> Preferences {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::warn!("ignoring stored preferences: {err}");
        Preferences::default()
    })
}

/// Stored preferences, or defaults outside the browser or when unset.
pub fn load() -> Preferences {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return Preferences::default();
        };
        match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => parse(&raw),
            Ok(None) | Err(_) => Preferences::default(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Preferences::default()
    }
}

/// Persist `prefs`; failures are logged and otherwise ignored.
pub fn save(prefs: Preferences) {
    let raw = match serde_json::to_string(&prefs) {
        Ok(raw) => raw,
        Err(err) => {
            log::warn!("preferences not encodable: {err}");
            return;
        }
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(STORAGE_KEY, &raw).is_err() {
            log::warn!("localStorage rejected preferences write");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::trace!("preferences not persisted outside the browser: {raw}");
    }
}
