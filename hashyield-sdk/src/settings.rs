//! User preference storage
//!
//! The dashboard keeps theme, language and notification toggles as opaque
//! key-value pairs. `SettingsStore` is the seam for whatever backs them; values
//! are freeform JSON, saves overwrite wholesale and nothing is transactional.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Key under which [`Preferences`] are stored
pub const PREFERENCES_KEY: &str = "preferences";

/// Key-value store for user settings
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<Value>;

    fn set(&mut self, key: &str, value: Value);

    /// Remove a key, returning its previous value
    fn remove(&mut self, key: &str) -> Option<Value>;

    fn clear(&mut self);

    /// All stored pairs as a single JSON object
    fn snapshot(&self) -> Value;
}

/// In-memory settings store, lost when the process exits
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemorySettingsStore {
    entries: BTreeMap<String, Value>,
}

impl MemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a snapshot previously produced by [`SettingsStore::snapshot`]
    ///
    /// # Errors
    /// Returns an error if the snapshot is not a JSON object
    pub fn from_snapshot(snapshot: Value) -> Result<Self> {
        let entries: BTreeMap<String, Value> = serde_json::from_value(snapshot)?;
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn snapshot(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationToggles {
    pub email: bool,
    pub deposits: bool,
    pub withdrawals: bool,
    pub referrals: bool,
}

impl Default for NotificationToggles {
    fn default() -> Self {
        Self {
            email: true,
            deposits: true,
            withdrawals: true,
            referrals: true,
        }
    }
}

/// Typed view over the stored preference object
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub language: String,
    pub notifications: NotificationToggles,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en".to_string(),
            notifications: NotificationToggles::default(),
        }
    }
}

impl Preferences {
    /// Load preferences, falling back to defaults when absent or unreadable
    pub fn load(store: &dyn SettingsStore) -> Self {
        store
            .get(PREFERENCES_KEY)
            .and_then(|value| match serde_json::from_value(value) {
                Ok(prefs) => Some(prefs),
                Err(e) => {
                    tracing::warn!("Discarding unreadable preferences: {e}");
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Overwrite the stored preferences
    ///
    /// # Errors
    /// Returns an error if the preferences cannot be serialized
    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<()> {
        store.set(PREFERENCES_KEY, serde_json::to_value(self)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_set_remove_clear() {
        let mut store = MemorySettingsStore::new();
        assert!(store.is_empty());

        store.set("theme", json!("light"));
        store.set("apiKey", json!("sk_live_mock"));
        assert_eq!(store.get("theme"), Some(json!("light")));
        assert_eq!(store.len(), 2);

        assert_eq!(store.remove("theme"), Some(json!("light")));
        assert_eq!(store.get("theme"), None);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites_wholesale() {
        let mut store = MemorySettingsStore::new();
        store.set("profile", json!({"name": "a", "country": "b"}));
        store.set("profile", json!({"name": "c"}));
        assert_eq!(store.get("profile"), Some(json!({"name": "c"})));
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut store = MemorySettingsStore::new();
        store.set("language", json!("de"));
        store.set("notifications", json!({"email": false}));

        let snapshot = store.snapshot();
        let restored = MemorySettingsStore::from_snapshot(snapshot).unwrap();
        assert_eq!(restored, store);

        assert!(MemorySettingsStore::from_snapshot(json!([1, 2])).is_err());
    }

    #[test]
    fn test_preferences_default_when_missing() {
        let store = MemorySettingsStore::new();
        let prefs = Preferences::load(&store);
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_preferences_save_and_load() {
        let mut store = MemorySettingsStore::new();
        let mut prefs = Preferences::default();
        prefs.theme = Theme::Light;
        prefs.notifications.referrals = false;
        prefs.save(&mut store).unwrap();

        let loaded = Preferences::load(&store);
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_partial_preferences_fill_defaults() {
        let mut store = MemorySettingsStore::new();
        store.set(PREFERENCES_KEY, json!({"language": "fr"}));
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.language, "fr");
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn test_unreadable_preferences_fall_back() {
        let mut store = MemorySettingsStore::new();
        store.set(PREFERENCES_KEY, json!("garbage"));
        assert_eq!(Preferences::load(&store), Preferences::default());
    }
}
