//! String key/value configuration store (translates the `ConfigManager`
//! singleton of the C++ catalogue).
//!
//! The C++ version returned an empty string on a lookup miss, which is
//! indistinguishable from a key legitimately set to `""`. Here a miss is
//! `None`.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// A mutex-guarded map of string settings, seeded with the catalogue's
/// default configuration.
///
/// ```
/// use dp_services::ConfigStore;
///
/// let config = ConfigStore::new();
/// assert_eq!(config.get("timeout").as_deref(), Some("5000"));
/// assert_eq!(config.get("no_such_key"), None);
/// ```
pub struct ConfigStore {
    values: Mutex<HashMap<String, String>>,
}

impl ConfigStore {
    /// Create a store seeded with the default settings.
    pub fn new() -> Self {
        let mut values = HashMap::new();
        values.insert("api_url".to_string(), "https://api.example.com".to_string());
        values.insert("timeout".to_string(), "5000".to_string());
        values.insert("retries".to_string(), "3".to_string());
        values.insert("debug".to_string(), "false".to_string());
        values.insert("max_connections".to_string(), "100".to_string());
        ConfigStore {
            values: Mutex::new(values),
        }
    }

    /// Create a store with no settings at all.
    pub fn empty() -> Self {
        ConfigStore {
            values: Mutex::new(HashMap::new()),
        }
    }

    /// Return a reference to the process-wide instance, constructing it on
    /// the first call from any thread.
    pub fn instance() -> &'static ConfigStore {
        static INSTANCE: OnceLock<ConfigStore> = OnceLock::new();
        INSTANCE.get_or_init(ConfigStore::new)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().expect("ConfigStore mutex poisoned")
    }

    /// Look up a setting. `None` if the key is absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Set a setting, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    /// `true` if the key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Remove a setting. Returns `true` if the key was present.
    pub fn remove(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    /// A snapshot of all settings, sorted by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<_> = self
            .lock()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort();
        entries
    }

    /// Number of settings.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// `true` if no settings are present.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
