use anyhow::Result;
use std::collections::HashMap;
use std::sync::Mutex;

pub const THEME_KEY: &str = "theme";
pub const WEATHER_CITY_KEY: &str = "weatherCity";
pub const BACKGROUND_KEY: &str = "customBackground";
pub const FAVORITES_KEY: &str = "favorites";

/// String-keyed storage that survives restarts. No expiry.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("store lock poisoned"))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("store lock poisoned"))?
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_entries([(THEME_KEY, "light")]);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        store.set(WEATHER_CITY_KEY, "Lyon").unwrap();
        assert_eq!(store.get(WEATHER_CITY_KEY).as_deref(), Some("Lyon"));
        store.remove(THEME_KEY).unwrap();
        assert_eq!(store.get(THEME_KEY), None);
        store.remove("missing").unwrap();
    }
}
