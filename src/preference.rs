use std::collections::HashMap;

pub trait PreferenceStore {
    fn get_flag(&self, key: &str) -> Result<Option<bool>, String>;
    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), String>;
}

// `localStorage`, scoped to the page origin. Flags are stored as the JSON
// literals `true`/`false`; anything else reads as unset.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
fn local_storage_available() -> bool {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .is_some()
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStore {
    fn get_flag(&self, key: &str) -> Result<Option<bool>, String> {
        use gloo_storage::errors::StorageError;
        use gloo_storage::{LocalStorage, Storage};

        if !local_storage_available() {
            return Err("local storage unavailable".to_string());
        }
        match LocalStorage::get::<bool>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(_)) => Ok(None),
            Err(err) => Err(format!("storage read failed: {err}")),
        }
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), String> {
        use gloo_storage::{LocalStorage, Storage};

        if !local_storage_available() {
            return Err("local storage unavailable".to_string());
        }
        LocalStorage::set(key, value).map_err(|err| format!("storage write failed: {err}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for BrowserStore {
    fn get_flag(&self, _key: &str) -> Result<Option<bool>, String> {
        Err("local storage unavailable".to_string())
    }

    fn set_flag(&mut self, _key: &str, _value: bool) -> Result<(), String> {
        Err("local storage unavailable".to_string())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl PreferenceStore for MemoryStore {
    fn get_flag(&self, key: &str) -> Result<Option<bool>, String> {
        Ok(self
            .values
            .get(key)
            .and_then(|raw| serde_json::from_str::<bool>(raw).ok()))
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), String> {
        let raw = serde_json::to_string(&value).map_err(|err| err.to_string())?;
        self.values.insert(key.to_string(), raw);
        Ok(())
    }
}

pub fn default_store() -> Box<dyn PreferenceStore> {
    if cfg!(target_arch = "wasm32") {
        Box::new(BrowserStore)
    } else {
        Box::new(MemoryStore::default())
    }
}

pub fn info_dismissed(store: &dyn PreferenceStore, key: &str) -> bool {
    match store.get_flag(key) {
        Ok(value) => value == Some(true),
        Err(err) => {
            tracing::warn!("easter-eggs: {err}");
            false
        }
    }
}

pub fn persist_info_dismissed(store: &mut dyn PreferenceStore, key: &str) {
    if let Err(err) = store.set_flag(key, true) {
        tracing::warn!("easter-eggs: dismissal not persisted: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const KEY: &str = "easterEggInfoDisabled";

    #[test]
    fn only_literal_true_counts() {
        let mut store = MemoryStore::default();
        assert!(!info_dismissed(&store, KEY));
        for raw in ["1", "TRUE", "yes", "false", "\"true\""] {
            store.insert_raw(KEY, raw);
            assert!(!info_dismissed(&store, KEY), "{raw} should not hide the banner");
        }
        store.insert_raw(KEY, "true");
        assert!(info_dismissed(&store, KEY));
    }

    #[test]
    fn persisting_writes_true_literal() {
        let mut store = MemoryStore::default();
        persist_info_dismissed(&mut store, KEY);
        assert_eq!(store.raw(KEY), Some("true"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn unavailable_storage_degrades_to_showing() {
        let mut store = BrowserStore;
        persist_info_dismissed(&mut store, KEY);
        assert!(!info_dismissed(&store, KEY));
    }
}
