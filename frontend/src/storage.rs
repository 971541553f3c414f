//! Persistence of the ledger and settings in a string key-value store.
//!
//! The browser's `localStorage` is the production backend; [`MemoryStorage`]
//! stands in for it in tests and when the browser refuses storage access.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::{AppConfig, Settings};
use crate::error::{LedgerError, Result};
use crate::model::Transaction;

/// Minimal get/set string store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// `window.localStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| LedgerError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(LedgerError::storage)?
            .ok_or_else(|| LedgerError::Storage("localStorage is disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(LedgerError::storage)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(LedgerError::storage)
    }
}

/// In-process store. Clones share the same slots.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following `set_item` fail, mimicking an exceeded quota.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn put_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(LedgerError::Storage("quota exceeded".to_string()));
        }
        self.put_raw(key, value);
        Ok(())
    }
}

/// Local storage when the browser grants it, memory otherwise.
pub fn browser_or_memory() -> Box<dyn KeyValueStore> {
    match BrowserStorage::local() {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            warn!(error = %err, "falling back to in-memory storage");
            Box::new(MemoryStorage::new())
        }
    }
}

/// Reads and writes the serialized ledger and settings slots.
pub struct LedgerStorage<S> {
    backend: S,
    transactions_key: &'static str,
    settings_key: &'static str,
}

impl<S: KeyValueStore> LedgerStorage<S> {
    pub fn new(backend: S, config: &AppConfig) -> Self {
        Self {
            backend,
            transactions_key: config.transactions_key,
            settings_key: config.settings_key,
        }
    }

    /// Missing, unreadable or malformed data all read as an empty ledger.
    pub fn load(&self) -> Vec<Transaction> {
        let raw = match self.backend.get_item(self.transactions_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "could not read stored transactions");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Transaction>>(&raw) {
            Ok(list) => {
                debug!(count = list.len(), "loaded transactions");
                list
            }
            Err(err) => {
                warn!(error = %err, "stored transactions are malformed; starting empty");
                Vec::new()
            }
        }
    }

    /// Rewrites the whole slot.
    pub fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let raw = serde_json::to_string(transactions)?;
        self.backend.set_item(self.transactions_key, &raw)?;
        debug!(count = transactions.len(), "saved transactions");
        Ok(())
    }

    pub fn load_settings(&self) -> Settings {
        match self.backend.get_item(self.settings_key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "stored settings are malformed; using defaults");
                Settings::default()
            }),
            Ok(None) => Settings::default(),
            Err(err) => {
                warn!(error = %err, "could not read settings");
                Settings::default()
            }
        }
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let raw = serde_json::to_string(settings)?;
        self.backend.set_item(self.settings_key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;

    fn storage() -> (MemoryStorage, LedgerStorage<MemoryStorage>) {
        let backend = MemoryStorage::new();
        let storage = LedgerStorage::new(backend.clone(), &AppConfig::default());
        (backend, storage)
    }

    #[test]
    fn missing_slot_loads_empty() {
        let (_, storage) = storage();
        assert!(storage.load().is_empty());
    }

    #[test]
    fn malformed_slot_loads_empty() {
        let (backend, storage) = storage();
        backend.put_raw("transactions", "{not json");
        assert!(storage.load().is_empty());

        backend.put_raw("transactions", r#"{"amount": 3}"#);
        assert!(storage.load().is_empty());

        backend.put_raw("transactions", "null");
        assert!(storage.load().is_empty());
    }

    #[test]
    fn reads_the_plain_json_layout() {
        let (backend, storage) = storage();
        backend.put_raw(
            "transactions",
            r#"[{"amount":50,"description":"Lunch","category":"expense"}]"#,
        );
        assert_eq!(storage.load(), vec![Transaction::new(50.0, "Lunch", "expense")]);
    }

    #[test]
    fn save_then_load_preserves_order_and_values() {
        let (_, storage) = storage();
        let list = vec![
            Transaction::new(200.0, "Salary", "income"),
            Transaction::new(0.1, "", "misc"),
            Transaction::new(50.25, "Lunch", "food"),
        ];
        storage.save(&list).unwrap();
        let loaded = storage.load();
        storage.save(&loaded).unwrap();
        assert_eq!(storage.load(), list);
    }

    #[test]
    fn failed_write_is_reported() {
        let (backend, storage) = storage();
        backend.set_fail_writes(true);
        let err = storage.save(&[Transaction::new(1.0, "", "income")]).unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
        assert!(backend.raw("transactions").is_none());
    }

    #[test]
    fn settings_round_trip_and_degrade() {
        let (backend, storage) = storage();
        assert_eq!(storage.load_settings(), Settings::default());

        let settings = Settings {
            theme: Theme::Dark,
            currency_symbol: "$".to_string(),
        };
        storage.save_settings(&settings).unwrap();
        assert_eq!(storage.load_settings(), settings);

        backend.put_raw("settings", "garbage");
        assert_eq!(storage.load_settings(), Settings::default());
    }
}
