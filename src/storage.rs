//! Save slot on a key-value store (localStorage in the browser).

use std::cell::RefCell;
use std::collections::HashMap;

use log::{debug, warn};
use serde_json::Value;
use web_sys::Storage;

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::model::Progression;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub struct LocalStore {
    inner: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self> {
        let win = web_sys::window().ok_or_else(|| GameError::Storage("no window".into()))?;
        match win.local_storage() {
            Ok(Some(inner)) => Ok(Self { inner }),
            Ok(None) => Err(GameError::Storage("localStorage unavailable".into())),
            Err(e) => Err(GameError::storage(e)),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key).map_err(GameError::storage)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set_item(key, value).map_err(GameError::storage)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove_item(key).map_err(GameError::storage)
    }
}

/// In-process store for tests and for running without localStorage.
#[derive(Default, Debug)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Reads the save slot. Never fails: anything missing or unreadable falls
/// back to the starting value for that field.
pub fn load_progression(store: &dyn KeyValueStore, cfg: &GameConfig) -> Progression {
    let defaults = Progression::new(cfg);
    let raw = match store.get(&cfg.save_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return defaults,
        Err(e) => {
            warn!("save slot unreadable, starting fresh: {}", e);
            return defaults;
        }
    };
    let loaded = match serde_json::from_str::<Progression>(&raw) {
        Ok(p) => p,
        Err(e) => {
            debug!("strict load failed ({}), recovering per field", e);
            recover_fields(&raw, &defaults)
        }
    };
    loaded.sanitized(cfg)
}

fn recover_fields(raw: &str, defaults: &Progression) -> Progression {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
        warn!("save slot is not a JSON object, starting fresh");
        return defaults.clone();
    };
    let field = |key: &str, fallback: u64| map.get(key).and_then(Value::as_u64).unwrap_or(fallback);
    Progression {
        currency: field("currency", defaults.currency),
        click_power: field("clickPower", defaults.click_power),
        upgrade_cost: field("upgradeCost", defaults.upgrade_cost),
        evolution_stage: u32::try_from(field("evolutionStage", defaults.evolution_stage as u64))
            .unwrap_or(u32::MAX),
        boss_threshold: field("bossThreshold", defaults.boss_threshold),
    }
}

pub fn save_progression(store: &dyn KeyValueStore, cfg: &GameConfig, p: &Progression) -> Result<()> {
    let raw = serde_json::to_string(p)?;
    store.set(&cfg.save_key, &raw)
}

pub fn clear_progression(store: &dyn KeyValueStore, cfg: &GameConfig) -> Result<()> {
    store.remove(&cfg.save_key)
}
