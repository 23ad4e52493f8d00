//! In-process [`KeyValueStore`], with switchable failures for tests.

use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryKv {
    items: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    fail_removes: Cell<bool>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent `get_item` fails while set.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Every subsequent `set_item` fails while set.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Every subsequent `remove_item` fails while set.
    pub fn set_fail_removes(&self, fail: bool) {
        self.fail_removes.set(fail);
    }

    /// Raw stored value, bypassing failure injection.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Store a raw value, bypassing failure injection.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKv {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(AppError::persistence("read", key, "store unavailable"));
        }
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes.get() {
            return Err(AppError::persistence("write", key, "store unavailable"));
        }
        self.insert_raw(key, value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        if self.fail_removes.get() {
            return Err(AppError::persistence("remove", key, "store unavailable"));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
