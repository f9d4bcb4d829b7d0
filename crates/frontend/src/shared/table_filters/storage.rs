use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::shared::error::FilterError;

/// String key-value storage the filter store persists into.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterError>;
}

/// `window.sessionStorage`: survives reloads, cleared when the browser session ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStorage;

fn get_session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

impl KeyValueStorage for SessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        get_session_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterError> {
        let storage = get_session_storage().ok_or(FilterError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| FilterError::StorageWrite {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}

/// In-memory storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FilterError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
