//! Inquiry cart: product names a visitor asked about, persisted per origin.
//!
//! The store keeps no in-memory copy. Every call re-reads the persisted JSON
//! array, so independent pages (catalog, contact form, navbar badge) always
//! see the latest state. Each mutation is one synchronous read-then-write.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use thiserror::Error;

/// Storage key of the cart, a JSON array of strings
pub const INQUIRY_STORAGE_KEY: &str = "cartProducts";

/// Marker that starts the merged block inside a contact message
pub const INQUIRY_BLOCK_MARKER: &str = "\n\nInterested in:";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("cannot encode value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Minimal string key-value storage (browser `localStorage` shape)
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// In-memory storage; clones share the same map, like two pages of one origin
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

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InquiryCartStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> InquiryCartStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Current set in insertion order; corrupt or missing data reads as empty
    pub fn items(&self) -> Vec<String> {
        let Some(raw) = self.storage.get_item(INQUIRY_STORAGE_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(items) => {
                let mut seen = HashSet::new();
                items
                    .into_iter()
                    .filter(|item| seen.insert(item.clone()))
                    .collect()
            }
            Err(e) => {
                log::warn!("inquiry cart: ignoring unreadable stored value: {}", e);
                Vec::new()
            }
        }
    }

    pub fn count(&self) -> usize {
        self.items().len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items().iter().any(|item| item == name.trim())
    }

    /// Append `name` unless present. Returns whether the set changed.
    pub fn add(&self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        let mut items = self.items();
        if items.iter().any(|item| item == name) {
            return false;
        }
        items.push(name.to_string());
        self.persist(&items)
    }

    /// Returns whether the set changed
    pub fn remove(&self, name: &str) -> bool {
        let name = name.trim();
        let mut items = self.items();
        let before = items.len();
        items.retain(|item| item != name);
        if items.len() == before {
            return false;
        }
        self.persist(&items)
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(INQUIRY_STORAGE_KEY) {
            log::warn!("inquiry cart: clear failed: {}", e);
        }
    }

    /// Merge the current set into a contact message, see
    /// [`compose_inquiry_message`].
    pub fn drain_into_message(&self, existing_message: &str) -> String {
        compose_inquiry_message(existing_message, &self.items())
    }

    fn persist(&self, items: &[String]) -> bool {
        let result = serde_json::to_string(items)
            .map_err(StorageError::from)
            .and_then(|raw| self.storage.set_item(INQUIRY_STORAGE_KEY, &raw));

        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("inquiry cart: write failed: {}", e);
                false
            }
        }
    }
}

/// `"\n\nInterested in: a, b, c"`, or `None` for an empty set
pub fn inquiry_block(items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(format!("{} {}", INQUIRY_BLOCK_MARKER, items.join(", ")))
}

/// Append the inquiry block for `items` to `existing`.
///
/// Any block already in `existing` is replaced, so the result carries
/// exactly one block listing the current items. Idempotent for a fixed
/// item set.
pub fn compose_inquiry_message(existing: &str, items: &[String]) -> String {
    let Some(block) = inquiry_block(items) else {
        return existing.to_string();
    };

    let mut message = strip_inquiry_block(existing);
    message.push_str(&block);
    message
}

/// Remove the inquiry block and everything after it
pub fn strip_inquiry_block(message: &str) -> String {
    match message.find(INQUIRY_BLOCK_MARKER) {
        Some(pos) => message[..pos].to_string(),
        None => message.to_string(),
    }
}
