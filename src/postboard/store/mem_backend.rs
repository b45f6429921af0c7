use super::backend::StorageBackend;
use crate::error::{PostError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since postboard is single-threaded,
/// which lets the `StorageBackend` trait keep `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a slot with raw text, bypassing the write-error switch.
    pub fn with_slot(self, key: &str, value: &str) -> Self {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    pub fn raw_slot(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PostError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        Ok(PathBuf::from(format!("/mem/{}.json", key)))
    }
}
