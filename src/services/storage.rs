// ============================================================================
// STORAGE - Almacenamiento clave-valor (localStorage en navegador, memoria en tests)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::{window, Storage};
use crate::errors::StorageError;

/// Almacén clave-valor síncrono con semántica de localStorage
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Eliminar una clave inexistente no es un error
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// localStorage del navegador
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage(&self) -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }
}

/// Almacén en memoria. Los clones comparten el mismo mapa, así un test
/// puede inspeccionar lo que escribió el ViewModel.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    fail_reads: Rc<RefCell<bool>>,
    fail_writes: Rc<RefCell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simular un localStorage que falla al leer
    pub fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.borrow_mut() = fail;
    }

    /// Simular un localStorage lleno o bloqueado al escribir
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if *self.fail_reads.borrow() {
            return Err(StorageError::Read {
                key: key.to_string(),
                message: "lectura simulada fallida".to_string(),
            });
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if *self.fail_writes.borrow() {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "escritura simulada fallida".to_string(),
            });
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if *self.fail_writes.borrow() {
            return Err(StorageError::Write {
                key: key.to_string(),
                message: "escritura simulada fallida".to_string(),
            });
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_items() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set_item("jobs", "[]").unwrap();
        assert_eq!(other.get_item("jobs").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove_item("jobs").is_ok());
        assert!(storage.is_empty());
    }

    #[test]
    fn simulated_read_failure() {
        let storage = MemoryStorage::new();
        storage.set_item("jobs", "[]").unwrap();
        storage.set_fail_reads(true);
        assert!(matches!(storage.get_item("jobs"), Err(StorageError::Read { .. })));
    }
}
