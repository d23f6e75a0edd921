use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("local storage write failed for {key}")]
    WriteFailed { key: String },
}

/// String key/value slots that survive a reload.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. Values are raw strings, not JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferenceStore;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalPreferenceStore {
    fn load(&self, key: &str) -> Option<String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed {
                key: key.to_string(),
            })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for LocalPreferenceStore {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::{PreferenceStore, StorageError};

    /// Shared in-memory store; clones see the same slots, which lets a test
    /// "reload" by building a second controller over the same data.
    #[derive(Clone, Debug, Default)]
    pub struct MemoryStore {
        slots: Rc<RefCell<HashMap<String, String>>>,
        pub fail_writes: bool,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .slots
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }

        pub fn get(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.get(key)
        }

        fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::WriteFailed {
                    key: key.to_string(),
                });
            }
            self.slots
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}
