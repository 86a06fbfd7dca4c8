// src/store/student_registry.rs

use std::{collections::BTreeMap, path::PathBuf, sync::Arc};

use crate::{error::AppError, store::json::JsonStore};

/// Registration number -> display name, backed by `students.json`.
#[derive(Debug, Clone)]
pub struct StudentRegistry {
    store: Arc<JsonStore<BTreeMap<String, String>>>,
}

impl StudentRegistry {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Ok(Self {
            store: Arc::new(JsonStore::open(path, BTreeMap::new())?),
        })
    }

    /// Records `name` for `reg`; the latest submission wins.
    pub fn register(&self, reg: &str, name: &str) -> Result<(), AppError> {
        self.store.update(|students| {
            students.insert(reg.to_string(), name.to_string());
            Ok(())
        })
    }

    /// Puts back an entry captured with `name_of`; `None` removes `reg`.
    pub fn restore(&self, reg: &str, previous: Option<String>) -> Result<(), AppError> {
        self.store.update(|students| {
            match previous {
                Some(name) => students.insert(reg.to_string(), name),
                None => students.remove(reg),
            };
            Ok(())
        })
    }

    pub fn name_of(&self, reg: &str) -> Result<Option<String>, AppError> {
        self.store.read(|students| students.get(reg).cloned())
    }

    pub fn all(&self) -> Result<BTreeMap<String, String>, AppError> {
        self.store.read(|students| students.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_registered_name_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        let registry = StudentRegistry::open(&path).unwrap();

        registry.register("12345678", "Ada").unwrap();
        registry.register("12345678", "Ada L.").unwrap();

        assert_eq!(registry.name_of("12345678").unwrap().as_deref(), Some("Ada L."));
        assert_eq!(registry.all().unwrap().len(), 1);

        let reopened = StudentRegistry::open(&path).unwrap();
        assert_eq!(reopened.name_of("12345678").unwrap().as_deref(), Some("Ada L."));
    }

    #[test]
    fn restore_puts_back_or_removes_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        let registry = StudentRegistry::open(&path).unwrap();

        registry.register("12345678", "Ada").unwrap();
        registry.register("12345678", "Mallory").unwrap();
        registry.restore("12345678", Some("Ada".to_string())).unwrap();
        assert_eq!(registry.name_of("12345678").unwrap().as_deref(), Some("Ada"));

        registry.register("87654321", "Grace").unwrap();
        registry.restore("87654321", None).unwrap();
        assert_eq!(registry.name_of("87654321").unwrap(), None);

        let reopened = StudentRegistry::open(&path).unwrap();
        assert_eq!(reopened.all().unwrap().len(), 1);
    }
}
