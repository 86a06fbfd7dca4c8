// src/store/json.rs

use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::AppError;

/// Reads a JSON document from `path`.
///
/// When the file is missing or does not parse, `default` is written to `path`
/// and returned instead. Only a failure to write the default is an error.
pub fn load<T>(path: &Path, default: T) -> Result<T, AppError>
where
    T: Serialize + DeserializeOwned,
{
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("{} not found, writing default", path.display());
            save(path, &default)?;
            return Ok(default);
        }
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_slice(&raw) {
        Ok(data) => Ok(data),
        Err(e) => {
            tracing::warn!(
                "{} is not valid ({}), replacing it with default",
                path.display(),
                e
            );
            save(path, &default)?;
            Ok(default)
        }
    }
}

/// Overwrites `path` with `data`, pretty-printed with four-space indentation.
pub fn save<T>(path: &Path, data: &T) -> Result<(), AppError>
where
    T: Serialize + ?Sized,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    data.serialize(&mut ser)
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    buf.push(b'\n');

    fs::write(path, buf)?;
    Ok(())
}

/// A JSON document kept in memory and mirrored to one file.
///
/// Every `update` rewrites the whole file. The lock serialises writers in this
/// process only; another process pointed at the same file can still interleave
/// its read-modify-write with ours and lose updates.
#[derive(Debug)]
pub struct JsonStore<T> {
    path: PathBuf,
    data: RwLock<T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn open(path: impl Into<PathBuf>, default: T) -> Result<Self, AppError> {
        let path = path.into();
        let data = load(&path, default)?;
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `f` against the current document.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, AppError> {
        let guard = self
            .data
            .read()
            .map_err(|_| AppError::InternalServerError("store lock poisoned".to_string()))?;
        Ok(f(&guard))
    }

    /// Applies `f` to a copy of the document, persists the copy and only then
    /// makes it current. If `f` or the write fails, nothing changes.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> Result<R, AppError>) -> Result<R, AppError> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| AppError::InternalServerError("store lock poisoned".to_string()))?;

        let mut next = guard.clone();
        let out = f(&mut next)?;
        save(&self.path, &next)?;
        *guard = next;
        Ok(out)
    }
}
