//! Persistence of the data text and of the app session.
//!
//! `TextStore` is the seam through which the text content is loaded and
//! saved. `Storage` collects session state and provides methods to
//! store/load it to/from a JSON file.

use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::string_error::ErrorStringExt;

const STORAGE_FILE: &str = "./.app_session.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to load {path:?}: {reason}")]
    LoadFailed { path: PathBuf, reason: String },

    #[error("failed to save {path:?}: {reason}")]
    SaveFailed { path: PathBuf, reason: String },
}

pub trait TextStore {
    fn load(&self) -> Result<String, StorageError>;
    fn save(&self, text: &str) -> Result<(), StorageError>;
}

/// Stores the text in a single file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextStore for FileStore {
    fn load(&self) -> Result<String, StorageError> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|err| StorageError::LoadFailed {
                path: self.path.clone(),
                reason: err.to_string(),
            })?;
        log::debug!("loaded {} bytes from {:?}", text.len(), self.path);
        Ok(text)
    }

    fn save(&self, text: &str) -> Result<(), StorageError> {
        std::fs::write(&self.path, text).map_err(|err| StorageError::SaveFailed {
            path: self.path.clone(),
            reason: err.to_string(),
        })?;
        log::debug!("saved {} bytes to {:?}", text.len(), self.path);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
pub struct Storage<S> {
    pub session: S,
}

impl<S> Storage<S>
where
    for<'a> S: Serialize + Deserialize<'a>,
{
    pub fn new(session: S) -> Self {
        Self { session }
    }

    pub fn save_json(&self, input_path: Option<&Path>) -> Result<(), String> {
        let default_path = PathBuf::from(STORAGE_FILE);
        let output_path = input_path.unwrap_or(&default_path);
        let file =
            std::fs::File::create(output_path).err_to_string("could not open storage file")?;
        to_writer(file, &self).err_to_string("could not save app state to json")?;
        log::debug!("saved app state to file {:?}", output_path.canonicalize());
        Ok(())
    }

    pub fn load_json(input_path: Option<&Path>) -> Result<Storage<S>, String> {
        let default_path = PathBuf::from(STORAGE_FILE);
        let input_path = input_path.unwrap_or(&default_path);
        let file = std::fs::File::open(input_path).err_to_string("could not open storage file")?;
        let storage =
            from_reader(file).err_to_string("could not load app state from storage file")?;
        Ok(storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Session {
        text: String,
        selected: Option<String>,
    }

    #[test]
    fn test_file_store_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data.tsd"));
        store.save("@a\tnull\t1,2\n").unwrap();
        assert_eq!(store.load().unwrap(), "@a\tnull\t1,2\n");
    }

    #[test]
    fn test_file_store_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("missing.tsd"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, StorageError::LoadFailed { ref path, .. } if path == store.path()));
    }

    #[test]
    fn test_file_store_save_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("no_such_dir").join("data.tsd"));
        assert!(matches!(
            store.save("x"),
            Err(StorageError::SaveFailed { .. })
        ));
    }

    #[test]
    fn test_session_json() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let session = Session {
            text: "hello\n".into(),
            selected: Some("KMeans".into()),
        };
        Storage::new(session).save_json(Some(&path)).unwrap();
        let Storage { session } = Storage::<Session>::load_json(Some(&path)).unwrap();
        assert_eq!(
            session,
            Session {
                text: "hello\n".into(),
                selected: Some("KMeans".into()),
            }
        );
    }
}
