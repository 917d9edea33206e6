//! Atomic TOML file operations.
//!
//! Writes go through a temporary file, fsync and rename; read-modify-write
//! cycles hold an exclusive lock file so concurrent processes sharing one
//! profile directory cannot interleave updates.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use talenthub_core::TalentError;
use thiserror::Error;

/// Errors that can occur during atomic TOML operations.
#[derive(Debug, Error)]
pub enum AtomicTomlError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file exists but is not valid TOML for `T`.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// `T` could not be encoded as TOML.
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The lock file could not be acquired.
    #[error("Lock error: {0}")]
    Lock(String),
}

impl From<AtomicTomlError> for TalentError {
    fn from(err: AtomicTomlError) -> Self {
        match err {
            AtomicTomlError::Parse(e) => e.into(),
            AtomicTomlError::Serialize(e) => e.into(),
            other => TalentError::storage(other.to_string()),
        }
    }
}

/// A handle to a TOML file holding one `T`, with ACID-style guarantees.
///
/// Provides:
/// - **Atomicity**: writes go to a sibling temp file that is renamed over the target
/// - **Consistency**: the whole file is decoded as `T` on load and encoded on save
/// - **Isolation**: `update` holds an exclusive lock file for its read-modify-write
/// - **Durability**: the temp file is fsynced before the rename
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a handle; nothing is read or created until first use.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the TOML file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and decodes the file without taking the lock.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(T))` - The decoded contents
    /// * `Ok(None)` - The file is missing or blank
    /// * `Err(AtomicTomlError)` - Read or parse failure
    pub fn load(&self) -> Result<Option<T>, AtomicTomlError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(toml::from_str(&content)?))
    }

    /// Writes `data` atomically, creating parent directories as needed.
    ///
    /// Does not take the lock; use [`AtomicTomlFile::update`] when the new
    /// contents depend on the old ones.
    ///
    /// # Arguments
    ///
    /// * `data` - The value to encode
    pub fn save(&self, data: &T) -> Result<(), AtomicTomlError> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Locked read-modify-write.
    ///
    /// Loads the current value (or `default_value` when the file is missing),
    /// applies `f`, and saves the result while holding the lock.
    ///
    /// # Arguments
    ///
    /// * `default_value` - Starting value when the file does not exist yet
    /// * `f` - Mutation to apply
    ///
    /// # Returns
    ///
    /// Whatever `f` returns. Nothing is written when loading fails.
    pub fn update<R, F>(&self, default_value: T, f: F) -> Result<R, AtomicTomlError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        let result = f(&mut data);
        self.save(&data)?;

        Ok(result)
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicTomlError> {
        let invalid = |reason: &str| {
            AtomicTomlError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                reason.to_string(),
            ))
        };
        let parent = self
            .path
            .parent()
            .ok_or_else(|| invalid("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| invalid("Path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock held for the duration of an update.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicTomlError> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtomicTomlError::Lock(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.lock_path);
    }
}
