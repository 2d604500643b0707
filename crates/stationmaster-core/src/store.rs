// Rust guideline compliant 2026-08-23

//! Durable storage for the boarding config document.
//!
//! This module provides load/save of the JSON document backing the flag
//! registry, with atomic writes (temp file + rename) and cross-process
//! file locking.

use crate::{BoardingConfig, Error, Result, SCHEMA_VERSION};
use std::path::{Path, PathBuf};

/// Storage engine for the boarding config document.
///
/// All writes go through a temp file in the same directory followed by an
/// atomic rename, so an interrupted write never corrupts the previously
/// persisted document.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Path to the boarding config file.
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a new ConfigStore for the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "path cannot be empty"),
            ));
        }
        Ok(Self { path })
    }

    /// Returns the boarding config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the boarding config document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist (`FileNotFound`)
    /// - The file cannot be read (`Io`)
    /// - The document is malformed or its schema version is newer than this
    ///   build understands (`Parse`)
    pub fn load(&self) -> Result<BoardingConfig> {
        if !self.path.exists() {
            return Err(Error::FileNotFound {
                path: self.path.clone(),
            });
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;

        let config: BoardingConfig = serde_json::from_str(&content).map_err(|e| Error::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if config.schema_version > SCHEMA_VERSION {
            return Err(Error::Parse {
                path: self.path.clone(),
                message: format!(
                    "unsupported schema version {} (this build understands up to {})",
                    config.schema_version, SCHEMA_VERSION
                ),
            });
        }

        Ok(config)
    }

    /// Saves the boarding config document atomically.
    ///
    /// Writes to `<path>.tmp` in the same directory, syncs, then renames
    /// into place. Two concurrent writers each observe a consistent prior
    /// state and the last rename wins.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the temp file cannot be
    /// written, synced, or renamed.
    pub fn save(&self, config: &BoardingConfig) -> Result<()> {
        use std::io::Write;

        let json = serde_json::to_string_pretty(config).map_err(|e| Error::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let temp_path = self.temp_path();
        {
            let mut file =
                std::fs::File::create(&temp_path).map_err(|e| Error::io(&temp_path, e))?;
            file.write_all(json.as_bytes())
                .map_err(|e| Error::io(&temp_path, e))?;
            file.write_all(b"\n")
                .map_err(|e| Error::io(&temp_path, e))?;
            file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
        }

        std::fs::rename(&temp_path, &self.path).map_err(|e| Error::io(&self.path, e))?;

        Ok(())
    }

    /// Creates an empty, well-formed document at the path.
    ///
    /// Refuses to clobber: if a file already exists at the path, nothing is
    /// written.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInitialized` if the file exists, or an IO error if
    /// the document cannot be written.
    pub fn initialize(&self) -> Result<BoardingConfig> {
        if self.path.exists() {
            return Err(Error::AlreadyInitialized {
                path: self.path.clone(),
            });
        }

        let config = BoardingConfig::new();
        self.save(&config)?;
        Ok(config)
    }

    /// Executes a closure while holding an exclusive lock on the config
    /// file.
    ///
    /// The lock is a platform-appropriate advisory lock (flock on Unix,
    /// LockFileEx on Windows) on a sibling `.lock` file, serializing
    /// concurrent mutating operations across processes. Acquisition does
    /// not block: a held lock fails the operation immediately rather than
    /// waiting indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired or the closure
    /// fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;

        let lock_path = self.path.with_extension("lock");
        let lock_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)
            .map_err(|e| Error::io(&lock_path, e))?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::io(
                &lock_path,
                std::io::Error::new(
                    std::io::ErrorKind::WouldBlock,
                    format!("failed to acquire lock: {}", e),
                ),
            )
        })?;

        let result = f();

        // Release even when the closure failed.
        let _ = lock_file.unlock();

        result
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
