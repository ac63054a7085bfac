//! Common-password blacklist
//!
//! Loads a newline-separated wordlist once and answers case-insensitive
//! membership queries. The list is an explicit immutable value handed to
//! callers, not shared mutable state, so evaluations under different lists
//! can run side by side.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the default blacklist location.
pub const BLACKLIST_PATH_ENV: &str = "PWD_CHECKER_BLACKLIST_PATH";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/common-passwords.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// An immutable set of known-weak passwords.
#[derive(Debug, Clone)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Loads a blacklist from a newline-separated file.
    ///
    /// Entries are trimmed and lowercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or
    /// contains no entries.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load failed, file not found: {}", path.display());
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        let entries: HashSet<String> = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        if entries.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load failed, empty file: {}", path.display());
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist loaded: {} passwords from {}",
            entries.len(),
            path.display()
        );

        Ok(Self { entries })
    }

    /// Loads the blacklist from the path in [`BLACKLIST_PATH_ENV`], falling
    /// back to `./assets/common-passwords.txt`.
    pub fn from_env() -> Result<Self, BlacklistError> {
        let path = std::env::var(BLACKLIST_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH));
        Self::load(path)
    }

    /// Number of loaded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are loaded. Cannot happen through [`Self::load`].
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }
}
