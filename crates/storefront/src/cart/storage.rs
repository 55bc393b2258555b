//! Durable cart persistence.
//!
//! The cart table is stored as a single JSON document at a fixed path, read
//! once at startup and overwritten whole on every mutation. Any read failure
//! (missing file, unreadable file, malformed JSON) collapses to an empty
//! cart; write failures are logged and never surfaced to the shopper.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::CartLine;

/// File-backed storage for the cart table.
#[derive(Debug, Clone)]
pub struct CartStorage {
    path: PathBuf,
}

impl CartStorage {
    /// Create storage bound to the given file path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted cart table, treating every failure as empty.
    #[must_use]
    pub fn load(&self) -> Vec<CartLine> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No persisted cart, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read persisted cart, starting empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Persisted cart is malformed, starting empty"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted cart table with the given lines.
    pub fn save(&self, lines: &[CartLine]) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = fs::create_dir_all(parent)
        {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to create cart storage directory"
            );
            return;
        }

        let json = match serde_json::to_vec(lines) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize cart");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, json) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Failed to write persisted cart"
            );
        }
    }
}
