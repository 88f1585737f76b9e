// src/output/writer.rs
//! Persists finished posters to disk.
//!
//! This module is the only place where poster files are written,
//! keeping the compositing code pure and testable.

use crate::error::AppError;
use std::fs;
use std::path::Path;

/// Writes `bytes` to `path`, creating parent directories and replacing any
/// earlier poster at the same location.
pub fn write_poster(path: &Path, bytes: &[u8]) -> Result<usize, AppError> {
    log::debug!("Writing {} bytes to {}", bytes.len(), path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory(parent)?;
    }

    fs::write(path, bytes)?;

    log::info!("Wrote poster: {}", path.display());
    Ok(bytes.len())
}

fn ensure_directory(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", path.display()),
        )));
    }

    fs::create_dir_all(path)?;
    log::info!("Created directory: {}", path.display());
    Ok(())
}
