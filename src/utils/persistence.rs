//! Read-only JSON helpers for files under ~/.flappy/.
//!
//! Flappy never writes game state to disk; the directory only holds the
//! optional `config.json` and the log file.

use log::warn;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.flappy/ directory path, creating it if needed.
pub fn flappy_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".flappy");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.flappy/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(flappy_dir()?.join(filename))
}

/// Read a JSON file, returning `T::default()` if it is missing or invalid.
///
/// A file that exists but fails to parse is logged, since that is almost
/// always a typo the player wants to know about.
pub fn read_json_or_default<T: Default + DeserializeOwned>(path: &Path) -> T {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => return T::default(),
    };
    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring {}: {}", path.display(), e);
            T::default()
        }
    }
}

/// Load a JSON file from ~/.flappy/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + DeserializeOwned>(filename: &str) -> T {
    match data_path(filename) {
        Ok(path) => read_json_or_default(&path),
        Err(_) => T::default(),
    }
}
