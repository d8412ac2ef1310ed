//! Save/load of small JSON documents
//!
//! Each document lives under a string key:
//! - Web: `window.localStorage[key]`
//! - Native: `<data dir>/<key>.json`, data dir from `NEON_TOWER_DATA_DIR`
//!   or `.neon-tower` in the working directory
//!
//! Failures never reach the game: loads fall back to `None`, saves return
//! `false`, and the cause is logged.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Environment variable overriding the native storage directory
pub const DATA_DIR_ENV: &str = "NEON_TOWER_DATA_DIR";
/// Default native storage directory
pub const DEFAULT_DATA_DIR: &str = ".neon-tower";

/// Load a document from LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()?;

    let json = storage.get_item(key).ok().flatten()?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding unreadable '{}': {}", key, e);
            None
        }
    }
}

/// Save a document to LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn save<T: Serialize>(key: &str, value: &T) -> bool {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    let Some(storage) = storage else {
        log::warn!("LocalStorage unavailable, '{}' not saved", key);
        return false;
    };
    match serde_json::to_string(value) {
        Ok(json) => storage.set_item(key, &json).is_ok(),
        Err(e) => {
            log::warn!("Failed to encode '{}': {}", key, e);
            false
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    use serde::Serialize;
    use serde::de::DeserializeOwned;

    /// Storage directory for this process
    pub fn data_dir() -> PathBuf {
        std::env::var_os(super::DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(super::DEFAULT_DATA_DIR))
    }

    pub fn path_for(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{key}.json"))
    }

    pub fn read<T: DeserializeOwned>(dir: &Path, key: &str) -> io::Result<Option<T>> {
        let json = match fs::read_to_string(path_for(dir, key)) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Write via a temp file so a crash never leaves half a document behind
    pub fn write<T: Serialize>(dir: &Path, key: &str, value: &T) -> io::Result<()> {
        fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(value)?;
        let path = path_for(dir, key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::data_dir;

/// Load a document from `dir`
#[cfg(not(target_arch = "wasm32"))]
pub fn load_from<T: DeserializeOwned>(dir: &std::path::Path, key: &str) -> Option<T> {
    match native::read(dir, key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to load '{}' from {}: {}", key, dir.display(), e);
            None
        }
    }
}

/// Save a document into `dir`
#[cfg(not(target_arch = "wasm32"))]
pub fn save_to<T: Serialize>(dir: &std::path::Path, key: &str, value: &T) -> bool {
    match native::write(dir, key, value) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to save '{}' to {}: {}", key, dir.display(), e);
            false
        }
    }
}

/// Load a document from the default data dir
#[cfg(not(target_arch = "wasm32"))]
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    load_from(&data_dir(), key)
}

/// Save a document into the default data dir
#[cfg(not(target_arch = "wasm32"))]
pub fn save<T: Serialize>(key: &str, value: &T) -> bool {
    save_to(&data_dir(), key, value)
}
