use std::path::PathBuf;
use crate::core::error::{ProfileDirError, Result};

const APP_DIR: &str = "profile-directory";

pub fn get_config_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => {
            xdg_or_home("XDG_CONFIG_HOME", ".config")?
        },
        "macos" => home()?.join("Library/Application Support"),
        _ => dirs::config_dir().ok_or_else(|| missing("config"))?,
    };

    Ok(base.join(APP_DIR))
}

/// Where credentials are kept
pub fn get_data_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => {
            xdg_or_home("XDG_DATA_HOME", ".local/share")?
        },
        "macos" => home()?.join("Library/Application Support"),
        _ => dirs::data_local_dir().ok_or_else(|| missing("data"))?,
    };

    Ok(base.join(APP_DIR).join("session"))
}

/// Where the geocode cache is kept
pub fn get_cache_directory() -> Result<PathBuf> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => {
            xdg_or_home("XDG_CACHE_HOME", ".cache")?
        },
        "macos" => home()?.join("Library/Caches"),
        _ => dirs::cache_dir().ok_or_else(|| missing("cache"))?,
    };

    Ok(base.join(APP_DIR))
}

fn xdg_or_home(var: &str, fallback: &str) -> Result<PathBuf> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Ok(home()?.join(fallback)),
    }
}

fn home() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| missing("home"))
}

fn missing(what: &str) -> ProfileDirError {
    ProfileDirError::config_error(format!("Could not determine {what} directory"))
}
