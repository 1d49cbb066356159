// Profile Finder platform paths for Linux
// Data: ~/.local/share/profile-finder

use std::env;
use std::path::PathBuf;

/// Returns the data directory for Profile Finder on Linux.
/// Uses `$XDG_DATA_HOME/profile-finder` if set, otherwise `~/.local/share/profile-finder`.
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok())
}

fn data_dir_from(xdg_data_home: Option<String>, home: Option<String>) -> PathBuf {
    match xdg_data_home.filter(|p| !p.is_empty()) {
        Some(xdg) => PathBuf::from(xdg).join("profile-finder"),
        None => PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")))
            .join(".local")
            .join("share")
            .join("profile-finder"),
    }
}
