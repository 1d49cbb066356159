// Profile Finder platform paths for Windows
// Data: %APPDATA%/ProfileFinder

use std::env;
use std::path::PathBuf;

/// Returns the data directory for Profile Finder on Windows.
/// `%APPDATA%/ProfileFinder`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("ProfileFinder")
}
