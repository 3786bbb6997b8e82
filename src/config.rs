//! Configuration management for the song library client.
//!
//! Configuration values come from environment variables, optionally seeded
//! from a `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

/// Base URL used when `SONG_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://fullstack-p2-api.onrender.com";

/// Request timeout used when `SONG_API_TIMEOUT_SECS` is not set or invalid.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `songcli` directory if it doesn't exist and loads the `.env`
/// file inside it when present. Variables already set in the environment are
/// not overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/songcli/.env`
/// - macOS: `~/Library/Application Support/songcli/.env`
/// - Windows: `%LOCALAPPDATA%/songcli/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the base URL of the song API.
///
/// Reads `SONG_API_URL`, falling back to [`DEFAULT_API_URL`]. The API
/// endpoints (`/api/getall`, `/api/songs/{id}`, ...) are resolved below it.
pub fn api_url() -> String {
    env::var("SONG_API_URL")
        .ok()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Returns the per-request timeout from `SONG_API_TIMEOUT_SECS`.
pub fn request_timeout() -> Duration {
    let secs = env::var("SONG_API_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("songcli/.env");
    path
}
