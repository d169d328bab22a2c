// src/config.rs
use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use eyre::Result;

/// Settings for the fixture CLI. The classification core takes no
/// configuration beyond `KnownAddresses`.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub fixture_dir: PathBuf,
}

pub fn load() -> Result<Config> {
    dotenv().ok();

    // Transaction API base URL (decoded transactions with transfers attached)
    let api_url = env::var("TX_API_URL")
        .unwrap_or_else(|_| "https://api.onceupon.xyz/v1".to_string())
        .trim_end_matches('/')
        .to_string();

    // Where grabbed fixtures land (default: fixtures/)
    let fixture_dir = env::var("FIXTURE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("fixtures"));

    Ok(Config { api_url, fixture_dir })
}
