//! Runtime configuration read from the environment.
//!
//! | variable           | default                  |
//! |--------------------|--------------------------|
//! | `DDS_HOST`         | `127.0.0.1`              |
//! | `DDS_PORT`         | `8080`                   |
//! | `DDS_DATABASE`     | `driving_schools.sqlite` |
//! | `DDS_OPEN_BROWSER` | `true`                   |

use log::{info, warn};
use std::{env, fmt::Display, path::PathBuf, str::FromStr};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite file holding the detail records. Created on first start.
    pub database_path: PathBuf,
    /// Open the UI in the default browser once the server is up.
    pub open_browser: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: try_load("DDS_HOST", "127.0.0.1".to_string()),
            port: try_load("DDS_PORT", 8080),
            database_path: PathBuf::from(try_load(
                "DDS_DATABASE",
                "driving_schools.sqlite".to_string(),
            )),
            open_browser: try_load("DDS_OPEN_BROWSER", true),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?} ({e}), using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
