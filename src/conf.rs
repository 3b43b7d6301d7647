//! Runtime configuration, read from `TCTRACK_*` environment variables.

use std::path::PathBuf;

use chrono::{Datelike, Utc};
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_SECTOR_URL: &str = "https://www.nrlmry.navy.mil/tcdat/sectors/updated_sector_file";
pub const DEFAULT_TRACK_ROOT: &str = "https://www.nrlmry.navy.mil/tcdat";

#[derive(Debug, Clone, Deserialize)]
pub struct Conf {
    /// Listing of currently active storms.
    pub sector_url: String,
    /// Root that per-season track files hang off.
    pub track_root: String,
    pub season: i32,
    /// The NRL host serves an incomplete certificate chain.
    pub accept_invalid_certs: bool,
    pub timeout_secs: u64,
    pub output_dir: Option<PathBuf>,
}

impl Conf {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("sector_url", DEFAULT_SECTOR_URL)?
            .set_default("track_root", DEFAULT_TRACK_ROOT)?
            .set_default("season", i64::from(Utc::now().year()))?
            .set_default("accept_invalid_certs", true)?
            .set_default("timeout_secs", 60_i64)?
            .add_source(Environment::with_prefix("TCTRACK").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Directory parquet files are written to; the home directory unless set.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
