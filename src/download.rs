//! Fetches sector listings and track files over HTTP.

use std::time::Duration;

use anyhow::{Error, Result};
use log::debug;
use reqwest::Client;

use crate::conf::Conf;

/// Builds the HTTP client shared by every fetch in a run.
pub fn client(conf: &Conf) -> Result<Client> {
    let client = Client::builder()
        .danger_accept_invalid_certs(conf.accept_invalid_certs)
        .timeout(Duration::from_secs(conf.timeout_secs))
        .build()?;

    Ok(client)
}

/// Downloads `url` as text, failing on any non-success status.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, Error> {
    debug!("GET {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::msg(format!("Failed to download {}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(Error::msg(format!(
            "Failed to download {}: {}",
            url,
            response.status()
        )));
    }

    let text = response
        .text()
        .await
        .map_err(|e| Error::msg(format!("Error reading {}: {}", url, e)))?;

    Ok(text)
}

// -- Tests -------------------------------------------------------------------
