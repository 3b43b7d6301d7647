//! Fetch tracks for the storms currently listed in the sector file.

use anyhow::{bail, Result};
use log::info;

use crate::{
    cli::create_spinner,
    conf::Conf,
    download::{client, fetch_text},
    sectors::active_storm_ids,
};

use super::{collect, framing};

pub async fn active(basin: &str, season: Option<i32>, zoom: Option<f32>) -> Result<String> {
    let framing = framing(zoom)?;
    let conf = Conf::from_env()?;
    let season = season.unwrap_or(conf.season);
    let client = client(&conf)?;

    let bar = create_spinner("Downloading sector file...".to_string());
    let sector_text = fetch_text(&client, &conf.sector_url).await?;
    bar.finish_with_message("Sector file downloaded");

    let storm_ids = active_storm_ids(&sector_text, basin);
    if storm_ids.is_empty() {
        bail!("No active storms in basin {}", basin.to_uppercase());
    }
    info!("Active storms: {}", storm_ids.join(", "));

    collect(&conf, &client, basin, season, &storm_ids, framing).await
}
