//! Fetch tracks for a numbered range of storms in one season.

use anyhow::{bail, Result};

use crate::{conf::Conf, download::client, sectors::season_storm_ids};

use super::{collect, framing};

pub async fn season(
    basin: &str,
    year: i32,
    from: u32,
    to: u32,
    zoom: Option<f32>,
) -> Result<String> {
    if from > to {
        bail!("Storm range {}..{} is empty", from, to);
    }
    let framing = framing(zoom)?;

    let conf = Conf::from_env()?;
    let client = client(&conf)?;
    let storm_ids = season_storm_ids(basin, year, from..=to);

    collect(&conf, &client, basin, year, &storm_ids, framing).await
}
