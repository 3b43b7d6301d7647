//! Fetches and ingests a list of storms, one task per storm.

use anyhow::{Context, Result};
use futures::future::join_all;
use indicatif::ProgressBar;
use log::{error, info, warn};
use reqwest::Client;

use crate::{
    cli::create_progress_bar,
    download::fetch_text,
    sectors::track_url,
    track::TrackIngestor,
};

/// A storm's ingested track and where it came from.
#[derive(Debug, Clone)]
pub struct StormTrack {
    pub url: String,
    pub track: TrackIngestor,
}

/// Fetches every storm concurrently. Storms that fail are logged and left out;
/// the rest come back in the order of `storm_ids`.
pub async fn fetch_tracks(
    client: &Client,
    track_root: &str,
    season: i32,
    storm_ids: &[String],
) -> Result<Vec<StormTrack>> {
    let progress_bar = create_progress_bar(storm_ids.len() as u64, "Fetching tracks".to_string());

    let tasks: Vec<_> = storm_ids
        .iter()
        .map(|storm_id| {
            let client = client.clone();
            let storm_id = storm_id.clone();
            let url = track_url(track_root, season, &storm_id);
            let pb = progress_bar.clone();
            tokio::spawn(async move { fetch_track(&client, storm_id, url, pb).await })
        })
        .collect();

    let mut tracks = Vec::new();
    for result in join_all(tasks).await {
        match result {
            Ok(Ok(track)) => tracks.push(track),
            Ok(Err(e)) => warn!("Skipping storm: {:#}", e),
            Err(e) => error!("Task join error: {:?}", e),
        }
    }
    progress_bar.finish_with_message("Tracks fetched");

    Ok(tracks)
}

async fn fetch_track(
    client: &Client,
    storm_id: String,
    url: String,
    progress_bar: ProgressBar,
) -> Result<StormTrack> {
    let result = fetch_text(client, &url).await.and_then(|raw| {
        TrackIngestor::from_text(&raw).with_context(|| format!("Failed to ingest {}", storm_id))
    });
    progress_bar.inc(1);

    let track = result?;
    info!(
        "{}: {} fixes, {} skipped from {}",
        storm_id,
        track.records().len(),
        track.skipped(),
        url
    );

    Ok(StormTrack { url, track })
}

// -- Tests -------------------------------------------------------------------
