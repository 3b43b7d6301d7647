pub mod active;
pub mod classify;
pub mod parse;
pub mod season;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::{Datelike, Local};
use reqwest::Client;

pub use active::active;
pub use classify::classify;
pub use parse::parse;
pub use season::season;

use crate::{
    cli::create_spinner,
    conf::Conf,
    fetch::fetch_tracks,
    parquet,
    track::{Framing, TrackLabels, TrackSummary},
};

pub fn make_parquet_file_name(dir: &Path, basin: &str, season: i32) -> PathBuf {
    let today = Local::now();
    let file_name = format!(
        "tctrack-{}-{}-{}-{:02}-{:02}.parquet",
        basin.to_lowercase(),
        season,
        today.year(),
        today.month(),
        today.day()
    );

    dir.join(file_name)
}

/// Fetches, reports and saves the given storms. Returns the parquet path.
async fn collect(
    conf: &Conf,
    client: &Client,
    basin: &str,
    season: i32,
    storm_ids: &[String],
    framing: Framing,
) -> Result<String> {
    let tracks = fetch_tracks(client, &conf.track_root, season, storm_ids).await?;
    if tracks.is_empty() {
        bail!("No tracks could be ingested for basin {}", basin.to_uppercase());
    }

    for track in &tracks {
        report(track.track.summary(), framing);
        println!("  SOURCE: {}", track.url);
    }

    let parquet_file_name = make_parquet_file_name(&conf.output_dir(), basin, season);
    let bar = create_spinner("Writing parquet file...".to_string());
    let rows = parquet::save_tracks(&tracks, &parquet_file_name)?;
    bar.finish_with_message(format!("{} fixes from {} storms written", rows, tracks.len()));

    Ok(parquet_file_name.to_string_lossy().to_string())
}

/// Map framing for an optional `--zoom` factor; fixed margins otherwise.
pub fn framing(zoom: Option<f32>) -> Result<Framing> {
    match zoom {
        None => Ok(Framing::default()),
        Some(factor) if factor.is_finite() && factor > 0.0 => Ok(Framing::Zoom(factor)),
        Some(factor) => bail!("Zoom factor must be positive, got {}", factor),
    }
}

/// Prints the captions and map window for one storm.
pub fn report(summary: &TrackSummary, framing: Framing) {
    let labels = TrackLabels::new(summary);
    let extent = summary.bounds.framed(framing);

    println!();
    println!("{} ({})", labels.title, summary.storm_id);
    println!("  {}", labels.category);
    println!("  {}", labels.peak);
    println!("  {}", labels.span);
    println!("  {}", labels.latest);
    println!(
        "  MAP: {:.1}..{:.1} E, {:.1}..{:.1} N",
        extent.west, extent.east, extent.south, extent.north
    );
}

// -- Tests -------------------------------------------------------------------
