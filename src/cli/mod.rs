//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use clap::{command, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get tracks for the storms currently active in a basin
    Active {
        /// Basin code, e.g. al, ep, wp, io, sh
        #[arg(short, long, default_value = "al")]
        basin: String,
        /// Season year; defaults to TCTRACK_SEASON or the current year
        #[arg(short, long)]
        season: Option<i32>,
        /// Frame maps by scaling the track bounds instead of fixed margins
        #[arg(long)]
        zoom: Option<f32>,
    },
    /// Get tracks for a numbered range of storms in a past season
    Season {
        #[arg(short, long, default_value = "al")]
        basin: String,
        #[arg(short, long)]
        year: i32,
        /// First storm number
        #[arg(long, default_value_t = 1)]
        from: u32,
        /// Last storm number
        #[arg(long, default_value_t = 20)]
        to: u32,
        #[arg(long)]
        zoom: Option<f32>,
    },
    /// Summarise a track file already on disk
    Parse {
        file: PathBuf,
        #[arg(long)]
        zoom: Option<f32>,
    },
    /// Classify a wind speed in knots
    Classify {
        knots: u16,
    },
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    let bar = ProgressBar::new(size).with_message(message);
    if let Ok(style) = ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}") {
        bar.set_style(style.progress_chars("##-"));
    }

    bar
}
