//! Caption text for a track map.

use chrono::NaiveDateTime;

use super::{basin_code, classify_intensity, CategoryLabel, StormKind, TrackSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct TrackLabels {
    pub title: String,
    pub peak: String,
    pub span: String,
    pub latest: String,
    pub category: CategoryLabel,
}

impl TrackLabels {
    pub fn new(summary: &TrackSummary) -> Self {
        let title = if summary.name.to_ascii_uppercase().contains("INVEST") {
            format!(
                "{} INVEST \"{}\" TRACK",
                basin_code(&summary.storm_id),
                summary.storm_id.to_uppercase()
            )
        } else {
            format!(
                "{} \"{}\" TRACK",
                StormKind::from_storm_id(&summary.storm_id)
                    .as_str()
                    .to_uppercase(),
                summary.name.to_uppercase()
            )
        };

        let peak = format!(
            "MAX WIND: {}KT | MIN MSLP: {} | PEAK TIME: {}",
            summary.peak_intensity,
            format_pressure(summary.peak_pressure),
            stamp(&summary.peak_time, "%HZ %d-%b"),
        );
        let span = format!(
            "START: {} | END: {}",
            stamp(&summary.formation_time, "%HZ %d-%b-%Y"),
            stamp(&summary.latest_time, "%HZ %d-%b-%Y"),
        );
        let latest = format!(
            "WIND SPEED: {}KT | PRESSURE: {} | {}",
            summary.latest_intensity,
            format_pressure(summary.latest_pressure),
            stamp(&summary.latest_time, "%HZ UTC %d-%b-%Y"),
        );

        TrackLabels {
            title,
            peak,
            span,
            latest,
            category: classify_intensity(summary.latest_intensity),
        }
    }
}

fn stamp(time: &NaiveDateTime, fmt: &str) -> String {
    time.format(fmt).to_string().to_uppercase()
}

fn format_pressure(pressure: Option<u16>) -> String {
    match pressure {
        Some(p) => format!("{}MB", p),
        None => "N/A".to_string(),
    }
}

// -- Tests -------------------------------------------------------------------
