//! Summarise a track file already on disk.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::track::{self, summarize, TrackSummary};

use super::{framing, report};

pub fn parse(file: &Path, zoom: Option<f32>) -> Result<TrackSummary> {
    let framing = framing(zoom)?;
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let records = track::parse(&raw)
        .with_context(|| format!("Failed to ingest {}", file.display()))?;
    let summary = summarize(&records)
        .with_context(|| format!("No usable fixes in {}", file.display()))?;

    report(&summary, framing);

    Ok(summary)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::track::TrackError;

    #[test]
    fn should_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "AL142024 MILTON 241009 1800 25.1N 085.3W AL 85 965").unwrap();
        writeln!(file, "AL142024 MILTON 241009 1200").unwrap();
        writeln!(file, "AL142024 MILTON 241009 0600 23.8N 087.0W AL 140 915").unwrap();
        writeln!(file).unwrap();

        let summary = parse(file.path(), None).unwrap();

        assert_eq!(summary.peak_intensity, 140);
        assert_eq!(summary.peak_pressure, Some(915));
        assert_eq!(summary.latest_intensity, 85);
    }

    #[test]
    fn should_parse_file_with_zoom() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "AL142024 MILTON 241009 1800 25.1N 085.3W AL 85 965").unwrap();

        assert!(parse(file.path(), Some(1.5)).is_ok());
        assert!(parse(file.path(), Some(-1.0)).is_err());
    }

    #[test]
    fn should_surface_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let err = parse(file.path(), None).unwrap_err();

        assert_eq!(err.downcast_ref::<TrackError>(), Some(&TrackError::EmptySeries));
    }
}
